//! Repository traits for the entity store.
//!
//! The store is split by entity kind. Handlers depend on [`FullRepository`],
//! which every type implementing all three traits gets for free.

pub mod error;
pub mod investor;
pub mod startup;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use investor::InvestorRepository;
pub use startup::{ContentRepository, StartupRepository};

/// Combined repository trait used by the service and HTTP layers.
pub trait FullRepository: StartupRepository + ContentRepository + InvestorRepository {}

impl<T> FullRepository for T where T: StartupRepository + ContentRepository + InvestorRepository {}
