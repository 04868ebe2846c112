//! Service layer for business logic that sits above the entity store.

pub mod analysis;

pub use analysis::{analyze_startup, combine_content, generate_analysis, AnalysisError};
