//! Investor repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Investor, InvestorCreate, InvestorId};

/// Repository trait for investor profiles.
#[async_trait]
pub trait InvestorRepository: Send + Sync {
    /// Store a new investor, assigning the next id and the creation time.
    async fn insert_investor(&self, data: InvestorCreate) -> RepositoryResult<Investor>;

    async fn get_investor(&self, id: InvestorId) -> RepositoryResult<Investor>;

    /// All investors in creation order.
    async fn list_investors(&self) -> RepositoryResult<Vec<Investor>>;

    /// Replace every field of an investor except `id` and `created_at`.
    ///
    /// # Errors
    /// `RepositoryError::NotFound` if the investor does not exist.
    async fn replace_investor(
        &self,
        id: InvestorId,
        data: InvestorCreate,
    ) -> RepositoryResult<Investor>;

    /// Remove an investor. Its id is never handed out again.
    ///
    /// # Errors
    /// `RepositoryError::NotFound` if the investor does not exist.
    async fn delete_investor(&self, id: InvestorId) -> RepositoryResult<()>;

    async fn investor_count(&self) -> RepositoryResult<usize>;
}
