//! Startup and content repository traits.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{ContentCreate, ContentId, ContentItem, Startup, StartupCreate, StartupId};

/// Repository trait for startup profiles.
///
/// Startups are never updated or deleted once created.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait StartupRepository: Send + Sync {
    /// Check that the backing store is usable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Store a new startup, assigning the next id and the creation time.
    async fn insert_startup(&self, data: StartupCreate) -> RepositoryResult<Startup>;

    /// Fetch a startup by id.
    ///
    /// # Errors
    /// `RepositoryError::NotFound` if no startup has this id.
    async fn get_startup(&self, id: StartupId) -> RepositoryResult<Startup>;

    /// All startups in creation order.
    async fn list_startups(&self) -> RepositoryResult<Vec<Startup>>;

    async fn startup_count(&self) -> RepositoryResult<usize>;
}

/// Repository trait for content items owned by startups.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Attach content to an existing startup.
    ///
    /// The content counter is only advanced when the startup exists.
    ///
    /// # Errors
    /// `RepositoryError::NotFound` if the startup does not exist.
    async fn insert_content(
        &self,
        startup_id: StartupId,
        data: ContentCreate,
    ) -> RepositoryResult<ContentItem>;

    /// Content of a startup in insertion order.
    ///
    /// # Errors
    /// `RepositoryError::NotFound` if the startup does not exist.
    async fn list_content(&self, startup_id: StartupId) -> RepositoryResult<Vec<ContentItem>>;

    /// Remove one content item from a startup.
    ///
    /// # Returns
    /// * `Ok(true)` if an item was removed
    /// * `Ok(false)` if the startup has no item with this id
    ///
    /// # Errors
    /// `RepositoryError::NotFound` if the startup does not exist.
    async fn delete_content(
        &self,
        startup_id: StartupId,
        content_id: ContentId,
    ) -> RepositoryResult<bool>;
}
