//! High-level database service layer.
//!
//! Repository-agnostic operations used by the HTTP handlers. These functions
//! hold the checks that must hold regardless of the storage backend (required
//! fields, existence of the owning startup) and log every write.
//!
//! # Usage
//!
//! ```no_run
//! use fundspark::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let startups = services::list_startups(&repo).await?;
//!     println!("Found {} startups", startups.len());
//!     Ok(())
//! }
//! ```

use tracing::{debug, info};

use super::repository::{ErrorContext, FullRepository, RepositoryError, RepositoryResult};
use crate::api::{
    ContentCreate, ContentId, ContentItem, Investor, InvestorCreate, InvestorId, Startup,
    StartupCreate, StartupId,
};

/// Entity counts reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    pub startups: usize,
    pub investors: usize,
}

// ==================== Health ====================

/// Check the store and report how many startups and investors it holds.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<StoreCounts> {
    if !repo.health_check().await? {
        return Err(RepositoryError::internal("Repository reported unhealthy"));
    }
    Ok(StoreCounts {
        startups: repo.startup_count().await?,
        investors: repo.investor_count().await?,
    })
}

// ==================== Validation ====================

/// Reject empty values for a required string field.
fn require_non_empty(operation: &str, field: &str, value: &str) -> RepositoryResult<()> {
    if value.is_empty() {
        return Err(RepositoryError::validation_with_context(
            format!("{} must not be empty", field),
            ErrorContext::new(operation).with_details(field),
        ));
    }
    Ok(())
}

// ==================== Startup Operations ====================

/// Create a startup profile.
///
/// # Errors
/// `RepositoryError::ValidationError` if `name` is empty.
pub async fn create_startup<R: FullRepository + ?Sized>(
    repo: &R,
    data: StartupCreate,
) -> RepositoryResult<Startup> {
    require_non_empty("create_startup", "name", &data.name)?;
    let startup = repo.insert_startup(data).await?;
    info!(startup_id = %startup.id, name = %startup.name, "startup created");
    Ok(startup)
}

pub async fn list_startups<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Startup>> {
    repo.list_startups().await
}

pub async fn get_startup<R: FullRepository + ?Sized>(
    repo: &R,
    id: StartupId,
) -> RepositoryResult<Startup> {
    debug!(startup_id = %id, "fetching startup");
    repo.get_startup(id).await
}

// ==================== Content Operations ====================

/// Attach content to a startup.
pub async fn add_content<R: FullRepository + ?Sized>(
    repo: &R,
    startup_id: StartupId,
    data: ContentCreate,
) -> RepositoryResult<ContentItem> {
    let item = repo.insert_content(startup_id, data).await?;
    info!(
        startup_id = %startup_id,
        content_id = %item.id,
        source_type = %item.source_type,
        "content added"
    );
    Ok(item)
}

pub async fn list_content<R: FullRepository + ?Sized>(
    repo: &R,
    startup_id: StartupId,
) -> RepositoryResult<Vec<ContentItem>> {
    repo.list_content(startup_id).await
}

/// Delete a content item. A missing content id is not an error.
///
/// # Errors
/// `RepositoryError::NotFound` if the startup does not exist.
pub async fn delete_content<R: FullRepository + ?Sized>(
    repo: &R,
    startup_id: StartupId,
    content_id: ContentId,
) -> RepositoryResult<()> {
    if repo.delete_content(startup_id, content_id).await? {
        info!(startup_id = %startup_id, content_id = %content_id, "content deleted");
    }
    Ok(())
}

// ==================== Investor Operations ====================

/// Create an investor profile.
///
/// # Errors
/// `RepositoryError::ValidationError` if `name` is empty.
pub async fn create_investor<R: FullRepository + ?Sized>(
    repo: &R,
    data: InvestorCreate,
) -> RepositoryResult<Investor> {
    require_non_empty("create_investor", "name", &data.name)?;
    let investor = repo.insert_investor(data).await?;
    info!(investor_id = %investor.id, name = %investor.name, "investor created");
    Ok(investor)
}

pub async fn list_investors<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<Investor>> {
    repo.list_investors().await
}

pub async fn get_investor<R: FullRepository + ?Sized>(
    repo: &R,
    id: InvestorId,
) -> RepositoryResult<Investor> {
    debug!(investor_id = %id, "fetching investor");
    repo.get_investor(id).await
}

/// Replace an investor profile, keeping its id and creation time.
///
/// The existence check runs before payload validation, so an unknown id is
/// reported as not found even when the body is also invalid.
pub async fn update_investor<R: FullRepository + ?Sized>(
    repo: &R,
    id: InvestorId,
    data: InvestorCreate,
) -> RepositoryResult<Investor> {
    repo.get_investor(id).await?;
    require_non_empty("update_investor", "name", &data.name)?;
    let investor = repo.replace_investor(id, data).await?;
    info!(investor_id = %id, "investor updated");
    Ok(investor)
}

pub async fn delete_investor<R: FullRepository + ?Sized>(
    repo: &R,
    id: InvestorId,
) -> RepositoryResult<()> {
    repo.delete_investor(id).await?;
    info!(investor_id = %id, "investor deleted");
    Ok(())
}
