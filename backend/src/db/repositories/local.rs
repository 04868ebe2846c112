//! In-memory local repository implementation.
//!
//! All data lives in process memory and is lost on restart. Every write
//! (counter increment plus insert) happens under a single write lock, so
//! concurrent requests never observe duplicate or skipped ids.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::debug;

use crate::api::{
    ContentCreate, ContentId, ContentItem, Investor, InvestorCreate, InvestorId, Startup,
    StartupCreate, StartupId,
};
use crate::db::repository::*;

/// In-memory local repository.
///
/// Cloning yields another handle to the same data.
///
/// # Example
/// ```
/// use fundspark::api::StartupCreate;
/// use fundspark::db::repositories::LocalRepository;
/// use fundspark::db::repository::StartupRepository;
///
/// # tokio_test_block(async {
/// let repo = LocalRepository::new();
/// let startup = repo
///     .insert_startup(StartupCreate {
///         name: "Acme".into(),
///         website: None,
///         description: None,
///         industry: None,
///         stage: None,
///         location: None,
///     })
///     .await
///     .unwrap();
/// assert_eq!(startup.id.value(), 1);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    // Ids are monotonic, so key order is creation order.
    startups: BTreeMap<StartupId, Startup>,
    content: HashMap<StartupId, Vec<ContentItem>>,
    investors: BTreeMap<InvestorId, Investor>,

    // ID counters
    next_startup_id: i64,
    next_content_id: i64,
    next_investor_id: i64,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            startups: BTreeMap::new(),
            content: HashMap::new(),
            investors: BTreeMap::new(),
            next_startup_id: 1,
            next_content_id: 1,
            next_investor_id: 1,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Clear all data and reset the id counters.
    pub fn clear(&self) {
        *self.data.write() = LocalData::default();
    }

    fn startup_not_found(operation: &str, id: StartupId) -> RepositoryError {
        RepositoryError::not_found_with_context(
            "Startup not found",
            ErrorContext::new(operation)
                .with_entity("startup")
                .with_entity_id(id),
        )
    }

    fn investor_not_found(operation: &str, id: InvestorId) -> RepositoryError {
        RepositoryError::not_found_with_context(
            "Investor not found",
            ErrorContext::new(operation)
                .with_entity("investor")
                .with_entity_id(id),
        )
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StartupRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn insert_startup(&self, data: StartupCreate) -> RepositoryResult<Startup> {
        let mut guard = self.data.write();
        let id = StartupId::new(guard.next_startup_id);
        guard.next_startup_id += 1;

        let startup = Startup::from_create(id, data, Utc::now());
        guard.startups.insert(id, startup.clone());
        guard.content.insert(id, Vec::new());
        Ok(startup)
    }

    async fn get_startup(&self, id: StartupId) -> RepositoryResult<Startup> {
        self.data
            .read()
            .startups
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::startup_not_found("get_startup", id))
    }

    async fn list_startups(&self) -> RepositoryResult<Vec<Startup>> {
        Ok(self.data.read().startups.values().cloned().collect())
    }

    async fn startup_count(&self) -> RepositoryResult<usize> {
        Ok(self.data.read().startups.len())
    }
}

#[async_trait]
impl ContentRepository for LocalRepository {
    async fn insert_content(
        &self,
        startup_id: StartupId,
        data: ContentCreate,
    ) -> RepositoryResult<ContentItem> {
        let mut guard = self.data.write();
        if !guard.startups.contains_key(&startup_id) {
            return Err(Self::startup_not_found("insert_content", startup_id));
        }

        let id = ContentId::new(guard.next_content_id);
        guard.next_content_id += 1;

        let item = ContentItem {
            id,
            startup_id,
            source_type: data.source_type,
            source_identifier: data.source_identifier,
            text: data.text,
            created_at: Utc::now(),
        };
        guard
            .content
            .entry(startup_id)
            .or_default()
            .push(item.clone());
        Ok(item)
    }

    async fn list_content(&self, startup_id: StartupId) -> RepositoryResult<Vec<ContentItem>> {
        let guard = self.data.read();
        if !guard.startups.contains_key(&startup_id) {
            return Err(Self::startup_not_found("list_content", startup_id));
        }
        Ok(guard.content.get(&startup_id).cloned().unwrap_or_default())
    }

    async fn delete_content(
        &self,
        startup_id: StartupId,
        content_id: ContentId,
    ) -> RepositoryResult<bool> {
        let mut guard = self.data.write();
        if !guard.startups.contains_key(&startup_id) {
            return Err(Self::startup_not_found("delete_content", startup_id));
        }

        let Some(items) = guard.content.get_mut(&startup_id) else {
            return Ok(false);
        };
        let before = items.len();
        items.retain(|item| item.id != content_id);
        let removed = items.len() != before;
        if !removed {
            debug!(%startup_id, %content_id, "content item already absent");
        }
        Ok(removed)
    }
}

#[async_trait]
impl InvestorRepository for LocalRepository {
    async fn insert_investor(&self, data: InvestorCreate) -> RepositoryResult<Investor> {
        let mut guard = self.data.write();
        let id = InvestorId::new(guard.next_investor_id);
        guard.next_investor_id += 1;

        let investor = Investor::from_create(id, data, Utc::now());
        guard.investors.insert(id, investor.clone());
        Ok(investor)
    }

    async fn get_investor(&self, id: InvestorId) -> RepositoryResult<Investor> {
        self.data
            .read()
            .investors
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::investor_not_found("get_investor", id))
    }

    async fn list_investors(&self) -> RepositoryResult<Vec<Investor>> {
        Ok(self.data.read().investors.values().cloned().collect())
    }

    async fn replace_investor(
        &self,
        id: InvestorId,
        data: InvestorCreate,
    ) -> RepositoryResult<Investor> {
        let mut guard = self.data.write();
        let existing = guard
            .investors
            .get_mut(&id)
            .ok_or_else(|| Self::investor_not_found("replace_investor", id))?;

        let updated = Investor::from_create(id, data, existing.created_at);
        *existing = updated.clone();
        Ok(updated)
    }

    async fn delete_investor(&self, id: InvestorId) -> RepositoryResult<()> {
        self.data
            .write()
            .investors
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Self::investor_not_found("delete_investor", id))
    }

    async fn investor_count(&self) -> RepositoryResult<usize> {
        Ok(self.data.read().investors.len())
    }
}
