use sqlx::SqlitePool;
use uuid::Uuid;

use crate::common::StoreError;
use crate::db;
use crate::log_err;
use crate::models::{Project, ProjectCreate, ProjectUpdate};

use super::{ListCache, ListState};

/// Process-wide cache of the projects table, newest project date first.
pub struct ProjectStore {
    pool: SqlitePool,
    cache: ListCache<Project>,
}

impl ProjectStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            cache: ListCache::new(),
        }
    }

    pub fn state(&self) -> ListState<Project> {
        self.cache.snapshot()
    }

    pub fn find(&self, id: Uuid) -> Option<Project> {
        self.cache.snapshot().list.into_iter().find(|p| p.id == id)
    }

    /// Initial load and every later refresh: replaces the list wholesale.
    /// A failure records the message and keeps whatever was displayed.
    pub async fn refetch(&self) {
        match db::list_projects(&self.pool).await {
            Ok(items) => self.cache.set_fetched(items),
            Err(e) => {
                log_err!(&self.pool, &e, serde_json::json!({"op": "list_projects"}));
                self.cache.set_fetch_failed(e.to_string());
            }
        }
    }

    pub async fn add(&self, data: &ProjectCreate) -> Result<Project, StoreError> {
        let created = db::create_project(&self.pool, data).await?;
        // Prepended only after the insert is acknowledged. A backdated date
        // sits above newer-dated rows until the next refetch.
        self.cache.prepend(created.clone());
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, data: &ProjectUpdate) -> Result<Project, StoreError> {
        let updated = db::update_project(&self.pool, id, data)
            .await?
            .ok_or(StoreError::NotFound)?;
        self.cache.replace(|p| p.id == id, updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        if !db::delete_project(&self.pool, id).await? {
            return Err(StoreError::NotFound);
        }
        self.cache.remove(|p| p.id == id);
        Ok(())
    }
}
