use sqlx::SqlitePool;
use uuid::Uuid;

use crate::common::StoreError;
use crate::db;
use crate::log_err;
use crate::models::{Service, ServiceCreate, ServiceUpdate};

use super::{ListCache, ListState};

/// Process-wide cache of the services table, newest first.
pub struct ServiceStore {
    pool: SqlitePool,
    cache: ListCache<Service>,
}

impl ServiceStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            cache: ListCache::new(),
        }
    }

    pub fn state(&self) -> ListState<Service> {
        self.cache.snapshot()
    }

    pub fn find(&self, id: Uuid) -> Option<Service> {
        self.cache.snapshot().list.into_iter().find(|s| s.id == id)
    }

    pub async fn refetch(&self) {
        match db::list_services(&self.pool).await {
            Ok(items) => self.cache.set_fetched(items),
            Err(e) => {
                log_err!(&self.pool, &e, serde_json::json!({"op": "list_services"}));
                self.cache.set_fetch_failed(e.to_string());
            }
        }
    }

    pub async fn add(&self, data: &ServiceCreate) -> Result<Service, StoreError> {
        let created = db::create_service(&self.pool, data).await?;
        self.cache.prepend(created.clone());
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, data: &ServiceUpdate) -> Result<Service, StoreError> {
        let updated = db::update_service(&self.pool, id, data)
            .await?
            .ok_or(StoreError::NotFound)?;
        self.cache.replace(|s| s.id == id, updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        if !db::delete_service(&self.pool, id).await? {
            return Err(StoreError::NotFound);
        }
        self.cache.remove(|s| s.id == id);
        Ok(())
    }
}
