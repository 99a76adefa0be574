use sqlx::SqlitePool;
use uuid::Uuid;

use crate::common::StoreError;
use crate::db;
use crate::log_err;
use crate::models::{Testimonial, TestimonialCreate, TestimonialUpdate};

use super::{ListCache, ListState};

/// Process-wide cache of the testimonials table, newest first.
pub struct TestimonialStore {
    pool: SqlitePool,
    cache: ListCache<Testimonial>,
}

impl TestimonialStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            cache: ListCache::new(),
        }
    }

    pub fn state(&self) -> ListState<Testimonial> {
        self.cache.snapshot()
    }

    pub fn find(&self, id: Uuid) -> Option<Testimonial> {
        self.cache.snapshot().list.into_iter().find(|t| t.id == id)
    }

    pub async fn refetch(&self) {
        match db::list_testimonials(&self.pool).await {
            Ok(items) => self.cache.set_fetched(items),
            Err(e) => {
                log_err!(&self.pool, &e, serde_json::json!({"op": "list_testimonials"}));
                self.cache.set_fetch_failed(e.to_string());
            }
        }
    }

    pub async fn add(&self, data: &TestimonialCreate) -> Result<Testimonial, StoreError> {
        let created = db::create_testimonial(&self.pool, data).await?;
        self.cache.prepend(created.clone());
        Ok(created)
    }

    pub async fn update(
        &self,
        id: Uuid,
        data: &TestimonialUpdate,
    ) -> Result<Testimonial, StoreError> {
        let updated = db::update_testimonial(&self.pool, id, data)
            .await?
            .ok_or(StoreError::NotFound)?;
        self.cache.replace(|t| t.id == id, updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        if !db::delete_testimonial(&self.pool, id).await? {
            return Err(StoreError::NotFound);
        }
        self.cache.remove(|t| t.id == id);
        Ok(())
    }
}
