use std::sync::Arc;

use sqlx::SqlitePool;
use tamarsan_site::services::{AuthService, MediaStore};
use tamarsan_site::store::{ProjectStore, ServiceStore, TestimonialStore};

use crate::web::security::RateLimiter;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth: AuthService,
    pub media: MediaStore,
    pub projects: Arc<ProjectStore>,
    pub services: Arc<ServiceStore>,
    pub testimonials: Arc<TestimonialStore>,
    pub rate_limiter: Arc<RateLimiter>,
    pub base_url: String,
}
