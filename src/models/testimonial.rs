use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Testimonial {
    pub id: Uuid,
    pub rate: i64,
    pub description: String,
    pub role: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Testimonial {
    pub fn stars(&self) -> String {
        "★".repeat(self.rate.clamp(0, 5) as usize)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialCreate {
    /// Defaults to 5 when absent.
    pub rate: Option<i64>,
    pub description: String,
    pub role: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestimonialUpdate {
    pub rate: Option<i64>,
    pub description: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
}
