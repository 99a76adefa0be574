use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Shown on public project cards when a record has no uploaded image.
pub const PROJECT_FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1509391366360-2e959784a276?auto=format&fit=crop&w=800&q=80";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub description: String,
    pub image_url: Option<String>,
    pub rate: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// The public site displays the project date as a year only.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn display_image(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PROJECT_FALLBACK_IMAGE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub description: String,
    pub image_url: Option<String>,
    pub rate: Option<f64>,
}

/// Field-partial update. For the two nullable columns the outer `Option`
/// means "leave unchanged" and `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<Option<String>>,
    pub rate: Option<Option<f64>>,
}
