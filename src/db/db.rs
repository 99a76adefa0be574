use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use std::time::Duration;

use crate::common::GeneralError;

pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    /// Connect and bring the schema up to date. The URL should carry
    /// `mode=rwc` so a first run creates the database file.
    pub async fn new(database_url: &str) -> Result<Self, GeneralError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }
}
