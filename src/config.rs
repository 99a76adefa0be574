/// Runtime configuration loaded from environment variables.
///
/// Every field has a default suitable for local development; deployments
/// override via the environment (a `.env` file is honored through dotenvy).
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string (default: `sqlite://tamarsan.db?mode=rwc`).
    pub database_url: String,
    /// Listen address (default: `0.0.0.0:8080`).
    pub bind_addr: String,
    /// Directory uploaded project images are stored in (default: `./media`).
    pub media_root: String,
    /// Absolute base used when composing password-reset links
    /// (default: `http://localhost:8080`).
    pub base_url: String,
    /// First-run administrator credentials. Only consulted while the users
    /// table is empty; ignored afterwards.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://tamarsan.db?mode=rwc".into());

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());

        let media_root =
            std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "./media".into());

        let base_url = std::env::var("SITE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".into());

        let admin_email = std::env::var("ADMIN_EMAIL").ok().filter(|s| !s.is_empty());
        let admin_password = std::env::var("ADMIN_PASSWORD").ok().filter(|s| !s.is_empty());

        Self {
            database_url,
            bind_addr,
            media_root,
            base_url,
            admin_email,
            admin_password,
        }
    }
}
