mod web;

use std::sync::Arc;
use std::time::Duration;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use tamarsan_site::config::Config;
use tamarsan_site::db::Database;
use tamarsan_site::services::{AuthService, MediaStore};
use tamarsan_site::store::{ProjectStore, ServiceStore, TestimonialStore};

use web::middleware::SecurityHeaders;
use web::security::RateLimiter;
use web::state::AppState;

const LOGIN_ATTEMPTS: usize = 5;
const LOGIN_WINDOW: Duration = Duration::from_secs(15 * 60);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let db = Database::new(&config.database_url)
        .await
        .expect("Failed to connect to database / run migrations");

    let auth = AuthService::new(db.pool.clone());
    match (&config.admin_email, &config.admin_password) {
        (Some(email), Some(password)) => match auth.bootstrap_admin(email, password).await {
            Ok(Some(user)) => log::info!("created initial admin account {}", user.email),
            Ok(None) => {}
            Err(e) => log::error!("admin bootstrap failed: {}", e),
        },
        (None, None) => {}
        _ => log::warn!("ADMIN_EMAIL and ADMIN_PASSWORD must both be set to create the admin account"),
    }

    let projects = Arc::new(ProjectStore::new(db.pool.clone()));
    let services = Arc::new(ServiceStore::new(db.pool.clone()));
    let testimonials = Arc::new(TestimonialStore::new(db.pool.clone()));

    // Content loads in the background; pages show their loading state
    // until the first fetch lands.
    {
        let projects = projects.clone();
        tokio::spawn(async move { projects.refetch().await });
        let services = services.clone();
        tokio::spawn(async move { services.refetch().await });
        let testimonials = testimonials.clone();
        tokio::spawn(async move { testimonials.refetch().await });
    }

    let state = Data::new(AppState {
        pool: db.pool.clone(),
        auth,
        media: MediaStore::new(&config.media_root),
        projects,
        services,
        testimonials,
        rate_limiter: Arc::new(RateLimiter::new(LOGIN_ATTEMPTS, LOGIN_WINDOW)),
        base_url: config.base_url.clone(),
    });

    let media_root = config.media_root.clone();
    log::info!("listening on {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(SecurityHeaders)
            .configure(web::handlers::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .service(Files::new("/media", media_root.clone()))
            .default_service(actix_web::web::to(web::handlers::public::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
