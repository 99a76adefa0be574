pub mod account;
pub mod admin;
pub mod admin_projects;
pub mod admin_services;
pub mod admin_testimonials;
pub mod auth;
pub mod public;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    auth::configure(cfg);
    admin::configure(cfg);
    admin_projects::configure(cfg);
    admin_services::configure(cfg);
    admin_testimonials::configure(cfg);
    account::configure(cfg);
}
