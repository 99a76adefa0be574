use actix_web::{get, web, HttpRequest, Responder};

use tamarsan_site::db;

use crate::web::helpers::{render, require_user};
use crate::web::state::AppState;
use crate::web::templates::AdminDashboardTemplate;

#[get("/admin")]
async fn dashboard(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let user = match require_user(&state, &req).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let project_count = db::count_projects(&state.pool).await.unwrap_or_default();
    let service_count = db::count_services(&state.pool).await.unwrap_or_default();
    let testimonial_count = db::count_testimonials(&state.pool).await.unwrap_or_default();

    render(AdminDashboardTemplate {
        user,
        project_count,
        service_count,
        testimonial_count,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard);
}
