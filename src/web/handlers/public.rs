use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::web::helpers::{render, render_with_status};
use crate::web::state::AppState;
use crate::web::templates::{
    AboutTemplate, ContactTemplate, HelpTemplate, HomeTemplate, NotFoundTemplate,
    ProjectDetailTemplate, ProjectsTemplate, ServicesTemplate, TestimonialsTemplate,
};

/// How many records each home page preview section shows.
const PREVIEW_COUNT: usize = 3;

#[get("/")]
async fn home(state: web::Data<AppState>) -> impl Responder {
    let services = state
        .services
        .state()
        .list
        .into_iter()
        .take(PREVIEW_COUNT)
        .collect();
    let projects = state
        .projects
        .state()
        .list
        .into_iter()
        .take(PREVIEW_COUNT)
        .collect();
    let testimonials = state
        .testimonials
        .state()
        .list
        .into_iter()
        .take(PREVIEW_COUNT)
        .collect();
    render(HomeTemplate {
        services,
        projects,
        testimonials,
    })
}

#[get("/about")]
async fn about() -> impl Responder {
    render(AboutTemplate)
}

#[get("/services")]
async fn services_page(state: web::Data<AppState>) -> impl Responder {
    render(ServicesTemplate {
        state: state.services.state(),
    })
}

#[get("/projects")]
async fn projects_page(state: web::Data<AppState>) -> impl Responder {
    render(ProjectsTemplate {
        state: state.projects.state(),
    })
}

#[get("/projects/{id}")]
async fn project_detail(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.projects.find(path.into_inner()) {
        Some(project) => render(ProjectDetailTemplate { project }),
        None => render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate),
    }
}

#[get("/testimonials")]
async fn testimonials_page(state: web::Data<AppState>) -> impl Responder {
    render(TestimonialsTemplate {
        state: state.testimonials.state(),
    })
}

#[get("/contact")]
async fn contact() -> impl Responder {
    render(ContactTemplate)
}

#[get("/help")]
async fn help_page() -> impl Responder {
    render(HelpTemplate)
}

/// Legacy path kept so old bookmarks land on the admin login.
#[get("/login")]
async fn login_alias() -> impl Responder {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/admin/login"))
        .finish()
}

pub async fn not_found() -> impl Responder {
    render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(about)
        .service(services_page)
        .service(projects_page)
        .service(project_detail)
        .service(testimonials_page)
        .service(contact)
        .service(help_page)
        .service(login_alias);
}
