use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;

use tamarsan_site::common::StoreError;
use tamarsan_site::models::User;

use crate::web::forms::{EditQuery, TestimonialForm};
use crate::web::helpers::{render, require_user, see_other};
use crate::web::security::generic_error_message;
use crate::web::state::AppState;
use crate::web::templates::{AdminTestimonialsTemplate, TestimonialFormView};

fn notice_url(message: &str) -> String {
    format!("/admin/testimonials?notice={}", urlencoding::encode(message))
}

fn render_panel(
    state: &AppState,
    user: User,
    form: TestimonialFormView,
    notice: Option<String>,
    error: Option<String>,
) -> HttpResponse {
    render(AdminTestimonialsTemplate {
        user,
        notice,
        state: state.testimonials.state(),
        form,
        error,
    })
}

#[get("/admin/testimonials")]
async fn testimonials_panel(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<EditQuery>,
) -> impl Responder {
    let user = match require_user(&state, &req).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let form = query
        .edit
        .and_then(|id| state.testimonials.find(id))
        .map(|testimonial| TestimonialFormView::from(&testimonial))
        .unwrap_or_default();
    render_panel(&state, user, form, query.notice.clone(), None)
}

#[post("/admin/testimonials")]
async fn create_testimonial(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<TestimonialForm>,
) -> impl Responder {
    let user = match require_user(&state, &req).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    if let Err(message) = form.validate() {
        let view = TestimonialFormView::from_submission(&form, None);
        return render_panel(&state, user, view, None, Some(message));
    }

    match state.testimonials.add(&form.to_create()).await {
        Ok(testimonial) => {
            log::info!("created testimonial {}", testimonial.id);
            see_other(&req, &notice_url("Testimonial created"))
        }
        Err(e) => {
            log::error!("testimonial create failed: {}", e);
            let view = TestimonialFormView::from_submission(&form, None);
            render_panel(&state, user, view, None, Some(generic_error_message().to_string()))
        }
    }
}

#[post("/admin/testimonials/{id}")]
async fn update_testimonial(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<TestimonialForm>,
) -> impl Responder {
    let user = match require_user(&state, &req).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let id = path.into_inner();

    if let Err(message) = form.validate() {
        let view = TestimonialFormView::from_submission(&form, Some(id));
        return render_panel(&state, user, view, None, Some(message));
    }

    match state.testimonials.update(id, &form.to_update()).await {
        Ok(_) => see_other(&req, &notice_url("Testimonial updated")),
        Err(e) => {
            log::error!("testimonial update failed: {}", e);
            let view = TestimonialFormView::from_submission(&form, Some(id));
            let message = match e {
                StoreError::NotFound => e.to_string(),
                StoreError::Database(_) => generic_error_message().to_string(),
            };
            render_panel(&state, user, view, None, Some(message))
        }
    }
}

#[post("/admin/testimonials/{id}/delete")]
async fn delete_testimonial(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let user = match require_user(&state, &req).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    match state.testimonials.delete(path.into_inner()).await {
        Ok(()) => see_other(&req, &notice_url("Testimonial deleted")),
        Err(e) => {
            log::error!("testimonial delete failed: {}", e);
            let message = match e {
                StoreError::NotFound => e.to_string(),
                StoreError::Database(_) => generic_error_message().to_string(),
            };
            render_panel(&state, user, TestimonialFormView::default(), None, Some(message))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(testimonials_panel)
        .service(create_testimonial)
        .service(update_testimonial)
        .service(delete_testimonial);
}
