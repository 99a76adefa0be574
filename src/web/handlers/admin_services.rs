use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;

use tamarsan_site::common::StoreError;
use tamarsan_site::models::{ServiceIcon, User};

use crate::web::forms::{EditQuery, ServiceForm};
use crate::web::helpers::{render, require_user, see_other};
use crate::web::security::generic_error_message;
use crate::web::state::AppState;
use crate::web::templates::{AdminServicesTemplate, ServiceFormView};

fn notice_url(message: &str) -> String {
    format!("/admin/services?notice={}", urlencoding::encode(message))
}

fn render_panel(
    state: &AppState,
    user: User,
    form: ServiceFormView,
    notice: Option<String>,
    error: Option<String>,
) -> HttpResponse {
    render(AdminServicesTemplate {
        user,
        notice,
        state: state.services.state(),
        form,
        icon_choices: ServiceIcon::ALL,
        error,
    })
}

#[get("/admin/services")]
async fn services_panel(
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
        .and_then(|id| state.services.find(id))
        .map(|service| ServiceFormView::from(&service))
        .unwrap_or_default();
    render_panel(&state, user, form, query.notice.clone(), None)
}

#[post("/admin/services")]
async fn create_service(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ServiceForm>,
) -> impl Responder {
    let user = match require_user(&state, &req).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    if let Err(message) = form.validate() {
        let view = ServiceFormView::from_submission(&form, None);
        return render_panel(&state, user, view, None, Some(message));
    }

    match state.services.add(&form.to_create()).await {
        Ok(service) => {
            log::info!("created service {} ({})", service.title, service.id);
            see_other(&req, &notice_url("Service created"))
        }
        Err(e) => {
            log::error!("service create failed: {}", e);
            let view = ServiceFormView::from_submission(&form, None);
            render_panel(&state, user, view, None, Some(generic_error_message().to_string()))
        }
    }
}

#[post("/admin/services/{id}")]
async fn update_service(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<ServiceForm>,
) -> impl Responder {
    let user = match require_user(&state, &req).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let id = path.into_inner();

    if let Err(message) = form.validate() {
        let view = ServiceFormView::from_submission(&form, Some(id));
        return render_panel(&state, user, view, None, Some(message));
    }

    match state.services.update(id, &form.to_update()).await {
        Ok(_) => see_other(&req, &notice_url("Service updated")),
        Err(e) => {
            log::error!("service update failed: {}", e);
            let view = ServiceFormView::from_submission(&form, Some(id));
            let message = match e {
                StoreError::NotFound => e.to_string(),
                StoreError::Database(_) => generic_error_message().to_string(),
            };
            render_panel(&state, user, view, None, Some(message))
        }
    }
}

#[post("/admin/services/{id}/delete")]
async fn delete_service(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let user = match require_user(&state, &req).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    match state.services.delete(path.into_inner()).await {
        Ok(()) => see_other(&req, &notice_url("Service deleted")),
        Err(e) => {
            log::error!("service delete failed: {}", e);
            let message = match e {
                StoreError::NotFound => e.to_string(),
                StoreError::Database(_) => generic_error_message().to_string(),
            };
            render_panel(&state, user, ServiceFormView::default(), None, Some(message))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(services_panel)
        .service(create_service)
        .service(update_service)
        .service(delete_service);
}
