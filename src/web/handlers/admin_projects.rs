use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use futures_util::TryStreamExt as _;
use uuid::Uuid;

use tamarsan_site::common::StoreError;
use tamarsan_site::models::User;
use tamarsan_site::services::MAX_IMAGE_BYTES;

use crate::web::forms::{EditQuery, ProjectFormData, UploadedImage};
use crate::web::helpers::{render, require_user, see_other};
use crate::web::security::generic_error_message;
use crate::web::state::AppState;
use crate::web::templates::{AdminProjectsTemplate, ProjectFormView};

const TEXT_FIELD_LIMIT: usize = 64 * 1024;

fn notice_url(message: &str) -> String {
    format!("/admin/projects?notice={}", urlencoding::encode(message))
}

fn render_panel(
    state: &AppState,
    user: User,
    form: ProjectFormView,
    notice: Option<String>,
    error: Option<String>,
) -> HttpResponse {
    render(AdminProjectsTemplate {
        user,
        notice,
        state: state.projects.state(),
        form,
        error,
    })
}

/// Collects the multipart project submission into plain form data.
///
/// The image field is capped just above the upload limit so an oversized
/// file is detected without buffering the whole thing.
async fn read_form(mut payload: Multipart) -> Result<ProjectFormData, String> {
    let mut form = ProjectFormData::default();

    while let Some(mut field) = payload.try_next().await.map_err(|e| e.to_string())? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "image" {
            let filename = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .unwrap_or_default()
                .to_string();
            let content_type = field
                .content_type()
                .map(|mime| mime.to_string())
                .unwrap_or_default();

            let mut bytes: Vec<u8> = Vec::new();
            while let Some(chunk) = field.try_next().await.map_err(|e| e.to_string())? {
                bytes.extend_from_slice(&chunk);
                if bytes.len() > MAX_IMAGE_BYTES {
                    bytes.truncate(MAX_IMAGE_BYTES + 1);
                    break;
                }
            }

            // Browsers send an empty file part when nothing was picked.
            if !filename.is_empty() && !bytes.is_empty() {
                form.image = Some(UploadedImage {
                    filename,
                    content_type,
                    bytes,
                });
            }
        } else {
            let mut data: Vec<u8> = Vec::new();
            while let Some(chunk) = field.try_next().await.map_err(|e| e.to_string())? {
                if data.len() + chunk.len() > TEXT_FIELD_LIMIT {
                    return Err(format!("field {} too large", name));
                }
                data.extend_from_slice(&chunk);
            }
            let value = String::from_utf8_lossy(&data).into_owned();
            match name.as_str() {
                "name" => form.name = value,
                "date" => form.date = value,
                "location" => form.location = value,
                "description" => form.description = value,
                "rate" => form.rate = value,
                "image_url" => form.image_url = value,
                _ => {}
            }
        }
    }

    Ok(form)
}

#[get("/admin/projects")]
async fn projects_panel(
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
        .and_then(|id| state.projects.find(id))
        .map(|project| ProjectFormView::from(&project))
        .unwrap_or_default();
    render_panel(&state, user, form, query.notice.clone(), None)
}

#[post("/admin/projects")]
async fn create_project(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: Multipart,
) -> impl Responder {
    let user = match require_user(&state, &req).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let form = match read_form(payload).await {
        Ok(form) => form,
        Err(message) => {
            log::warn!("malformed project submission: {}", message);
            return render_panel(
                &state,
                user,
                ProjectFormView::default(),
                None,
                Some(generic_error_message().to_string()),
            );
        }
    };

    if let Err(message) = form.validate() {
        let view = ProjectFormView::from_submission(&form, None);
        return render_panel(&state, user, view, None, Some(message));
    }

    // The image is stored first. A rejected upload stops the whole
    // submission, so no project row exists without its picture.
    let uploaded = match &form.image {
        Some(upload) => {
            match state
                .media
                .store(&upload.filename, &upload.content_type, &upload.bytes)
                .await
            {
                Ok(url) => Some(url),
                Err(e) => {
                    let view = ProjectFormView::from_submission(&form, None);
                    return render_panel(&state, user, view, None, Some(e.to_string()));
                }
            }
        }
        None => None,
    };

    let image_url = uploaded.clone().or_else(|| form.typed_image_url());
    let data = match form.to_create(image_url) {
        Ok(data) => data,
        Err(message) => {
            let view = ProjectFormView::from_submission(&form, None);
            return render_panel(&state, user, view, None, Some(message));
        }
    };

    match state.projects.add(&data).await {
        Ok(project) => {
            log::info!("created project {} ({})", project.name, project.id);
            see_other(&req, &notice_url("Project created"))
        }
        Err(e) => {
            log::error!("project create failed: {}", e);
            if let Some(url) = uploaded {
                if let Err(e) = state.media.remove(&url).await {
                    log::warn!("failed to remove orphaned image {}: {}", url, e);
                }
            }
            let view = ProjectFormView::from_submission(&form, None);
            render_panel(&state, user, view, None, Some(generic_error_message().to_string()))
        }
    }
}

#[post("/admin/projects/{id}")]
async fn update_project(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    payload: Multipart,
) -> impl Responder {
    let user = match require_user(&state, &req).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let id = path.into_inner();
    let previous_image = state.projects.find(id).and_then(|p| p.image_url);

    let form = match read_form(payload).await {
        Ok(form) => form,
        Err(message) => {
            log::warn!("malformed project submission: {}", message);
            return render_panel(
                &state,
                user,
                ProjectFormView::default(),
                None,
                Some(generic_error_message().to_string()),
            );
        }
    };

    if let Err(message) = form.validate() {
        let view = ProjectFormView::from_submission(&form, Some(id));
        return render_panel(&state, user, view, None, Some(message));
    }

    let uploaded = match &form.image {
        Some(upload) => {
            match state
                .media
                .store(&upload.filename, &upload.content_type, &upload.bytes)
                .await
            {
                Ok(url) => Some(url),
                Err(e) => {
                    let view = ProjectFormView::from_submission(&form, Some(id));
                    return render_panel(&state, user, view, None, Some(e.to_string()));
                }
            }
        }
        None => None,
    };

    let image_url = uploaded.clone().or_else(|| form.typed_image_url());
    let data = match form.to_update(image_url) {
        Ok(data) => data,
        Err(message) => {
            let view = ProjectFormView::from_submission(&form, Some(id));
            return render_panel(&state, user, view, None, Some(message));
        }
    };

    match state.projects.update(id, &data).await {
        Ok(updated) => {
            // Drop the superseded stored object once the new record is
            // confirmed. External URLs are left alone by remove().
            if let Some(prev) = previous_image {
                if updated.image_url.as_deref() != Some(prev.as_str()) {
                    if let Err(e) = state.media.remove(&prev).await {
                        log::warn!("failed to remove replaced image {}: {}", prev, e);
                    }
                }
            }
            see_other(&req, &notice_url("Project updated"))
        }
        Err(e) => {
            log::error!("project update failed: {}", e);
            if let Some(url) = uploaded {
                if let Err(e) = state.media.remove(&url).await {
                    log::warn!("failed to remove orphaned image {}: {}", url, e);
                }
            }
            let view = ProjectFormView::from_submission(&form, Some(id));
            let message = match e {
                StoreError::NotFound => e.to_string(),
                StoreError::Database(_) => generic_error_message().to_string(),
            };
            render_panel(&state, user, view, None, Some(message))
        }
    }
}

#[post("/admin/projects/{id}/delete")]
async fn delete_project(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let user = match require_user(&state, &req).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let id = path.into_inner();
    let stored_image = state.projects.find(id).and_then(|p| p.image_url);

    match state.projects.delete(id).await {
        Ok(()) => {
            if let Some(url) = stored_image {
                if let Err(e) = state.media.remove(&url).await {
                    log::warn!("failed to remove image {}: {}", url, e);
                }
            }
            see_other(&req, &notice_url("Project deleted"))
        }
        Err(e) => {
            log::error!("project delete failed: {}", e);
            let message = match e {
                StoreError::NotFound => e.to_string(),
                StoreError::Database(_) => generic_error_message().to_string(),
            };
            render_panel(&state, user, ProjectFormView::default(), None, Some(message))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(projects_panel)
        .service(create_project)
        .service(update_project)
        .service(delete_project);
}
