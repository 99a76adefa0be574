use actix_web::{get, post, web, HttpRequest, Responder};

use tamarsan_site::common::AuthError;

use crate::web::forms::ChangePasswordForm;
use crate::web::helpers::{render, require_user};
use crate::web::security::generic_error_message;
use crate::web::state::AppState;
use crate::web::templates::SettingsTemplate;

#[get("/admin/settings")]
async fn settings_page(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let user = match require_user(&state, &req).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    render(SettingsTemplate {
        user,
        error: None,
        success: None,
    })
}

#[post("/admin/settings/password")]
async fn change_password(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ChangePasswordForm>,
) -> impl Responder {
    let user = match require_user(&state, &req).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    if let Err(message) = form.validate() {
        return render(SettingsTemplate {
            user,
            error: Some(message),
            success: None,
        });
    }

    match state
        .auth
        .change_password(&user, &form.current_password, &form.new_password)
        .await
    {
        Ok(()) => {
            log::info!("password changed for {}", user.email);
            render(SettingsTemplate {
                user,
                error: None,
                success: Some("Password updated successfully".to_string()),
            })
        }
        Err(e @ (AuthError::CurrentPassword | AuthError::WeakPassword)) => {
            render(SettingsTemplate {
                user,
                error: Some(e.to_string()),
                success: None,
            })
        }
        Err(e) => {
            log::error!("password change failed: {}", e);
            render(SettingsTemplate {
                user,
                error: Some(generic_error_message().to_string()),
                success: None,
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(settings_page).service(change_password);
}
