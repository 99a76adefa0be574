use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};

use tamarsan_site::common::AuthError;

use crate::web::forms::{AuthQuery, ForgotPasswordForm, LoginForm, ResetPasswordForm, ResetQuery};
use crate::web::helpers::{
    current_user, removal_cookie, render, see_other, session_cookie, SESSION_COOKIE,
};
use crate::web::security::{client_ip, generic_error_message, validate_email};
use crate::web::state::AppState;
use crate::web::templates::{ForgotPasswordTemplate, LoginTemplate, ResetPasswordTemplate};

fn login_error_message(code: &str) -> String {
    match code {
        "invalid" => "Invalid email or password".to_string(),
        "ratelimited" => "Too many attempts. Please try again later.".to_string(),
        _ => generic_error_message().to_string(),
    }
}

fn login_notice_message(code: &str) -> Option<String> {
    match code {
        "reset" => Some("Password updated. Sign in with your new password.".to_string()),
        "signedout" => Some("You have been signed out.".to_string()),
        _ => None,
    }
}

#[get("/admin/login")]
async fn login_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AuthQuery>,
) -> impl Responder {
    if current_user(&state, &req).await.is_some() {
        return HttpResponse::SeeOther()
            .insert_header(("Location", "/admin"))
            .finish();
    }
    render(LoginTemplate {
        error: query.error.as_deref().map(login_error_message),
        notice: query.notice.as_deref().and_then(login_notice_message),
    })
}

#[post("/admin/login")]
async fn login_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let ip = client_ip(&req);
    if !state.rate_limiter.allow(&ip) {
        log::warn!("login rate limited for {}", ip);
        return see_other(&req, "/admin/login?error=ratelimited");
    }

    match state.auth.sign_in(&form.email, &form.password).await {
        Ok((user, session)) => {
            log::info!("signed in {}", user.email);
            let mut response = see_other(&req, "/admin");
            if let Err(e) = response.add_cookie(&session_cookie(session.token)) {
                log::error!("failed to attach session cookie: {}", e);
            }
            response
        }
        Err(AuthError::InvalidCredentials) => see_other(&req, "/admin/login?error=invalid"),
        Err(e) => {
            log::error!("sign in failed: {}", e);
            see_other(&req, "/admin/login?error=server")
        }
    }
}

#[post("/admin/logout")]
async fn logout(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Some(token) = req
        .cookie(SESSION_COOKIE)
        .and_then(|c| c.value().parse().ok())
    {
        if let Err(e) = state.auth.sign_out(token).await {
            log::error!("sign out failed: {}", e);
        }
    }
    let mut response = see_other(&req, "/admin/login?notice=signedout");
    if let Err(e) = response.add_cookie(&removal_cookie()) {
        log::error!("failed to clear session cookie: {}", e);
    }
    response
}

#[get("/admin/forgot-password")]
async fn forgot_password_page() -> impl Responder {
    render(ForgotPasswordTemplate {
        error: None,
        sent: false,
    })
}

#[post("/admin/forgot-password")]
async fn forgot_password_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ForgotPasswordForm>,
) -> impl Responder {
    let ip = client_ip(&req);
    if !state.rate_limiter.allow(&ip) {
        log::warn!("password reset rate limited for {}", ip);
        return render(ForgotPasswordTemplate {
            error: Some("Too many attempts. Please try again later.".to_string()),
            sent: false,
        });
    }

    if !validate_email(&form.email) {
        return render(ForgotPasswordTemplate {
            error: Some("Please enter a valid email address".to_string()),
            sent: false,
        });
    }

    // The response is the same whether or not the address has an account.
    if let Err(e) = state
        .auth
        .request_password_reset(&form.email, &state.base_url)
        .await
    {
        log::error!("password reset request failed: {}", e);
    }
    render(ForgotPasswordTemplate {
        error: None,
        sent: true,
    })
}

#[get("/admin/reset-password")]
async fn reset_password_page(query: web::Query<ResetQuery>) -> impl Responder {
    render(ResetPasswordTemplate {
        token: query.token,
        error: if query.token.is_none() {
            Some("This reset link is invalid or has expired".to_string())
        } else {
            None
        },
    })
}

#[post("/admin/reset-password")]
async fn reset_password_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ResetPasswordForm>,
) -> impl Responder {
    if let Err(message) = form.validate() {
        return render(ResetPasswordTemplate {
            token: Some(form.token),
            error: Some(message),
        });
    }

    match state
        .auth
        .complete_password_reset(form.token, &form.new_password)
        .await
    {
        Ok(user) => {
            log::info!("password reset completed for {}", user.email);
            see_other(&req, "/admin/login?notice=reset")
        }
        Err(e @ (AuthError::WeakPassword | AuthError::ResetTokenInvalid)) => {
            render(ResetPasswordTemplate {
                token: Some(form.token),
                error: Some(e.to_string()),
            })
        }
        Err(e) => {
            log::error!("password reset failed: {}", e);
            render(ResetPasswordTemplate {
                token: Some(form.token),
                error: Some(generic_error_message().to_string()),
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_page)
        .service(login_submit)
        .service(logout)
        .service(forgot_password_page)
        .service(forgot_password_submit)
        .service(reset_password_page)
        .service(reset_password_submit);
}
