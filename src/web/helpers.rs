use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;
use uuid::Uuid;

use tamarsan_site::models::User;
use tamarsan_site::services::SESSION_TTL_DAYS;

use crate::web::state::AppState;

/// Name of the session cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "ts_session";

/// True when the request was issued by htmx rather than a full navigation.
pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// Renders an askama template into a 200 HTML response.
pub fn render<T: Template>(template: T) -> HttpResponse {
    render_with_status(StatusCode::OK, template)
}

/// Renders an askama template with an explicit status code.
pub fn render_with_status<T: Template>(status: StatusCode, template: T) -> HttpResponse {
    match template.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("template render failed: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

/// Builds the login session cookie for a freshly created session token.
pub fn session_cookie(token: Uuid) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::days(SESSION_TTL_DAYS))
        .finish()
}

/// Builds an expired session cookie that clears the browser copy.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

fn session_token(req: &HttpRequest) -> Option<Uuid> {
    req.cookie(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
}

fn login_redirect(req: &HttpRequest) -> HttpResponse {
    if is_htmx(req) {
        HttpResponse::Ok()
            .insert_header(("HX-Redirect", "/admin/login"))
            .finish()
    } else {
        HttpResponse::SeeOther()
            .insert_header(("Location", "/admin/login"))
            .finish()
    }
}

/// Looks up the signed-in user for the request's session cookie, if any.
pub async fn current_user(state: &AppState, req: &HttpRequest) -> Option<User> {
    let token = session_token(req)?;
    match state.auth.session_user(token).await {
        Ok(Some((user, _session))) => Some(user),
        Ok(None) => None,
        Err(e) => {
            log::error!("session lookup failed: {}", e);
            None
        }
    }
}

/// Resolves the signed-in user or short-circuits to the login page.
///
/// Handlers call this first and bail out with the ready-made response on Err.
pub async fn require_user(state: &AppState, req: &HttpRequest) -> Result<User, HttpResponse> {
    let Some(token) = session_token(req) else {
        return Err(login_redirect(req));
    };
    match state.auth.session_user(token).await {
        Ok(Some((user, _session))) => Ok(user),
        Ok(None) => Err(login_redirect(req)),
        Err(e) => {
            log::error!("session lookup failed: {}", e);
            Err(HttpResponse::InternalServerError().body("Database error"))
        }
    }
}

/// Redirect helper for POST handlers, honouring htmx navigation.
pub fn see_other(req: &HttpRequest, location: &str) -> HttpResponse {
    if is_htmx(req) {
        HttpResponse::Ok()
            .insert_header(("HX-Redirect", location.to_string()))
            .finish()
    } else {
        HttpResponse::SeeOther()
            .insert_header(("Location", location.to_string()))
            .finish()
    }
}
