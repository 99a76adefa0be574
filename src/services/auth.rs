use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::common::AuthError;
use crate::db;
use crate::models::{Session, User, UserCreate};

use super::PasswordManager;

/// Session lifetime handed out at sign-in. The session cookie carries
/// the same max-age.
pub const SESSION_TTL_DAYS: i64 = 7;
/// Reset links expire after an hour.
const RESET_TTL_MINUTES: i64 = 60;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Process-wide authentication state object: credential verification,
/// session lifecycle, and both password flows. Handlers go through this,
/// never through password hashes directly.
#[derive(Clone)]
pub struct AuthService {
    pool: SqlitePool,
}

impl AuthService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Verifies credentials and opens a session. The unknown-email path
    /// still runs one argon2 verification against a dummy hash so both
    /// failure modes take the same time.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(User, Session), AuthError> {
        let email = email.trim().to_lowercase();
        let user = db::get_user_by_email(&self.pool, &email).await?;

        let stored_hash = user
            .as_ref()
            .map(|u| u.password_hash.clone())
            .unwrap_or_else(|| PasswordManager::DUMMY_HASH.to_string());

        let password_valid =
            PasswordManager::verify_password(password, &stored_hash).unwrap_or(false);

        let Some(user) = user else {
            return Err(AuthError::InvalidCredentials);
        };
        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let expires_at = Utc::now() + Duration::days(SESSION_TTL_DAYS);
        let session = db::create_session(&self.pool, user.id, expires_at).await?;

        Ok((user, session))
    }

    /// Resolves a presented token to its user. An expired row reads as
    /// "no session" and is deleted on sight.
    pub async fn session_user(&self, token: Uuid) -> Result<Option<(User, Session)>, AuthError> {
        let Some(session) = db::get_session(&self.pool, token).await? else {
            return Ok(None);
        };

        if session.is_expired() {
            db::delete_session(&self.pool, token).await?;
            return Ok(None);
        }

        let Some(user) = db::get_user_by_id(&self.pool, session.user_id).await? else {
            return Ok(None);
        };

        Ok(Some((user, session)))
    }

    pub async fn sign_out(&self, token: Uuid) -> Result<(), AuthError> {
        db::delete_session(&self.pool, token).await?;
        Ok(())
    }

    /// Out-of-band reset: mints a single-use token and emits the link
    /// through the operator log. Never reveals whether the email exists.
    pub async fn request_password_reset(&self, email: &str, base_url: &str) -> Result<(), AuthError> {
        let email = email.trim().to_lowercase();

        if let Some(user) = db::get_user_by_email(&self.pool, &email).await? {
            let expires_at = Utc::now() + Duration::minutes(RESET_TTL_MINUTES);
            let reset = db::create_password_reset(&self.pool, user.id, expires_at).await?;

            log::info!(
                "password reset requested for {}: {}/admin/reset-password?token={}",
                user.email,
                base_url.trim_end_matches('/'),
                reset.token
            );
        }

        Ok(())
    }

    /// Consumes a reset token and stores the new credential. Every open
    /// session of the account is revoked.
    pub async fn complete_password_reset(
        &self,
        token: Uuid,
        new_password: &str,
    ) -> Result<User, AuthError> {
        if new_password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }

        let reset = db::get_password_reset(&self.pool, token)
            .await?
            .filter(|r| r.is_usable())
            .ok_or(AuthError::ResetTokenInvalid)?;

        if !db::mark_password_reset_used(&self.pool, token).await? {
            return Err(AuthError::ResetTokenInvalid);
        }

        let hash = Self::hash(new_password)?;
        let user = db::update_user_password(&self.pool, reset.user_id, &hash)
            .await?
            .ok_or(AuthError::ResetTokenInvalid)?;

        db::delete_sessions_for_user(&self.pool, user.id).await?;

        Ok(user)
    }

    /// Password change from the settings panel. The current password is
    /// re-verified first; on mismatch this returns before the stored
    /// credential is touched. The calling session stays valid.
    pub async fn change_password(
        &self,
        user: &User,
        current: &str,
        new: &str,
    ) -> Result<(), AuthError> {
        let current_ok =
            PasswordManager::verify_password(current, &user.password_hash).unwrap_or(false);
        if !current_ok {
            return Err(AuthError::CurrentPassword);
        }

        if new.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }

        let hash = Self::hash(new)?;
        db::update_user_password(&self.pool, user.id, &hash)
            .await?
            .ok_or(AuthError::Database(sqlx::Error::RowNotFound))?;

        Ok(())
    }

    /// First-run account creation. Only acts while the users table is
    /// empty; later calls are a no-op so the values can stay in the
    /// environment permanently.
    pub async fn bootstrap_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AuthError> {
        if db::count_users(&self.pool).await? > 0 {
            return Ok(None);
        }

        if password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }

        let data = UserCreate {
            email: email.trim().to_lowercase(),
            password_hash: Self::hash(password)?,
        };

        Ok(db::create_user(&self.pool, &data).await?)
    }

    fn hash(password: &str) -> Result<String, AuthError> {
        PasswordManager::hash_password(password).map_err(|e| {
            log::error!("password hashing failed: {}", e);
            AuthError::Hash
        })
    }
}
