use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use actix_web::HttpRequest;

/// Sliding-window rate limiter keyed by client address.
///
/// Guards the login and password-reset endpoints against brute force.
pub struct RateLimiter {
    attempts: Mutex<HashMap<String, Vec<Instant>>>,
    max_attempts: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_attempts: usize, window: Duration) -> Self {
        Self {
            attempts: Mutex::new(HashMap::new()),
            max_attempts,
            window,
        }
    }

    /// Records an attempt for `key` and reports whether it is still allowed.
    pub fn allow(&self, key: &str) -> bool {
        let mut attempts = self
            .attempts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let now = Instant::now();
        attempts.retain(|_, times| {
            times.retain(|t| now.duration_since(*t) < self.window);
            !times.is_empty()
        });
        let entry = attempts.entry(key.to_string()).or_default();
        if entry.len() >= self.max_attempts {
            return false;
        }
        entry.push(now);
        true
    }
}

/// Best-effort client address for rate limiting.
pub fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}

/// Minimal shape check for submitted email addresses.
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.len() > 254 {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Uniform message for unexpected failures, keeping internals out of responses.
pub fn generic_error_message() -> &'static str {
    "An unexpected error occurred. Please try again."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limiter_blocks_after_max_attempts() {
        let limiter = RateLimiter::new(3, Duration::from_secs(60));
        assert!(limiter.allow("1.2.3.4"));
        assert!(limiter.allow("1.2.3.4"));
        assert!(limiter.allow("1.2.3.4"));
        assert!(!limiter.allow("1.2.3.4"));
        assert!(limiter.allow("5.6.7.8"));
    }

    #[test]
    fn email_validation() {
        assert!(validate_email("admin@tamarsan.com"));
        assert!(validate_email("  admin@tamarsan.com  "));
        assert!(!validate_email("admin"));
        assert!(!validate_email("admin@"));
        assert!(!validate_email("@tamarsan.com"));
        assert!(!validate_email("admin@com"));
        assert!(!validate_email(""));
    }
}
