//! API key gate for admin routes.
//!
//! The gate holds the secret loaded once at startup and admits a request only when
//! its `apikey` header matches that secret exactly. A missing header and a wrong key
//! are rejected the same way.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::server::{
    config::Config,
    error::{auth::AuthError, AppError},
};

/// Header carrying the caller-supplied API key.
pub const API_KEY_HEADER: &str = "apikey";

/// Permit/deny decision for requests to admin routes.
///
/// Cheap to clone; the secret is shared behind an `Arc`.
#[derive(Clone)]
pub struct ApiKeyGate {
    expected: Arc<str>,
}

impl ApiKeyGate {
    /// Creates a gate for the API key in `config`.
    ///
    /// # Arguments
    /// - `config` - Application configuration holding the non-empty `api_key`
    ///
    /// # Returns
    /// - `ApiKeyGate` - Gate comparing against `config.api_key`
    pub fn new(config: &Config) -> Self {
        Self::from_secret(&config.api_key)
    }

    pub(crate) fn from_secret(secret: &str) -> Self {
        Self {
            expected: Arc::from(secret),
        }
    }

    /// Decides whether a supplied key is admitted.
    ///
    /// # Returns
    /// - `true` - The key matches the configured secret exactly
    /// - `false` - The key is missing or differs
    pub fn permits(&self, provided: Option<&str>) -> bool {
        match provided {
            Some(key) => key == &*self.expected,
            None => false,
        }
    }

    /// Checks the `apikey` header of a request.
    ///
    /// A header value that is not visible ASCII counts as missing.
    ///
    /// # Returns
    /// - `Ok(())` - The request may proceed
    /// - `Err(AuthError::InvalidApiKey)` - Missing or mismatched key
    pub fn check(&self, headers: &HeaderMap) -> Result<(), AuthError> {
        let provided = headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        if self.permits(provided) {
            Ok(())
        } else {
            tracing::warn!(
                key_present = provided.is_some(),
                "Denied admin request with invalid API key"
            );
            Err(AuthError::InvalidApiKey)
        }
    }
}

/// Axum middleware rejecting requests that fail the API key gate.
///
/// Attach with `axum::middleware::from_fn_with_state(gate, require_api_key)`.
pub async fn require_api_key(
    State(gate): State<ApiKeyGate>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    gate.check(request.headers())?;

    Ok(next.run(request).await)
}
