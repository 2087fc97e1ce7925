//! Session identifier extraction.
//!
//! A request names its session either with the `sessionId` cookie or the
//! `x-session-id` header. The cookie wins when both are present; empty values are
//! skipped. Absence is not an error: handlers that need a logged-in user pass the
//! resolved value to `AuthGuard`.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use chrono::Duration;

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "sessionId";

/// Header carrying the session token for clients without cookie support.
pub const SESSION_HEADER: &str = "x-session-id";

/// Collects every cookie sent with the request into a name-value map.
///
/// All `Cookie` headers are read. Pairs without `=` are ignored and the first
/// occurrence of a name is kept.
pub fn parse_cookies(headers: &HeaderMap) -> HashMap<String, String> {
    let mut cookies = HashMap::new();

    for value in headers.get_all(header::COOKIE) {
        let Ok(value) = value.to_str() else {
            continue;
        };

        for pair in value.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                cookies
                    .entry(name.trim().to_string())
                    .or_insert_with(|| value.trim().to_string());
            }
        }
    }

    cookies
}

/// Resolves the session identifier from a cookie map and the request headers.
///
/// # Arguments
/// - `cookies` - Cookies of the request, as returned by `parse_cookies`
/// - `headers` - Request headers
///
/// # Returns
/// - `Some(token)` - First non-empty value of the `sessionId` cookie, then the `x-session-id` header
/// - `None` - Neither source carries a value
pub fn resolve_session_id(
    cookies: &HashMap<String, String>,
    headers: &HeaderMap,
) -> Option<String> {
    let from_cookie = cookies
        .get(SESSION_COOKIE)
        .map(String::as_str)
        .filter(|value| !value.is_empty());

    let from_header = || {
        headers
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    };

    from_cookie.or_else(from_header).map(str::to_string)
}

/// Extractor yielding the request's session identifier, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionId(pub Option<String>);

impl SessionId {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parse_cookies(&parts.headers);

        Ok(Self(resolve_session_id(&cookies, &parts.headers)))
    }
}

/// Builds the `Set-Cookie` value that stores a session token in the browser.
///
/// # Arguments
/// - `token` - Session token
/// - `max_age` - Cookie lifetime, matching the session's expiry
/// - `secure` - Whether to add the `Secure` attribute
pub fn session_cookie(token: &str, max_age: Duration, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        SESSION_COOKIE,
        token,
        max_age.num_seconds().max(0)
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Builds the `Set-Cookie` value that removes the session cookie.
pub fn clear_session_cookie(secure: bool) -> String {
    session_cookie("", Duration::zero(), secure)
}
