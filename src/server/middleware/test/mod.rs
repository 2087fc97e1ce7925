use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        api_key::{require_api_key, ApiKeyGate, API_KEY_HEADER},
        auth::AuthGuard,
        session::{
            clear_session_cookie, parse_cookies, resolve_session_id, session_cookie, SessionId,
            SESSION_HEADER,
        },
    },
};
use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
};
use test_utils::{builder::TestBuilder, factory};
