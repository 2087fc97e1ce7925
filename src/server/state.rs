//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through
//! Axum's state extraction. Every field is cheap to clone:
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - `Config` and the SMS gateway sit behind `Arc`
//! - `ApiKeyGate` shares its secret behind an `Arc`

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, middleware::api_key::ApiKeyGate, service::sms::SmsGateway};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Configuration loaded at startup, read-only afterwards.
    pub config: Arc<Config>,

    /// Gate applied to admin routes.
    pub api_key_gate: ApiKeyGate,

    /// Delivers OTP codes to phone numbers.
    pub sms_gateway: Arc<dyn SmsGateway>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// The API key gate is derived from `config` so the secret is read exactly once.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration
    /// - `sms_gateway` - SMS gateway used by the OTP flow
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        config: Arc<Config>,
        sms_gateway: Arc<dyn SmsGateway>,
    ) -> Self {
        let api_key_gate = ApiKeyGate::new(&config);

        Self {
            db,
            config,
            api_key_gate,
            sms_gateway,
        }
    }
}
