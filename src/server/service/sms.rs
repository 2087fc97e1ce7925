//! Outbound SMS delivery of OTP codes.

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::server::error::AppError;

/// Delivers one-time codes to phone numbers.
///
/// Held as `Arc<dyn SmsGateway>` in application state so tests can substitute a
/// recording implementation.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Sends `code` to `phone_number`.
    ///
    /// # Returns
    /// - `Ok(())` - The provider accepted the message
    /// - `Err(AppError)` - The provider could not be reached or rejected the message
    async fn send_otp(&self, phone_number: &str, code: &str) -> Result<(), AppError>;
}

#[derive(Serialize)]
struct SendOtpRequest<'a> {
    receptor: &'a str,
    token: &'a str,
}

/// SMS provider reached over HTTP with a bearer token.
pub struct HttpSmsGateway {
    http_client: reqwest::Client,
    endpoint: Url,
    api_token: String,
}

impl HttpSmsGateway {
    /// Creates a gateway posting to `endpoint`.
    ///
    /// # Arguments
    /// - `http_client` - Shared client from `startup::setup_reqwest_client`
    /// - `endpoint` - Provider URL receiving `{ receptor, token }` bodies
    /// - `api_token` - Bearer token for the provider
    pub fn new(http_client: reqwest::Client, endpoint: Url, api_token: String) -> Self {
        Self {
            http_client,
            endpoint,
            api_token,
        }
    }
}

#[async_trait]
impl SmsGateway for HttpSmsGateway {
    async fn send_otp(&self, phone_number: &str, code: &str) -> Result<(), AppError> {
        self.http_client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_token)
            .json(&SendOtpRequest {
                receptor: phone_number,
                token: code,
            })
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("SMS gateway accepted OTP message");

        Ok(())
    }
}
