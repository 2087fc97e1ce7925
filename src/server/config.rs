use std::net::SocketAddr;

use chrono::Duration;
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_OTP_TTL_SECONDS: i64 = 120;
const DEFAULT_SESSION_TTL_DAYS: i64 = 30;
const MAX_OTP_TTL_SECONDS: i64 = 24 * 60 * 60;
const MAX_SESSION_TTL_DAYS: i64 = 3650;

/// Process-wide configuration, built once at startup and shared read-only.
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Secret compared by the API key gate on admin routes.
    pub api_key: String,

    pub sms_gateway_url: Url,
    pub sms_gateway_token: String,

    pub otp_ttl: Duration,
    pub session_ttl: Duration,
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` delegates here; tests pass a closure over a fixed map instead of
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String, ConfigError> {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let api_key = required("API_KEY")?;
        if api_key.is_empty() {
            return Err(ConfigError::EmptyEnvVar("API_KEY".to_string()).into());
        }

        let sms_gateway_url = required("SMS_GATEWAY_URL")?;
        let sms_gateway_url =
            Url::parse(&sms_gateway_url).map_err(|e| ConfigError::InvalidEnvVar {
                name: "SMS_GATEWAY_URL".to_string(),
                reason: e.to_string(),
            })?;

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let otp_ttl = parse_ttl(
            &lookup,
            "OTP_TTL_SECONDS",
            DEFAULT_OTP_TTL_SECONDS,
            MAX_OTP_TTL_SECONDS,
            Duration::try_seconds,
        )?;
        let session_ttl = parse_ttl(
            &lookup,
            "SESSION_TTL_DAYS",
            DEFAULT_SESSION_TTL_DAYS,
            MAX_SESSION_TTL_DAYS,
            Duration::try_days,
        )?;
        let secure_cookies = parse_or(&lookup, "COOKIE_SECURE", true)?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address,
            api_key,
            sms_gateway_url,
            sms_gateway_token: required("SMS_GATEWAY_TOKEN")?,
            otp_ttl,
            session_ttl,
            secure_cookies,
        })
    }
}

/// Parses an optional variable, falling back to `default` when it is unset.
fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Parses a lifetime in whole units, accepting only `1..=max`.
fn parse_ttl<F>(
    lookup: &F,
    name: &str,
    default: i64,
    max: i64,
    to_duration: fn(i64) -> Option<Duration>,
) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_or(lookup, name, default)?;

    if !(1..=max).contains(&value) {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("must be between 1 and {}", max),
        });
    }

    to_duration(value).ok_or_else(|| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: "out of range".to_string(),
    })
}
