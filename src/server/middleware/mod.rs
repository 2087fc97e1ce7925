//! Request gating and identity resolution.
//!
//! - `api_key` - Admin route gate comparing the `apikey` header to the configured secret
//! - `session` - Session identifier extraction from the cookie or header
//! - `auth` - `AuthGuard` resolving a session identifier to its user

pub mod api_key;
pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
