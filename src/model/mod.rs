//! Wire DTOs shared by every HTTP endpoint.
//!
//! All request and response bodies use camelCase field names.

pub mod api;
pub mod auth;
pub mod horse;
pub mod ticket;
pub mod user;
