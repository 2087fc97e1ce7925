//! HTTP request handlers.
//!
//! Handlers resolve identity (`SessionId` with `AuthGuard`, or the API key gate on
//! admin routes), run request bodies through `ValidatedJson` and the route's pipe,
//! convert DTOs to params, call a service and convert the result back to a DTO.

pub mod admin;
pub mod auth;
pub mod health;
pub mod horse;
pub mod ticket;

#[cfg(test)]
mod test;
