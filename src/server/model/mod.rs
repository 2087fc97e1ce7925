//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entity models into these types at the data layer
//! boundary; controllers convert them into wire DTOs with `into_dto`.

pub mod horse;
pub mod otp;
pub mod pagination;
pub mod session;
pub mod ticket;
pub mod user;
