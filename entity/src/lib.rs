//! SeaORM entities for the horse gallery backend.

pub mod prelude;

pub mod horse;
pub mod otp;
pub mod session;
pub mod ticket;
pub mod ticket_message;
pub mod user;
