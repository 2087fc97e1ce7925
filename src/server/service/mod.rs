//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: OTP issuance and verification, ticket status transitions, page address uniqueness
//! - **Orchestration**: Coordinating repository calls with the SMS gateway
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod horse;
pub mod sms;
pub mod ticket;
