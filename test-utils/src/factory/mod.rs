//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let session = factory::create_session(&db, user.id).await?;
//! let (ticket, message) = factory::helpers::create_ticket_with_message(&db, user.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let otp = factory::otp::OtpFactory::new(&db)
//!     .phone_number("09121234567")
//!     .code("123456")
//!     .expired()
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod horse;
pub mod otp;
pub mod session;
pub mod ticket;
pub mod ticket_message;
pub mod user;

pub use horse::create_horse;
pub use otp::create_otp;
pub use session::create_session;
pub use ticket::create_ticket;
pub use ticket_message::create_ticket_message;
pub use user::create_user;
