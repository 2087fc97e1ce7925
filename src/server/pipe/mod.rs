//! Per-route request body transforms.
//!
//! A pipe runs after the body has passed its field rules and either returns the
//! (possibly normalized) body or rejects it with a `ValidationError`. Pipes take
//! the body by value and hand back a new one; callers never observe a partially
//! transformed body.

pub mod content;
pub mod slug;

use crate::server::error::validation::ValidationError;

pub use content::{ContentPresencePipe, TicketContent};
pub use slug::{PageUrl, UrlSlugPipe};

pub trait Pipe<T> {
    fn transform(&self, value: T) -> Result<T, ValidationError>;
}
