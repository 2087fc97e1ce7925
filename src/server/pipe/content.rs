use crate::{
    model::ticket::{CreateTicketDto, TicketMessageDto},
    server::{error::validation::ValidationError, pipe::Pipe},
};

pub const MISSING_CONTENT_MESSAGE: &str =
    "A ticket message needs either text content or an image";

/// Bodies that carry a ticket message.
pub trait TicketContent {
    fn content(&self) -> Option<&str>;
    fn image(&self) -> Option<&str>;
}

impl TicketContent for TicketMessageDto {
    fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

impl TicketContent for CreateTicketDto {
    fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

/// Rejects a ticket message that carries neither text nor an image.
///
/// Empty strings count as absent. Accepted bodies pass through unchanged.
pub struct ContentPresencePipe;

impl<T: TicketContent> Pipe<T> for ContentPresencePipe {
    fn transform(&self, value: T) -> Result<T, ValidationError> {
        let has_content = value.content().is_some_and(|c| !c.is_empty());
        let has_image = value.image().is_some_and(|i| !i.is_empty());

        if has_content || has_image {
            Ok(value)
        } else {
            Err(ValidationError::Invalid(MISSING_CONTENT_MESSAGE.to_string()))
        }
    }
}
