use std::sync::LazyLock;

use regex::Regex;

use crate::{
    model::horse::{CreateHorseDto, UpdateHorseDto},
    server::{error::validation::ValidationError, pipe::Pipe},
};

pub const INVALID_URL_MESSAGE: &str = "The page address is invalid";

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9-]+$").expect("slug pattern is valid"));

/// Bodies that may carry a page address.
pub trait PageUrl: Sized {
    fn url(&self) -> Option<&str>;

    /// Returns the body with its url replaced.
    fn with_url(self, url: String) -> Self;
}

impl PageUrl for CreateHorseDto {
    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn with_url(self, url: String) -> Self {
        Self {
            url: Some(url),
            ..self
        }
    }
}

impl PageUrl for UpdateHorseDto {
    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn with_url(self, url: String) -> Self {
        Self {
            url: Some(url),
            ..self
        }
    }
}

/// Lowercases a page address and checks it is made only of letters, digits and hyphens.
///
/// Exposed separately so path parameters can be normalized the same way as bodies.
pub fn normalize_slug(url: &str) -> Result<String, ValidationError> {
    let lowered = url.to_lowercase();

    if SLUG_PATTERN.is_match(&lowered) {
        Ok(lowered)
    } else {
        Err(ValidationError::Invalid(INVALID_URL_MESSAGE.to_string()))
    }
}

/// Normalizes the optional `url` field of a body.
///
/// An absent or empty url leaves the body untouched. Otherwise the lowercased,
/// validated address replaces the original. Running the pipe on its own output
/// yields the same output.
pub struct UrlSlugPipe;

impl<T: PageUrl> Pipe<T> for UrlSlugPipe {
    fn transform(&self, value: T) -> Result<T, ValidationError> {
        let normalized = match value.url() {
            None | Some("") => return Ok(value),
            Some(url) => normalize_slug(url)?,
        };

        Ok(value.with_url(normalized))
    }
}
