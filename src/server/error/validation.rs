use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, FieldErrorDto, ValidationErrorDto};

/// A single field that failed one or more of its rules.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub messages: Vec<String>,
}

/// Client input that was rejected before reaching a handler.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// One or more body fields failed their declared rules.
    #[error("Request body failed validation for {} field(s)", .0.len())]
    Fields(Vec<FieldError>),

    /// The body was well-formed field by field but rejected as a whole.
    #[error("{0}")]
    Invalid(String),
}

impl ValidationError {
    /// Returns true if `field` is among the failing fields.
    pub fn has_field(&self, field: &str) -> bool {
        match self {
            Self::Fields(errors) => errors.iter().any(|e| e.field == field),
            Self::Invalid(_) => false,
        }
    }
}

/// Converts validation failures into 400 Bad Request responses.
///
/// Field failures list every failing field with all of its messages; whole-body
/// failures return the plain `ErrorDto` shape.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        match self {
            Self::Fields(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorDto {
                    error: "Validation failed".to_string(),
                    fields: errors
                        .into_iter()
                        .map(|e| FieldErrorDto {
                            field: e.field,
                            messages: e.messages,
                        })
                        .collect(),
                }),
            )
                .into_response(),
            Self::Invalid(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
        }
    }
}
