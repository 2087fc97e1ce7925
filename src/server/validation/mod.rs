//! Declarative request body validation.
//!
//! Each request shape declares an explicit list of rules per field. A body is
//! checked against every rule of every field and all failures are reported
//! together as a single `ValidationError::Fields`.
//!
//! - `rule` - `Rule` (predicate plus message) and `FieldRules` (rules for one field)
//! - `rules` - Rule sets for the request DTOs
//! - `extract` - `ValidatedJson`, the axum extractor that applies a rule set

pub mod extract;
pub mod rule;
pub mod rules;

use serde_json::Value;

use crate::server::error::validation::ValidationError;

pub use extract::ValidatedJson;
pub use rule::{FieldRules, Rule};

/// Request shapes that declare validation rules for their JSON fields.
pub trait Validate {
    /// Rules for every field of the shape, evaluated in order.
    fn rules() -> &'static [FieldRules];
}

/// Checks `body` against every field's rules and aggregates the failures.
///
/// Non-object bodies are treated as having no fields, so every required field
/// reports its failures.
///
/// # Returns
/// - `Ok(())` - Every rule of every field passed
/// - `Err(ValidationError::Fields)` - One entry per failing field, in declaration order
pub fn validate(body: &Value, fields: &[FieldRules]) -> Result<(), ValidationError> {
    let errors: Vec<_> = fields.iter().filter_map(|f| f.evaluate(body)).collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Fields(errors))
    }
}
