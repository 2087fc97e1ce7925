use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::server::{
    error::AppError,
    validation::{validate, Validate},
};

/// JSON body extractor that runs the shape's declared rules before deserializing.
///
/// The body is first parsed as untyped JSON so rules can report type mismatches
/// (e.g. a number where a string is expected) with their own messages. Only a
/// body that passes every rule is converted into `T`.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        validate(&body, T::rules())?;

        let value = serde_json::from_value(body)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

        Ok(Self(value))
    }
}
