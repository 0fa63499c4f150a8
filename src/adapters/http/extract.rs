//! Request body extraction with the API's own error shape.
//!
//! `ApiJson` replaces `axum::Json` on every endpoint that reads a body, so a
//! body that cannot be decoded is answered with a 400 `VALIDATION_FAILED`
//! `ErrorResponse` instead of axum's plain-text rejection.
//!
//! The `de` helpers keep wrongly typed fields from failing the whole body.
//! The handler then runs its usual checks (ownership, project lookup,
//! expiry) before it reports the field as invalid.

use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::de::DeserializeOwned;

use crate::adapters::http::error::error_response;
use crate::domain::foundation::ErrorCode;

/// JSON body extractor whose rejection is a 400 `ErrorResponse`.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(reject(rejection)),
        }
    }
}

fn reject(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection, "Request body rejected");
    let message = match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Expected a JSON body with Content-Type: application/json".to_string()
        }
        other => format!("Invalid request body: {}", other.body_text()),
    };
    error_response(StatusCode::BAD_REQUEST, ErrorCode::ValidationFailed, message)
}

/// Lenient field deserializers for request DTOs.
///
/// Each accepts any JSON value. Use with `#[serde(default, deserialize_with = ...)]`
/// so that an absent field takes the same path as `null`.
pub mod de {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Free text. Anything but a string reads as blank.
    pub fn text_or_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(optional_text(deserializer)?.unwrap_or_default())
    }

    /// Optional free text. Anything but a string reads as absent.
    pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => Some(text),
            _ => None,
        })
    }

    /// Enum wire value. `null` reads as blank, other non-strings keep their
    /// JSON rendering so they fail the value lookup.
    pub fn token<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => String::new(),
            Value::String(text) => text,
            other => other.to_string(),
        })
    }
}
