//! Error types for the prediction service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use salary_common::{CategoricalField, ValidationError};
use serde_json::{json, Value};

/// Request-time failures, each mapped to one HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Body is not JSON of the profile's shape.
    #[error("Malformed request body: {0}")]
    Schema(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid value in column '{field}': unknown category '{value}'")]
    InvalidCategory {
        field: CategoricalField,
        value: String,
    },

    #[error("Model not loaded.")]
    ModelNotLoaded,

    #[error("Error during prediction: {0}")]
    InferenceFailed(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Schema(_) | Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::InvalidCategory { .. } => StatusCode::BAD_REQUEST,
            Error::ModelNotLoaded | Error::InferenceFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn detail(&self) -> Value {
        match self {
            Error::Schema(message) => json!([{
                "loc": ["body"],
                "msg": message,
                "type": "json_invalid",
            }]),
            Error::Validation(err) => err
                .violations
                .iter()
                .map(|v| {
                    json!({
                        "loc": ["body", v.field],
                        "msg": v.bound.to_string(),
                        "type": v.bound.kind(),
                        "input": v.value,
                    })
                })
                .collect(),
            other => Value::String(other.to_string()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }

        let body = Json(json!({ "detail": self.detail() }));
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
