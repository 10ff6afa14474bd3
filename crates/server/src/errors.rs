use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use service::errors::ServiceError;

/// JSON error body: `{"error": <title>, "message": <detail>}`.
#[derive(Debug, Serialize)]
pub struct JsonApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Domain failures keep the service's message verbatim; infrastructure failures become 500.
impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::Conflict(msg) => JsonApiError::new(StatusCode::CONFLICT, "Conflict", Some(msg)),
            ServiceError::Validation(msg) => JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg)),
            other => {
                error!(code = other.code(), err = %other, "customer request failed");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(other.to_string()))
            }
        }
    }
}

/// Payload shape problems caught before the service is called.
impl From<models::errors::ModelError> for JsonApiError {
    fn from(e: models::errors::ModelError) -> Self {
        warn!(err = %e, "rejected customer payload");
        JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database setup failed: {0}")]
    Database(String),
}
