/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cadence_core::CadenceError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Service(#[from] CadenceError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<cadence_storage::StorageError> for ServerError {
    fn from(err: cadence_storage::StorageError) -> Self {
        ServerError::Service(err.into())
    }
}

impl ServerError {
    /// Reject a missing or malformed request body
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        ServerError::Service(CadenceError::invalid_request(msg))
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, kind, error_message) = match self {
            ServerError::Service(ref e) if e.is_not_found() => {
                (StatusCode::NOT_FOUND, e.kind(), e.to_string())
            }
            ServerError::Service(
                ref e @ (CadenceError::InvalidRequest(_) | CadenceError::InvalidAttribute(_)),
            ) => (StatusCode::BAD_REQUEST, e.kind(), e.to_string()),
            ServerError::Service(ref e) => {
                tracing::error!("Service error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    e.kind(),
                    "Storage error".to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal",
                    "Configuration error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
            "kind": kind,
        }));

        (status, body).into_response()
    }
}
