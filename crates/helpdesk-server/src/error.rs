//! Error types and handling for the server
//!
//! Startup failures use a conventional error enum; request handlers produce
//! [`ApiError`], which renders the core error taxonomy as an HTTP status plus
//! a JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, error};

/// Result type alias for server startup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while bringing the server up
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, binding the listener)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// An error response produced by a request handler.
///
/// Validation failures and constraint violations reject the request (400),
/// missing rows map to 404, referential conflicts to 409, and anything else
/// is a defect (500).
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<helpdesk_core::Error> for ApiError {
    fn from(err: helpdesk_core::Error) -> Self {
        use helpdesk_core::Error as Core;

        let status = match &err {
            Core::Validation { .. } | Core::Constraint { .. } => StatusCode::BAD_REQUEST,
            Core::NotFound { .. } => StatusCode::NOT_FOUND,
            Core::ReferentialConflict { .. } => StatusCode::CONFLICT,
            Core::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // the engine's message is already client-facing; other variants render
        // through their Display form
        let message = match err {
            Core::Validation { message } => message,
            other => other.to_string(),
        };
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, message = %self.message, "request failed");
        } else {
            debug!(status = %self.status, message = %self.message, "request rejected");
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
