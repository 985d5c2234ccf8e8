//! The `error` module defines the error type shared by the relay.
//!
//! Request-level failures turn into HTTP responses through `IntoResponse`;
//! startup failures (configuration, bind) are reported by the binary.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::transport::message::ErrorBody;

pub type RelayResult<T> = Result<T, RelayError>;

#[derive(Error, Debug)]
pub enum RelayError {
    /// The submit body was not a JSON document the relay could parse.
    #[error("malformed request body: {reason}")]
    MalformedBody { status: StatusCode, reason: String },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MalformedBody { status, .. } => *status,
            RelayError::Config(_) | RelayError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for RelayError {
    fn from(rejection: JsonRejection) -> Self {
        RelayError::MalformedBody {
            status: rejection.status(),
            reason: rejection.body_text(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            RelayError::MalformedBody { reason, .. } => {
                tracing::debug!(status = %status, reason = %reason, "Rejected submission");
                ErrorBody { error: reason }
            }
            // Internal details stay in the log.
            other => {
                tracing::error!(error = %other, "Request failed");
                ErrorBody {
                    error: "Internal server error".to_string(),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
