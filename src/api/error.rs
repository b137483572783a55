//! Error taxonomy for the HTTP surface.
//!
//! Every failure becomes `{"error": "<message>"}` with a 400 or 500 status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Build a JSON error response with an arbitrary status.
pub fn error_response(status: StatusCode, msg: impl Into<String>) -> Response {
    (status, Json(ErrorBody { error: msg.into() })).into_response()
}

/// Failures of `GET /predict`.
#[derive(Debug, Error)]
pub enum PredictError {
    /// `grade` or `time_taken` absent or empty
    #[error("Missing required parameters")]
    MissingParameter,

    /// A parameter is present but not a number of the expected type
    #[error("Invalid input format: {0}")]
    InvalidFormat(String),

    /// Anything else that went wrong while handling the request
    #[error("Server error: {0}")]
    Internal(String),
}

impl PredictError {
    pub fn status(&self) -> StatusCode {
        match self {
            PredictError::MissingParameter | PredictError::InvalidFormat(_) => {
                StatusCode::BAD_REQUEST
            }
            PredictError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Prediction failed");
        } else {
            warn!(error = %self, "Rejected prediction request");
        }
        error_response(status, self.to_string())
    }
}
