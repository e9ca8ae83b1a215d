//! Error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::mediator::HandlerError;

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    pub status_code: u16,
    pub message: String,
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if status.is_server_error() {
            error!(error = %self, "request failed");
            "Internal Server Error.".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorDetails {
            status_code: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
