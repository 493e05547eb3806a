use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::foundation::error::ChronosError;

/// Handler error: a [`ChronosError`] rendered as a JSON body.
#[derive(Debug)]
pub struct ApiError(pub ChronosError);

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl ApiError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn kind(&self) -> &'static str {
        match &self.0 {
            ChronosError::InvalidParameter(_) => "invalid_parameter",
            ChronosError::Render(_) => "render_failure",
            ChronosError::ResourceMissing(_) => "resource_missing",
            ChronosError::Serde(_) => "serialization",
            ChronosError::Other(_) => "internal",
        }
    }
}

impl From<ChronosError> for ApiError {
    fn from(value: ChronosError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }
        let body = ErrorBody {
            error: self.kind(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/server/error.rs"]
mod tests;
