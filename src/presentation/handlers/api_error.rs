use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::DetectionError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// HTTP rendering of [`DetectionError`]: one status per kind and a flat
/// `{ "detail": string }` body.
#[derive(Debug)]
pub struct ApiError(pub DetectionError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            DetectionError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            DetectionError::Forbidden(_) => StatusCode::FORBIDDEN,
            DetectionError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            DetectionError::Configuration(_)
            | DetectionError::DependencyFailure(_)
            | DetectionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DetectionError> for ApiError {
    fn from(error: DetectionError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = self.0.kind(), error = %self.0, "Detection failed");
        } else {
            tracing::warn!(kind = self.0.kind(), error = %self.0, "Detection rejected");
        }

        (
            status,
            Json(ErrorResponse {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
