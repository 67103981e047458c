use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};

use crate::application::ports::LlmClient;
use crate::application::services::{Credentials, DetectionError};
use crate::domain::DetectionResult;
use crate::presentation::state::AppState;

use super::api_error::ApiError;

pub const API_KEY_HEADER: &str = "x-api-key";

#[tracing::instrument(skip_all)]
pub async fn detect_handler<L>(
    State(state): State<AppState<L>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<DetectionResult>, ApiError>
where
    L: LlmClient + ?Sized + 'static,
{
    let credentials = credentials_from_headers(&headers);
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            state.detection_service.authorize(&credentials)?;
            return Err(body_rejection_error(rejection, state.max_body_bytes).into());
        }
    };
    tracing::debug!(body_bytes = body.len(), "Request body received");

    let result = state.detection_service.detect(&credentials, &body).await?;

    tracing::info!(
        classification = %result.classification(),
        confidence = result.confidence(),
        "Detection completed"
    );

    Ok(Json(result))
}

fn credentials_from_headers(headers: &HeaderMap) -> Credentials {
    // Non-ASCII bytes are kept (lossily) so a garbled credential is
    // rejected as wrong rather than treated as missing.
    let header_str = |name: &str| {
        headers
            .get(name)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
    };

    Credentials {
        api_key: header_str(API_KEY_HEADER),
        authorization: header_str(AUTHORIZATION.as_str()),
    }
}

fn body_rejection_error(rejection: BytesRejection, max_body_bytes: usize) -> DetectionError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        DetectionError::InvalidArgument(format!(
            "Request body too large: limit is {} bytes",
            max_body_bytes
        ))
    } else {
        DetectionError::InvalidArgument(format!(
            "Failed to read request body: {}",
            rejection.body_text()
        ))
    }
}
