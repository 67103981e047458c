use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{AudioFormat, Language};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub supported_languages: Vec<&'static str>,
    pub supported_formats: Vec<&'static str>,
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            supported_languages: Language::supported_names(),
            supported_formats: AudioFormat::supported_names(),
        }),
    )
}
