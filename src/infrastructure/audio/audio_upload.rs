use std::path::Path;

use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::TranscriptionError;
use crate::domain::AudioFormat;

/// Reads a materialized audio file into a multipart `file` part named after
/// the file, with the MIME type of its container format.
pub(super) async fn audio_file_part(path: &Path) -> Result<multipart::Part, TranscriptionError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| TranscriptionError::ReadFailed(format!("bad path: {}", path.display())))?
        .to_string();

    let format = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(AudioFormat::from_extension)
        .ok_or_else(|| TranscriptionError::UnsupportedFormat(file_name.clone()))?;

    let data = tokio::fs::read(path)
        .await
        .map_err(|e| TranscriptionError::ReadFailed(e.to_string()))?;

    multipart::Part::bytes(data)
        .file_name(file_name)
        .mime_str(format.mime_type())
        .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))
}

#[derive(Deserialize)]
pub(super) struct TranscriptionResponse {
    pub text: String,
}

pub(super) async fn read_transcription_response(
    response: reqwest::Response,
) -> Result<TranscriptionResponse, TranscriptionError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(TranscriptionError::ApiRequestFailed(format!(
            "status {}: {}",
            status, body
        )));
    }

    response
        .json()
        .await
        .map_err(|e| TranscriptionError::InvalidResponse(format!("parse response: {}", e)))
}
