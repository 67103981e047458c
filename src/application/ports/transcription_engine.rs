use std::path::Path;

use async_trait::async_trait;

use crate::domain::{Language, Transcript};

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// Transcribes the audio file at `audio_path`. The file extension names
    /// the container format.
    async fn transcribe(
        &self,
        audio_path: &Path,
        language: Language,
    ) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription credential not configured")]
    MissingCredential,
    #[error("failed to read audio file: {0}")]
    ReadFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
