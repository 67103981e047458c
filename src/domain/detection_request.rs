use super::{AudioFormat, Language};

/// Canonical request produced by payload normalization.
///
/// `audio_base64` is guaranteed non-empty; decoding happens when the audio is
/// materialized.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionRequest {
    pub audio_base64: String,
    pub format: AudioFormat,
    pub language: Language,
}
