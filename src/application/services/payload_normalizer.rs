use serde::Deserialize;
use serde_json::Value;

use crate::domain::{AudioFormat, DetectionRequest, Language};

use super::DetectionError;

/// Wire shape of `POST /detect`, accepting every historical field name.
///
/// Fields hold raw JSON values: presence and type checks happen in
/// [`normalize`], so a bad value produces a stable `detail` message instead of
/// a deserializer error. A non-string audio field counts as absent; a
/// non-string language or format is unsupported.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDetectionPayload {
    #[serde(default, rename = "audioBase64")]
    pub audio_base64: Option<Value>,
    #[serde(default)]
    pub audio: Option<Value>,
    #[serde(default, rename = "audioFormat")]
    pub audio_format: Option<Value>,
    #[serde(default)]
    pub language: Option<Value>,
}

impl RawDetectionPayload {
    pub fn from_json(body: &[u8]) -> Result<Self, DetectionError> {
        serde_json::from_slice(body)
            .map_err(|e| DetectionError::InvalidArgument(format!("Invalid JSON body: {}", e)))
    }

    /// `audioBase64` first, then the legacy `audio` field. Empty strings count
    /// as absent.
    fn resolve_audio(&self) -> Option<&str> {
        non_empty_text(&self.audio_base64).or_else(|| non_empty_text(&self.audio))
    }
}

fn non_empty_text(value: &Option<Value>) -> Option<&str> {
    value.as_ref()?.as_str().filter(|s| !s.is_empty())
}

/// Reconciles the wire payload into the canonical request.
///
/// Order: audio presence, then language, then format. Base64 validity is
/// checked later, when the audio is materialized, so a bad language is
/// reported ahead of malformed audio.
pub fn normalize(payload: &RawDetectionPayload) -> Result<DetectionRequest, DetectionError> {
    let audio_base64 = payload.resolve_audio().ok_or_else(|| {
        DetectionError::InvalidArgument(
            "Missing audio data: provide 'audioBase64' or 'audio'".to_string(),
        )
    })?;

    let language = payload
        .language
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|l| l.parse::<Language>().ok())
        .ok_or_else(|| {
            DetectionError::InvalidArgument(format!(
                "Unsupported language. Supported: {}",
                Language::supported_names().join(", ")
            ))
        })?;

    let format = match &payload.audio_format {
        None => AudioFormat::default(),
        Some(raw) => raw.as_str().and_then(|f| f.parse::<AudioFormat>().ok()).ok_or_else(|| {
            DetectionError::InvalidArgument(format!(
                "Unsupported audio format. Supported: {}",
                AudioFormat::supported_names().join(", ")
            ))
        })?,
    };

    Ok(DetectionRequest {
        audio_base64: audio_base64.to_string(),
        format,
        language,
    })
}
