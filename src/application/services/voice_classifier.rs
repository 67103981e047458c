use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{DetectionResult, Language, Transcript};
use crate::infrastructure::observability::sanitize_for_log;

pub const SYSTEM_PROMPT: &str =
    "You are an expert in audio forensics and AI voice detection. Respond only with valid JSON.";

#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
    #[error("malformed classification: {0}")]
    MalformedResponse(String),
}

/// Asks the reasoning service whether a transcript reads as synthetic speech.
pub struct VoiceClassifier<L: LlmClient + ?Sized> {
    llm_client: Arc<L>,
}

impl<L: LlmClient + ?Sized> VoiceClassifier<L> {
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    #[tracing::instrument(skip(self, transcript), fields(transcript_chars = transcript.len()))]
    pub async fn classify(
        &self,
        transcript: &Transcript,
        language: Language,
    ) -> Result<DetectionResult, ClassificationError> {
        let prompt = build_analysis_prompt(transcript, language);
        tracing::debug!(transcript = %sanitize_for_log(transcript.as_str()), "Requesting classification");

        let raw = self.llm_client.complete(SYSTEM_PROMPT, &prompt).await?;
        let result = parse_detection_result(&raw)?;

        tracing::info!(
            classification = %result.classification(),
            confidence = result.confidence(),
            "Classification completed"
        );

        Ok(result)
    }
}

pub fn build_analysis_prompt(transcript: &Transcript, language: Language) -> String {
    format!(
        r#"Analyze this audio transcription to determine if it's AI-generated or human-generated voice.

Transcription: "{transcript}"
Language: {language}

Consider these factors:
1. Unnatural pauses or rhythm patterns
2. Overly perfect pronunciation
3. Lack of natural speech variations
4. Consistent tone without emotional fluctuations
5. Background noise characteristics

Provide your analysis in this exact JSON format:
{{
  "classification": "AI-generated" or "Human-generated",
  "confidence": 0.0-1.0,
  "explanation": "detailed explanation"
}}"#,
        transcript = transcript.as_str(),
        language = language.as_str(),
    )
}

/// Strict parse: any missing field, unknown classification label or
/// out-of-range confidence is an error, never a default.
pub fn parse_detection_result(raw: &str) -> Result<DetectionResult, ClassificationError> {
    serde_json::from_str::<DetectionResult>(raw.trim())
        .map_err(|e| ClassificationError::MalformedResponse(e.to_string()))
}
