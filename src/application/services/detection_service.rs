use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    LlmClient, LlmClientError, TranscriptionEngine, TranscriptionError,
};
use crate::domain::{DetectionRequest, DetectionResult, Transcript};

use super::audio_materializer::{AudioMaterializer, MaterializeError, MaterializedAudio};
use super::credential_gate::{CredentialGate, Credentials};
use super::payload_normalizer::{RawDetectionPayload, normalize};
use super::voice_classifier::{ClassificationError, VoiceClassifier};
use super::DetectionError;

const UPSTREAM_NOT_CONFIGURED: &str = "OpenAI API key not configured";

#[derive(Debug, Clone, Copy)]
pub struct DetectionTimeouts {
    pub transcription: Duration,
    pub classification: Duration,
}

impl Default for DetectionTimeouts {
    fn default() -> Self {
        Self {
            transcription: Duration::from_secs(60),
            classification: Duration::from_secs(60),
        }
    }
}

/// Runs one detection request end to end:
/// authenticate, normalize, materialize, transcribe, classify.
///
/// Remote calls are sequential and attempted once. The materialized audio is
/// owned by the `detect` future, so it is removed on every exit path
/// including cancellation.
pub struct DetectionService<L: LlmClient + ?Sized> {
    credential_gate: CredentialGate,
    materializer: AudioMaterializer,
    transcription_engine: Arc<dyn TranscriptionEngine>,
    classifier: VoiceClassifier<L>,
    timeouts: DetectionTimeouts,
}

impl<L: LlmClient + ?Sized> DetectionService<L> {
    pub fn new(
        credential_gate: CredentialGate,
        materializer: AudioMaterializer,
        transcription_engine: Arc<dyn TranscriptionEngine>,
        llm_client: Arc<L>,
        timeouts: DetectionTimeouts,
    ) -> Self {
        Self {
            credential_gate,
            materializer,
            transcription_engine,
            classifier: VoiceClassifier::new(llm_client),
            timeouts,
        }
    }

    /// Credential check on its own, for callers that must reject a request
    /// before its body is usable.
    pub fn authorize(&self, credentials: &Credentials) -> Result<(), DetectionError> {
        self.credential_gate.verify(credentials)
    }

    #[tracing::instrument(skip_all)]
    pub async fn detect(
        &self,
        credentials: &Credentials,
        body: &[u8],
    ) -> Result<DetectionResult, DetectionError> {
        self.credential_gate.verify(credentials)?;

        let payload = RawDetectionPayload::from_json(body)?;
        let request = normalize(&payload)?;
        tracing::debug!(
            language = %request.language,
            format = %request.format,
            "Request normalized"
        );

        let audio = self.materialize(&request).await?;
        let transcript = self.transcribe(&audio, &request).await?;
        let result = self.classify(&transcript, &request).await?;

        drop(audio);
        Ok(result)
    }

    async fn materialize(
        &self,
        request: &DetectionRequest,
    ) -> Result<MaterializedAudio, DetectionError> {
        self.materializer.materialize(request).await.map_err(|e| match e {
            MaterializeError::InvalidBase64(_) => {
                DetectionError::InvalidArgument("Invalid base64 audio data".to_string())
            }
            MaterializeError::Empty => {
                DetectionError::InvalidArgument("Audio data is empty".to_string())
            }
            MaterializeError::Io(e) => {
                tracing::error!(error = %e, "Failed to write temporary audio file");
                DetectionError::Internal(format!("failed to store audio: {}", e))
            }
            MaterializeError::Task(e) => {
                tracing::error!(error = %e, "Audio materialization task failed");
                DetectionError::Internal(format!("failed to store audio: {}", e))
            }
        })
    }

    async fn transcribe(
        &self,
        audio: &MaterializedAudio,
        request: &DetectionRequest,
    ) -> Result<Transcript, DetectionError> {
        let call = self
            .transcription_engine
            .transcribe(audio.path(), request.language);

        let transcript = tokio::time::timeout(self.timeouts.transcription, call)
            .await
            .map_err(|_| {
                tracing::error!(
                    timeout_secs = self.timeouts.transcription.as_secs(),
                    "Transcription timed out"
                );
                DetectionError::DependencyFailure("transcription: timed out".to_string())
            })?
            .map_err(|e| {
                tracing::error!(error = %e, "Transcription failed");
                match e {
                    TranscriptionError::MissingCredential => {
                        DetectionError::Configuration(UPSTREAM_NOT_CONFIGURED.to_string())
                    }
                    other => DetectionError::DependencyFailure(format!("transcription: {}", other)),
                }
            })?;

        tracing::info!(
            chars = transcript.len(),
            audio_bytes = audio.size_bytes(),
            "Transcription completed"
        );
        Ok(transcript)
    }

    async fn classify(
        &self,
        transcript: &Transcript,
        request: &DetectionRequest,
    ) -> Result<DetectionResult, DetectionError> {
        let call = self.classifier.classify(transcript, request.language);

        tokio::time::timeout(self.timeouts.classification, call)
            .await
            .map_err(|_| {
                tracing::error!(
                    timeout_secs = self.timeouts.classification.as_secs(),
                    "Classification timed out"
                );
                DetectionError::DependencyFailure("classification: timed out".to_string())
            })?
            .map_err(|e| {
                tracing::error!(error = %e, "Classification failed");
                match e {
                    ClassificationError::Completion(LlmClientError::MissingCredential) => {
                        DetectionError::Configuration(UPSTREAM_NOT_CONFIGURED.to_string())
                    }
                    other => DetectionError::DependencyFailure(format!("classification: {}", other)),
                }
            })
    }
}
