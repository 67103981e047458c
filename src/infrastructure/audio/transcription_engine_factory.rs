use std::sync::Arc;

use serde::Deserialize;

use crate::application::ports::TranscriptionEngine;

use super::azure_whisper_engine::AzureWhisperEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProvider {
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
}

/// Everything the factory needs to build a Whisper engine.
#[derive(Clone)]
pub struct TranscriptionEngineConfig {
    pub provider: TranscriptionProvider,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
    pub azure_deployment: Option<String>,
    pub azure_api_version: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionFactoryError {
    #[error("azure transcription requires {0}")]
    MissingAzureSetting(&'static str),
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    /// A missing API key is not an error here; the engine reports it per
    /// request so the service can start and surface the problem as a 500.
    pub fn create(
        config: &TranscriptionEngineConfig,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionFactoryError> {
        match config.provider {
            TranscriptionProvider::OpenAi => Ok(Arc::new(OpenAiWhisperEngine::new(
                config.api_key.clone(),
                config.base_url.clone(),
                Some(config.model.clone()),
            ))),
            TranscriptionProvider::Azure => {
                let base_url = config
                    .base_url
                    .as_deref()
                    .ok_or(TranscriptionFactoryError::MissingAzureSetting("base_url"))?;
                let deployment = config
                    .azure_deployment
                    .as_deref()
                    .ok_or(TranscriptionFactoryError::MissingAzureSetting("azure_deployment"))?;
                Ok(Arc::new(AzureWhisperEngine::new(
                    base_url,
                    deployment,
                    config.api_key.clone(),
                    &config.azure_api_version,
                )))
            }
        }
    }
}
