use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::infrastructure::audio::{TranscriptionEngineConfig, TranscriptionProvider};
use crate::infrastructure::llm::{ChatClientConfig, LlmProvider};
use crate::infrastructure::observability::TracingConfig;

use super::Environment;

pub const DEFAULT_API_KEY: &str = "default-api-key-change-in-production";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub audio: AudioSettings,
    pub transcription: TranscriptionSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

#[derive(Clone, Deserialize)]
pub struct AuthSettings {
    pub api_key: String,
}

impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AudioSettings {
    /// Directory for per-request audio files; system temp dir when unset.
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProvider,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    pub model: String,
    #[serde(default)]
    pub azure_deployment: Option<String>,
    pub azure_api_version: String,
    pub timeout_secs: u64,
}

impl TranscriptionSettings {
    pub fn engine_config(&self) -> TranscriptionEngineConfig {
        TranscriptionEngineConfig {
            provider: self.provider,
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            azure_deployment: self.azure_deployment.clone(),
            azure_api_version: self.azure_api_version.clone(),
        }
    }
}

impl std::fmt::Debug for TranscriptionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscriptionSettings")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("azure_deployment", &self.azure_deployment)
            .field("azure_api_version", &self.azure_api_version)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    pub model: String,
    #[serde(default)]
    pub azure_deployment: Option<String>,
    pub azure_api_version: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl LlmSettings {
    pub fn client_config(&self) -> ChatClientConfig {
        ChatClientConfig {
            provider: self.provider,
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            azure_deployment: self.azure_deployment.clone(),
            azure_api_version: self.azure_api_version.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

impl std::fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmSettings")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("azure_deployment", &self.azure_deployment)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl LoggingSettings {
    pub fn tracing_config(&self, environment: Environment) -> TracingConfig {
        TracingConfig::new(environment.as_str(), self.level.as_str(), self.enable_json)
    }
}

impl Settings {
    /// Layers defaults, `appsettings.{env}` (optional), `APP__SECTION__KEY`
    /// variables and finally the legacy `API_KEY` / `OPENAI_API_KEY`
    /// variables. `OPENAI_API_KEY` only fills upstream keys left unset.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let legacy_api_key = std::env::var("API_KEY").ok().filter(|v| !v.is_empty());
        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|v| !v.is_empty());

        let mut builder = Self::defaults()?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(key) = legacy_api_key {
            builder = builder.set_override("auth.api_key", key)?;
        }

        let mut settings: Settings = builder.build()?.try_deserialize()?;

        settings.transcription.api_key =
            settings.transcription.api_key.take().filter(|k| !k.is_empty());
        settings.llm.api_key = settings.llm.api_key.take().filter(|k| !k.is_empty());

        if let Some(key) = openai_api_key {
            settings.transcription.api_key.get_or_insert_with(|| key.clone());
            settings.llm.api_key.get_or_insert(key);
        }

        Ok(settings)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.max_body_bytes", 35 * 1024 * 1024)?
            .set_default("auth.api_key", DEFAULT_API_KEY)?
            .set_default("transcription.provider", "openai")?
            .set_default("transcription.model", "whisper-1")?
            .set_default("transcription.azure_api_version", "2024-06-01")?
            .set_default("transcription.timeout_secs", 60)?
            .set_default("llm.provider", "openai")?
            .set_default("llm.model", "gpt-4-turbo-preview")?
            .set_default("llm.azure_api_version", "2024-06-01")?
            .set_default("llm.max_tokens", 512)?
            .set_default("llm.temperature", 0.3)?
            .set_default("llm.timeout_secs", 60)?
            .set_default("logging.level", "info,voice_detect=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)
    }

    pub fn uses_default_api_key(&self) -> bool {
        self.auth.api_key == DEFAULT_API_KEY
    }
}
