mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AudioSettings, AuthSettings, DEFAULT_API_KEY, LlmSettings, LoggingSettings, ServerSettings,
    Settings, TranscriptionSettings,
};
