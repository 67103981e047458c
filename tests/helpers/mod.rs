
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};

use voice_detect::application::ports::{
    LlmClient, LlmClientError, TranscriptionEngine, TranscriptionError,
};
use voice_detect::application::services::{
    AudioMaterializer, CredentialGate, Credentials, DetectionService, DetectionTimeouts,
};
use voice_detect::domain::{Language, Transcript};
use voice_detect::presentation::{AppState, create_router};

pub use mock_upstream::start_mock_server;

pub const TEST_API_KEY: &str = "test-secret";

pub const HUMAN_VERDICT: &str = r#"{"classification": "Human-generated", "confidence": 0.82, "explanation": "Natural hesitations and filler words"}"#;

pub const FAKE_MP3_BYTES: &[u8] = b"ID3\x03\x00\x00\x00\x00\x00\x00fake mp3 frames";

pub fn fake_audio_base64() -> String {
    general_purpose::STANDARD.encode(FAKE_MP3_BYTES)
}

pub fn bearer(token: &str) -> Credentials {
    Credentials {
        api_key: None,
        authorization: Some(format!("Bearer {}", token)),
    }
}

pub fn valid_credentials() -> Credentials {
    bearer(TEST_API_KEY)
}

#[derive(Debug, Clone)]
pub struct TranscriptionCall {
    pub path: PathBuf,
    pub language_hint: &'static str,
    pub file_existed: bool,
    pub bytes: Vec<u8>,
}

pub enum TranscriptionBehavior {
    Reply(&'static str),
    NetworkError,
    MissingCredential,
    Hang,
}

/// Records every call, including what was on disk at the time.
pub struct StubTranscriptionEngine {
    behavior: TranscriptionBehavior,
    calls: Mutex<Vec<TranscriptionCall>>,
}

impl StubTranscriptionEngine {
    pub fn new(behavior: TranscriptionBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &'static str) -> Self {
        Self::new(TranscriptionBehavior::Reply(text))
    }

    pub fn calls(&self) -> Vec<TranscriptionCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for StubTranscriptionEngine {
    async fn transcribe(
        &self,
        audio_path: &Path,
        language: Language,
    ) -> Result<Transcript, TranscriptionError> {
        self.calls.lock().unwrap().push(TranscriptionCall {
            path: audio_path.to_path_buf(),
            language_hint: language.transcription_hint(),
            file_existed: audio_path.exists(),
            bytes: std::fs::read(audio_path).unwrap_or_default(),
        });

        match self.behavior {
            TranscriptionBehavior::Reply(text) => Ok(Transcript::new(text)),
            TranscriptionBehavior::NetworkError => Err(TranscriptionError::ApiRequestFailed(
                "request: connection refused".to_string(),
            )),
            TranscriptionBehavior::MissingCredential => Err(TranscriptionError::MissingCredential),
            TranscriptionBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Transcript::new("too late"))
            }
        }
    }
}

pub enum LlmBehavior {
    Reply(String),
    Fail,
    MissingCredential,
}

pub struct StubLlmClient {
    behavior: LlmBehavior,
    calls: AtomicUsize,
    prompts: Mutex<Vec<(String, String)>>,
}

impl StubLlmClient {
    pub fn new(behavior: LlmBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(LlmBehavior::Reply(text.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LlmClient for StubLlmClient {
    async fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), prompt.to_string()));

        match &self.behavior {
            LlmBehavior::Reply(text) => Ok(text.clone()),
            LlmBehavior::Fail => Err(LlmClientError::ApiRequestFailed(
                "HTTP 502 Bad Gateway: upstream".to_string(),
            )),
            LlmBehavior::MissingCredential => Err(LlmClientError::MissingCredential),
        }
    }
}

pub fn build_service(
    engine: Arc<StubTranscriptionEngine>,
    llm: Arc<StubLlmClient>,
    temp_dir: &Path,
) -> DetectionService<StubLlmClient> {
    build_service_with_timeouts(engine, llm, temp_dir, DetectionTimeouts::default())
}

pub fn build_service_with_timeouts(
    engine: Arc<StubTranscriptionEngine>,
    llm: Arc<StubLlmClient>,
    temp_dir: &Path,
    timeouts: DetectionTimeouts,
) -> DetectionService<StubLlmClient> {
    DetectionService::new(
        CredentialGate::new(TEST_API_KEY),
        AudioMaterializer::new(Some(temp_dir.to_path_buf())),
        engine,
        llm,
        timeouts,
    )
}

pub fn build_app(
    engine: Arc<StubTranscriptionEngine>,
    llm: Arc<StubLlmClient>,
    temp_dir: &Path,
) -> axum::Router {
    let service = build_service(engine, llm, temp_dir);
    create_router(AppState::new(Arc::new(service)))
}

pub fn files_in(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect()
}

pub fn detect_body(language: &str) -> String {
    serde_json::json!({
        "audioBase64": fake_audio_base64(),
        "language": language,
    })
    .to_string()
}
