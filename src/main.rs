use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use voice_detect::application::services::{
    AudioMaterializer, CredentialGate, DetectionService, DetectionTimeouts,
};
use voice_detect::infrastructure::audio::TranscriptionEngineFactory;
use voice_detect::infrastructure::llm::OpenAiChatClient;
use voice_detect::infrastructure::observability::init_tracing;
use voice_detect::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment)?;
    init_tracing(&settings.logging.tracing_config(environment))?;

    if settings.uses_default_api_key() {
        tracing::warn!("API_KEY not set; using the built-in default secret");
    }
    if settings.transcription.api_key.is_none() || settings.llm.api_key.is_none() {
        tracing::warn!("Upstream API key not configured; /detect will return 500 until it is set");
    }

    let transcription_engine = TranscriptionEngineFactory::create(&settings.transcription.engine_config())?;
    let llm_client = Arc::new(OpenAiChatClient::new(&settings.llm.client_config()));

    let detection_service = Arc::new(DetectionService::new(
        CredentialGate::new(settings.auth.api_key.as_str()),
        AudioMaterializer::new(settings.audio.temp_dir.clone()),
        transcription_engine,
        llm_client,
        DetectionTimeouts {
            transcription: Duration::from_secs(settings.transcription.timeout_secs),
            classification: Duration::from_secs(settings.llm.timeout_secs),
        },
    ));

    let state = AppState {
        detection_service,
        max_body_bytes: settings.server.max_body_bytes,
    };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!(
        %addr,
        environment = %environment,
        transcription_model = %settings.transcription.model,
        llm_model = %settings.llm.model,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
