use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voiceforge_backend::infrastructure::config::{Config, LogFormat};
use voiceforge_backend::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting VoiceForge Backend on {}:{}",
        config.host,
        config.port
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (provider adapter + record store)
    tracing::info!(
        base_url = %config.elevenlabs_base_url,
        timeout_secs = config.synthesis_timeout_secs,
        "Instantiating ElevenLabs repository..."
    );
    let synthesis_repo = Arc::new(
        voiceforge_backend::infrastructure::repositories::ElevenLabsRepository::new(
            config.elevenlabs_base_url.clone(),
            Duration::from_secs(config.synthesis_timeout_secs),
        ),
    );
    let generation_repo = Arc::new(
        voiceforge_backend::infrastructure::repositories::InMemoryGenerationRepository::new(),
    );

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let voice_service = Arc::new(voiceforge_backend::domain::voice::VoiceService::new(
        synthesis_repo,
        generation_repo,
    ));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let voice_controller = Arc::new(voiceforge_backend::controllers::voice::VoiceController::new(
        voice_service,
    ));

    // Start HTTP server with all routes
    start_http_server(config, voice_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voiceforge_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voiceforge_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
