pub mod request_id;

use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controllers::{health, voice::VoiceController};
use crate::infrastructure::config::Config;
use request_id::request_id_middleware;

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    voice_controller: Arc<VoiceController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(voice_controller);

    // Start server
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router. Shared with the e2e harness so tests
/// run the same middleware stack as production.
pub fn build_router(voice_controller: Arc<VoiceController>) -> Router {
    // Voice routes (public - the caller authenticates to the provider,
    // not to us)
    let voice_routes = Router::new()
        .route("/api/generate-voice", post(VoiceController::generate))
        .route("/api/voice-history", get(VoiceController::history))
        .with_state(voice_controller);

    // Browser clients are served from another origin; answer preflights
    // and mark responses for any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .merge(voice_routes)
        .layer(cors)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}
