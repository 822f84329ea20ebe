use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use voiceforge_backend::controllers::voice::VoiceController;
use voiceforge_backend::domain::voice::VoiceService;
use voiceforge_backend::infrastructure::http::build_router;
use voiceforge_backend::infrastructure::repositories::{
    ElevenLabsRepository, InMemoryGenerationRepository,
};

pub mod api_client;

use api_client::TestClient;
use mock_elevenlabs::MockElevenLabs;

pub struct TestContext {
    pub client: TestClient,
    pub mock: MockElevenLabs,
}

impl TestContext {
    /// Start a mock provider plus a full application wired against it
    pub async fn new() -> Self {
        Self::with_mock(MockElevenLabs::start().await).await
    }

    /// Wire a full application against an already-running mock
    pub async fn with_mock(mock: MockElevenLabs) -> Self {
        let client = spawn_app(mock.base_url()).await;
        Self { client, mock }
    }
}

/// Start the real application against an arbitrary provider base URL,
/// returning a client pointed at it. The server task runs until the
/// test process exits.
pub async fn spawn_app(provider_base_url: String) -> TestClient {
    let synthesis_repo = Arc::new(ElevenLabsRepository::new(
        provider_base_url,
        Duration::from_secs(5),
    ));
    let generation_repo = Arc::new(InMemoryGenerationRepository::new());
    let voice_service = Arc::new(VoiceService::new(synthesis_repo, generation_repo));
    let voice_controller = Arc::new(VoiceController::new(voice_service));

    let app = build_router(voice_controller);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to get local addr");
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestClient::new(&base_url)
}

/// A request body that passes validation; tests mutate it to probe
/// individual failure modes
pub fn valid_request() -> serde_json::Value {
    json!({
        "script": "Hello from the VoiceForge test suite.",
        "apiKey": "sk-test-key",
        "voiceId": "EXAVITQu4vr4xnSDxMaL",
        "model": "eleven_multilingual_v2",
        "settings": {
            "stability": 50,
            "similarity": 75,
            "styleExaggeration": 0,
            "speed": 1.0
        }
    })
}
