use super::synthesis_repository::{SynthesisError, SynthesisRepository, SynthesizedAudio};
use crate::domain::voice::{SynthesisRequest, VoiceSettings};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Serialize;
use std::time::Duration;

/// ElevenLabs implementation of the synthesis repository.
/// Calls the streaming text-to-speech endpoint with the caller's own
/// credential; the server holds no ElevenLabs account of its own.
pub struct ElevenLabsRepository {
    http_client: reqwest::Client,
    base_url: String,
}

impl ElevenLabsRepository {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build ElevenLabs HTTP client");

        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Serialize)]
struct SynthesisPayload<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: WireVoiceSettings,
}

/// Voice dials in provider units: the 0-100 percent dials divided down
/// to 0.0-1.0 fractions, speed passed through unchanged
#[derive(Debug, PartialEq, Serialize)]
struct WireVoiceSettings {
    stability: f64,
    similarity_boost: f64,
    /// Always 0.0; the client's exaggeration dial drives `style_exaggeration` only
    style: f64,
    style_exaggeration: f64,
    speed: f64,
}

impl From<&VoiceSettings> for WireVoiceSettings {
    fn from(settings: &VoiceSettings) -> Self {
        Self {
            stability: f64::from(settings.stability) / 100.0,
            similarity_boost: f64::from(settings.similarity) / 100.0,
            style: 0.0,
            style_exaggeration: f64::from(settings.style_exaggeration) / 100.0,
            speed: settings.speed,
        }
    }
}

#[async_trait]
impl SynthesisRepository for ElevenLabsRepository {
    async fn synthesize(
        &self,
        request: &SynthesisRequest,
    ) -> Result<SynthesizedAudio, SynthesisError> {
        let start_time = std::time::Instant::now();
        let url = format!(
            "{}/text-to-speech/{}/stream",
            self.base_url, request.voice_id
        );

        tracing::info!(
            voice_id = %request.voice_id,
            model = %request.model,
            script_chars = request.script_chars(),
            "Calling ElevenLabs synthesis API"
        );

        let payload = SynthesisPayload {
            text: &request.script,
            model_id: request.model.as_str(),
            voice_settings: WireVoiceSettings::from(&request.settings),
        };

        // One outbound call per request; any failure surfaces without retry
        let response = self
            .http_client
            .post(&url)
            .header("xi-api-key", request.api_key.expose_secret())
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    voice_id = %request.voice_id,
                    "ElevenLabs request failed to send"
                );
                SynthesisError::Connection(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                "ElevenLabs API returned an error"
            );
            return Err(SynthesisError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Connection(e.to_string()))?
            .to_vec();

        tracing::info!(
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio_data.len(),
            content_type = %content_type,
            "ElevenLabs synthesis completed"
        );

        Ok(SynthesizedAudio {
            audio_data,
            content_type,
        })
    }
}
