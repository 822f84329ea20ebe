pub mod error;
pub mod model;
pub mod service;

pub use error::{ValidationError, VoiceServiceError};
pub use model::{
    ElevenLabsModel, GenerationRecord, NewGeneration, SynthesisRequest, VoiceSettings,
    MAX_SCRIPT_CHARS,
};
pub use service::{VoiceGenerationResult, VoiceService, VoiceServiceApi};

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for POST /api/generate-voice.
///
/// Every field is tolerated as absent so the validator can report which
/// one is missing instead of the deserializer rejecting the body outright.
/// The credential deserializes straight into a secret type and never
/// derives `Serialize`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVoiceRequest {
    #[serde(default)]
    pub script: String,
    pub api_key: Option<SecretString>,
    #[serde(default)]
    pub voice_id: String,
    #[serde(default)]
    pub model: String,
    pub settings: Option<VoiceSettingsPayload>,
}

/// Dial values as the client submits them: integer percents plus a
/// fractional speed multiplier
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSettingsPayload {
    pub stability: i64,
    pub similarity: i64,
    pub style_exaggeration: i64,
    pub speed: f64,
}

/// Response element for GET /api/voice-history
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub id: Uuid,
    pub script: String,
    pub voice_id: String,
    pub model: ElevenLabsModel,
    pub settings: VoiceSettings,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl From<GenerationRecord> for GenerationResponse {
    fn from(record: GenerationRecord) -> Self {
        Self {
            id: record.id,
            script: record.script,
            voice_id: record.voice_id,
            model: record.model,
            settings: record.settings,
            created_at: record.created_at,
            audio_url: record.audio_url,
        }
    }
}
