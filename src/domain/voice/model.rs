use super::error::ValidationError;
use super::{GenerateVoiceRequest, VoiceSettingsPayload};
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scripts are limited to 10,000 characters, counted in UTF-16 code units
/// so the server agrees with the browser-side counter
pub const MAX_SCRIPT_CHARS: usize = 10_000;

const MIN_SPEED: f64 = 0.25;
const MAX_SPEED: f64 = 2.0;

/// Synthesis model identifiers accepted by the ElevenLabs API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElevenLabsModel {
    #[serde(rename = "eleven_multilingual_v2")]
    MultilingualV2,
    #[serde(rename = "eleven_flash_v2_5")]
    FlashV25,
    #[serde(rename = "eleven_v3")]
    V3,
    #[serde(rename = "eleven_turbo_v2_5")]
    TurboV25,
}

impl ElevenLabsModel {
    /// The model id as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ElevenLabsModel::MultilingualV2 => "eleven_multilingual_v2",
            ElevenLabsModel::FlashV25 => "eleven_flash_v2_5",
            ElevenLabsModel::V3 => "eleven_v3",
            ElevenLabsModel::TurboV25 => "eleven_turbo_v2_5",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "eleven_multilingual_v2" => Some(ElevenLabsModel::MultilingualV2),
            "eleven_flash_v2_5" => Some(ElevenLabsModel::FlashV25),
            "eleven_v3" => Some(ElevenLabsModel::V3),
            "eleven_turbo_v2_5" => Some(ElevenLabsModel::TurboV25),
            _ => None,
        }
    }
}

impl std::fmt::Display for ElevenLabsModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated voice dials. The percent dials stay in client units (0-100);
/// scaling to provider fractions happens at the provider boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSettings {
    pub stability: u8,
    pub similarity: u8,
    pub style_exaggeration: u8,
    pub speed: f64,
}

impl VoiceSettings {
    fn validate(payload: VoiceSettingsPayload) -> Result<Self, ValidationError> {
        let stability = percent_dial("settings.stability", payload.stability)?;
        let similarity = percent_dial("settings.similarity", payload.similarity)?;
        let style_exaggeration =
            percent_dial("settings.styleExaggeration", payload.style_exaggeration)?;

        // NaN fails the range check like any other out-of-range value
        if !(MIN_SPEED..=MAX_SPEED).contains(&payload.speed) {
            return Err(ValidationError::OutOfRange {
                field: "settings.speed",
                min: MIN_SPEED,
                max: MAX_SPEED,
            });
        }

        Ok(Self {
            stability,
            similarity,
            style_exaggeration,
            speed: payload.speed,
        })
    }
}

fn percent_dial(field: &'static str, value: i64) -> Result<u8, ValidationError> {
    if !(0..=100).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            min: 0.0,
            max: 100.0,
        });
    }
    Ok(value as u8)
}

fn utf16_len(script: &str) -> usize {
    script.encode_utf16().count()
}

/// A fully validated synthesis request. Construction goes through
/// [`SynthesisRequest::validate`]; there is no other way to build one,
/// so holding a value means every field bound already holds.
#[derive(Debug)]
pub struct SynthesisRequest {
    pub script: String,
    pub api_key: SecretString,
    pub voice_id: String,
    pub model: ElevenLabsModel,
    pub settings: VoiceSettings,
}

impl SynthesisRequest {
    /// Validate a raw request body into the typed form.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// absent/empty fields, script length, dial ranges, model id.
    /// No side effects on any path.
    pub fn validate(raw: GenerateVoiceRequest) -> Result<Self, ValidationError> {
        if raw.script.is_empty() {
            return Err(ValidationError::MissingField("script"));
        }
        let api_key = match raw.api_key {
            Some(key) if !key.expose_secret().is_empty() => key,
            _ => return Err(ValidationError::MissingField("apiKey")),
        };
        if raw.voice_id.is_empty() {
            return Err(ValidationError::MissingField("voiceId"));
        }
        if raw.model.is_empty() {
            return Err(ValidationError::MissingField("model"));
        }
        let settings = raw
            .settings
            .ok_or(ValidationError::MissingField("settings"))?;

        if utf16_len(&raw.script) > MAX_SCRIPT_CHARS {
            return Err(ValidationError::ScriptTooLong);
        }

        let settings = VoiceSettings::validate(settings)?;

        let model = ElevenLabsModel::from_id(&raw.model)
            .ok_or(ValidationError::UnknownModel(raw.model))?;

        Ok(Self {
            script: raw.script,
            api_key,
            voice_id: raw.voice_id,
            model,
            settings,
        })
    }

    /// Script length in UTF-16 code units, the unit the 10,000 limit uses
    pub fn script_chars(&self) -> usize {
        utf16_len(&self.script)
    }
}

/// A completed generation as held by the record store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub id: Uuid,
    pub script: String,
    pub voice_id: String,
    pub model: ElevenLabsModel,
    pub settings: VoiceSettings,
    pub created_at: DateTime<Utc>,
    pub audio_url: Option<String>,
}

/// Fields for a record about to be appended; id and timestamp are
/// assigned by the store
#[derive(Debug, Clone)]
pub struct NewGeneration {
    pub script: String,
    pub voice_id: String,
    pub model: ElevenLabsModel,
    pub settings: VoiceSettings,
    pub audio_url: Option<String>,
}
