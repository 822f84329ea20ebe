use crate::error::AppError;

/// Why a candidate request was rejected before anything left the process
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("script exceeds the 10,000 character limit")]
    ScriptTooLong,
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("unknown model: {0}")]
    UnknownModel(String),
}

#[derive(Debug, thiserror::Error)]
pub enum VoiceServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The provider answered with a non-success status; mirrored to the client
    #[error("ElevenLabs API Error: {status} - {body}")]
    Provider { status: u16, body: String },
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<VoiceServiceError> for AppError {
    fn from(err: VoiceServiceError) -> Self {
        match err {
            VoiceServiceError::Validation(ValidationError::ScriptTooLong) => {
                AppError::PayloadTooLarge(ValidationError::ScriptTooLong.to_string())
            }
            VoiceServiceError::Validation(e) => AppError::BadRequest(e.to_string()),
            VoiceServiceError::Provider { status, body } => AppError::UpstreamService {
                status,
                message: format!("ElevenLabs API Error: {} - {}", status, body),
            },
            // Dependency details are logged where they occur; the client
            // only sees a generic failure
            VoiceServiceError::Dependency(_) => {
                AppError::Internal("voice generation failed".to_string())
            }
            VoiceServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
