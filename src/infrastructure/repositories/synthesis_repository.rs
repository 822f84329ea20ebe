use crate::domain::voice::SynthesisRequest;
use async_trait::async_trait;

/// Audio returned by a synthesis provider
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub audio_data: Vec<u8>,
    /// Content type the provider declared for the audio payload
    pub content_type: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// The provider answered with a non-success status. The body is kept as
    /// opaque text so the caller can relay it.
    #[error("provider returned status {status}: {body}")]
    Provider { status: u16, body: String },
    /// The provider could not be reached or the exchange broke mid-flight
    #[error("connection error: {0}")]
    Connection(String),
}

/// Repository for voice synthesis operations.
/// Abstracts the underlying synthesis provider.
///
/// Implementations are responsible for:
/// - Translating the validated request into the provider's wire format
/// - Forwarding the caller's credential without storing or logging it
/// - Reporting provider failures with their original status and body
#[async_trait]
pub trait SynthesisRepository: Send + Sync {
    /// Synthesize a validated request into audio
    ///
    /// Makes exactly one provider call; there is no retry on any failure.
    ///
    /// # Errors
    /// Returns `Provider` when the provider rejects the request and
    /// `Connection` when it cannot be reached at all
    async fn synthesize(&self, request: &SynthesisRequest)
        -> Result<SynthesizedAudio, SynthesisError>;
}
