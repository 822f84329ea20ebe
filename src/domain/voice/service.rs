use super::error::VoiceServiceError;
use super::{GenerateVoiceRequest, GenerationRecord, NewGeneration, SynthesisRequest};
use crate::infrastructure::repositories::{
    GenerationRepository, SynthesisError, SynthesisRepository,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Outcome of one synthesis request, ready for the HTTP layer
#[derive(Debug, Clone)]
pub struct VoiceGenerationResult {
    pub audio_data: Vec<u8>,
    pub content_type: String,
    /// Script length in UTF-16 code units
    pub char_count: usize,
    /// Id of the appended record; `None` when the record store failed
    pub record_id: Option<Uuid>,
}

pub struct VoiceService {
    synthesis_repo: Arc<dyn SynthesisRepository>,
    generation_repo: Arc<dyn GenerationRepository>,
}

impl VoiceService {
    pub fn new(
        synthesis_repo: Arc<dyn SynthesisRepository>,
        generation_repo: Arc<dyn GenerationRepository>,
    ) -> Self {
        Self {
            synthesis_repo,
            generation_repo,
        }
    }
}

#[async_trait]
pub trait VoiceServiceApi: Send + Sync {
    /// Validate and proxy one synthesis request
    ///
    /// This operation:
    /// - Validates every field bound before anything is forwarded
    /// - Calls the provider exactly once, with no retry
    /// - Appends a generation record once synthesis succeeds
    ///
    /// Returns the provider's audio bytes along with response metadata
    async fn generate(
        &self,
        request: GenerateVoiceRequest,
    ) -> Result<VoiceGenerationResult, VoiceServiceError>;

    /// The most recent generation records, newest first
    async fn recent_generations(
        &self,
        limit: usize,
    ) -> Result<Vec<GenerationRecord>, VoiceServiceError>;
}

#[async_trait]
impl VoiceServiceApi for VoiceService {
    async fn generate(
        &self,
        request: GenerateVoiceRequest,
    ) -> Result<VoiceGenerationResult, VoiceServiceError> {
        // 1. Validate into the typed request; nothing leaves the process on failure
        let request = SynthesisRequest::validate(request)?;
        let char_count = request.script_chars();

        tracing::info!(
            voice_id = %request.voice_id,
            model = %request.model,
            script_chars = char_count,
            "Voice generation request"
        );

        // 2. One provider call; its failure is terminal for this request
        let audio = self
            .synthesis_repo
            .synthesize(&request)
            .await
            .map_err(|e| match e {
                SynthesisError::Provider { status, body } => {
                    VoiceServiceError::Provider { status, body }
                }
                SynthesisError::Connection(msg) => VoiceServiceError::Dependency(msg),
            })?;

        // 3. Record the generation; the audio is already committed, so a
        //    failing append is logged and dropped
        let record_id = match self
            .generation_repo
            .append(NewGeneration {
                script: request.script,
                voice_id: request.voice_id,
                model: request.model,
                settings: request.settings,
                audio_url: None,
            })
            .await
        {
            Ok(record) => Some(record.id),
            Err(e) => {
                tracing::error!(error = %e, "Failed to append generation record");
                None
            }
        };

        tracing::info!(
            audio_size_bytes = audio.audio_data.len(),
            record_id = ?record_id,
            "Voice generation completed"
        );

        Ok(VoiceGenerationResult {
            audio_data: audio.audio_data,
            content_type: audio.content_type,
            char_count,
            record_id,
        })
    }

    async fn recent_generations(
        &self,
        limit: usize,
    ) -> Result<Vec<GenerationRecord>, VoiceServiceError> {
        self.generation_repo
            .list_recent(limit)
            .await
            .map_err(VoiceServiceError::Dependency)
    }
}
