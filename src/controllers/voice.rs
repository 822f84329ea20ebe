use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    domain::voice::{GenerateVoiceRequest, GenerationResponse, VoiceService, VoiceServiceApi},
    error::AppResult,
};

/// How many records GET /api/voice-history returns at most
const HISTORY_LIMIT: usize = 10;

pub struct VoiceController {
    voice_service: Arc<VoiceService>,
}

impl VoiceController {
    pub fn new(voice_service: Arc<VoiceService>) -> Self {
        Self { voice_service }
    }

    /// POST /api/generate-voice - Validate and proxy one synthesis request
    pub async fn generate(
        State(controller): State<Arc<VoiceController>>,
        Json(request): Json<GenerateVoiceRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let result = controller.voice_service.generate(request).await?;

        // Build headers; the filename timestamp matches the download the
        // client offers the user
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_str(&result.content_type)
                .unwrap_or_else(|_| HeaderValue::from_static("audio/mpeg")),
        );
        headers.insert(
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"voice_{}.mp3\"",
                Utc::now().timestamp_millis()
            )
            .parse()
            .unwrap(),
        );
        headers.insert(
            "X-Character-Count",
            result.char_count.to_string().parse().unwrap(),
        );
        if let Some(record_id) = result.record_id {
            headers.insert("X-Generation-Id", record_id.to_string().parse().unwrap());
        }

        Ok((StatusCode::OK, headers, Body::from(result.audio_data)))
    }

    /// GET /api/voice-history - The most recent generations, newest first
    pub async fn history(
        State(controller): State<Arc<VoiceController>>,
    ) -> AppResult<Json<Vec<GenerationResponse>>> {
        let records = controller
            .voice_service
            .recent_generations(HISTORY_LIMIT)
            .await?;

        Ok(Json(
            records.into_iter().map(GenerationResponse::from).collect(),
        ))
    }
}
