use crate::domain::voice::{GenerationRecord, NewGeneration};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Repository for completed generation records.
///
/// Appends happen after a synthesis response is already committed, so a
/// failing append must never take the response down with it; callers log
/// and move on.
#[async_trait]
pub trait GenerationRepository: Send + Sync {
    /// Append a record, assigning its id and timestamp
    async fn append(&self, generation: NewGeneration) -> Result<GenerationRecord, String>;

    /// The most recent records, newest first, at most `limit` of them
    async fn list_recent(&self, limit: usize) -> Result<Vec<GenerationRecord>, String>;
}

/// In-memory implementation backed by a map keyed by record id.
/// Records live for the lifetime of the process and are never evicted.
pub struct InMemoryGenerationRepository {
    records: RwLock<HashMap<Uuid, GenerationRecord>>,
}

impl InMemoryGenerationRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryGenerationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationRepository for InMemoryGenerationRepository {
    async fn append(&self, generation: NewGeneration) -> Result<GenerationRecord, String> {
        let record = GenerationRecord {
            id: Uuid::new_v4(),
            script: generation.script,
            voice_id: generation.voice_id,
            model: generation.model,
            settings: generation.settings,
            created_at: Utc::now(),
            audio_url: generation.audio_url,
        };

        let mut records = self.records.write().await;
        records.insert(record.id, record.clone());

        Ok(record)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<GenerationRecord>, String> {
        let records = self.records.read().await;
        let mut recent: Vec<GenerationRecord> = records.values().cloned().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(limit);
        Ok(recent)
    }
}
