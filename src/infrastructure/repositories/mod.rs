pub mod elevenlabs_repository;
pub mod generation_repository;
pub mod synthesis_repository;

pub use elevenlabs_repository::ElevenLabsRepository;
pub use generation_repository::{GenerationRepository, InMemoryGenerationRepository};
pub use synthesis_repository::{SynthesisError, SynthesisRepository, SynthesizedAudio};
