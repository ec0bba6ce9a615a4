pub mod emotion;
pub mod storage;
pub mod tts;

// Re-export commonly used types for convenience
pub use emotion::{Emotion, VoiceSettings, map_voice_settings};
pub use storage::{AudioStore, StorageError, StoredFile};
pub use tts::{
    BoxedSynthesizer, ElevenLabsTTS, ElevenLabsTTSConfig, SpeechSynthesizer, SynthesisError,
    SynthesisResult, create_synthesizer,
};
