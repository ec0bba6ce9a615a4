//! ElevenLabs text-to-speech client.

mod config;
mod provider;

pub use config::{AUDIO_MIME_TYPE, DEFAULT_MODEL_ID, ELEVENLABS_BASE_URL, ElevenLabsTTSConfig};
pub use provider::ElevenLabsTTS;
