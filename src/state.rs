//! Shared application state.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::core::storage::AudioStore;
use crate::core::tts::{SpeechSynthesizer, SynthesisResult, create_synthesizer};

/// State shared by every request.
///
/// Built once at startup and never mutated afterwards.
pub struct AppState {
    pub config: ServerConfig,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    pub audio_store: AudioStore,
}

impl AppState {
    /// Create state backed by the ElevenLabs client described in `config`.
    pub fn new(config: ServerConfig) -> SynthesisResult<Arc<Self>> {
        if !config.has_elevenlabs_credentials() {
            warn!(
                "ELEVENLABS_API_KEY or ELEVENLABS_VOICE_ID is not set; synthesis requests will fail"
            );
        }

        let synthesizer: Arc<dyn SpeechSynthesizer> =
            Arc::from(create_synthesizer("elevenlabs", config.elevenlabs_config())?);

        Ok(Self::with_synthesizer(config, synthesizer))
    }

    /// Create state around an existing synthesizer.
    pub fn with_synthesizer(
        config: ServerConfig,
        synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> Arc<Self> {
        let audio_store = AudioStore::new(config.audio_dir.clone());

        info!(
            provider = synthesizer.provider_name(),
            audio_dir = %audio_store.dir().display(),
            "Application state initialized"
        );

        Arc::new(Self {
            config,
            synthesizer,
            audio_store,
        })
    }
}
