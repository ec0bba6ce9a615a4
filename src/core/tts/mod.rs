mod base;
pub mod elevenlabs;

pub use base::{BoxedSynthesizer, SpeechSynthesizer, SynthesisError, SynthesisResult};
pub use elevenlabs::{
    AUDIO_MIME_TYPE, DEFAULT_MODEL_ID, ELEVENLABS_BASE_URL, ElevenLabsTTS, ElevenLabsTTSConfig,
};

/// Factory function to create a speech synthesizer.
///
/// # Supported Providers
///
/// - `"elevenlabs"` - ElevenLabs TTS API
pub fn create_synthesizer(
    provider_type: &str,
    config: ElevenLabsTTSConfig,
) -> SynthesisResult<BoxedSynthesizer> {
    match provider_type.to_lowercase().as_str() {
        "elevenlabs" | "eleven-labs" | "eleven_labs" => Ok(Box::new(ElevenLabsTTS::new(config)?)),
        _ => Err(SynthesisError::InvalidConfiguration(format!(
            "Unsupported TTS provider: {provider_type}. Supported providers: elevenlabs"
        ))),
    }
}
