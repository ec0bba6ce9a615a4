//! ElevenLabs TTS provider implementation.
//!
//! # API Reference
//!
//! - Endpoint: `POST https://api.elevenlabs.io/v1/text-to-speech/{voice_id}`
//! - Auth: `xi-api-key` header
//! - Body: `{ text, model_id, voice_settings }`
//! - Output: `audio/mpeg` bytes
//!
//! Every call is a single attempt. Failures surface as [`SynthesisError`]
//! with the provider's detail attached for logging.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error};

use super::config::{AUDIO_MIME_TYPE, ElevenLabsTTSConfig};
use crate::core::emotion::{VoiceSettings, map_voice_settings};
use crate::core::tts::base::{SpeechSynthesizer, SynthesisError, SynthesisResult};

/// Request body sent to the synthesis endpoint
#[derive(Debug, Serialize)]
struct SynthesisBody<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

/// ElevenLabs TTS client.
///
/// Holds a pooled HTTP client that is shared by all requests.
///
/// # Example
///
/// ```rust,no_run
/// use emotion_tts_gateway::core::tts::{ElevenLabsTTS, ElevenLabsTTSConfig, SpeechSynthesizer};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let tts = ElevenLabsTTS::new(ElevenLabsTTSConfig::new("xi-key", "voice-id"))?;
/// let audio = tts.synthesize("Hello there!", "happy", 0.8).await?;
/// println!("received {} bytes", audio.len());
/// # Ok(())
/// # }
/// ```
pub struct ElevenLabsTTS {
    client: Client,
    config: ElevenLabsTTSConfig,
}

impl ElevenLabsTTS {
    pub fn new(config: ElevenLabsTTSConfig) -> SynthesisResult<Self> {
        let client = Client::builder().build().map_err(|e| {
            SynthesisError::InvalidConfiguration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self { client, config })
    }

    fn build_http_request(
        &self,
        text: &str,
        voice_settings: VoiceSettings,
    ) -> reqwest::RequestBuilder {
        let body = SynthesisBody {
            text,
            model_id: &self.config.model_id,
            voice_settings,
        };

        self.client
            .post(self.config.synthesis_url())
            .header("Accept", AUDIO_MIME_TYPE)
            .header("Content-Type", "application/json")
            .header("xi-api-key", &self.config.api_key)
            .json(&body)
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsTTS {
    async fn synthesize(
        &self,
        text: &str,
        emotion: &str,
        intensity: f32,
    ) -> SynthesisResult<Bytes> {
        if !self.config.has_credentials() {
            return Err(SynthesisError::MissingCredentials(
                "ELEVENLABS_API_KEY and ELEVENLABS_VOICE_ID must both be set".to_string(),
            ));
        }

        let voice_settings = map_voice_settings(emotion, intensity);
        debug!(
            emotion,
            intensity,
            stability = voice_settings.stability,
            style = voice_settings.style,
            "Sending ElevenLabs synthesis request"
        );

        let response = self
            .build_http_request(text, voice_settings)
            .send()
            .await
            .map_err(|e| {
                error!("ElevenLabs request failed: {e}");
                SynthesisError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "ElevenLabs returned an error");
            return Err(SynthesisError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let audio = response.bytes().await.map_err(|e| {
            error!("Failed to read ElevenLabs audio body: {e}");
            SynthesisError::InvalidResponse(format!("Failed to read audio body: {e}"))
        })?;

        if audio.is_empty() {
            error!("ElevenLabs returned an empty audio body");
            return Err(SynthesisError::InvalidResponse(
                "Provider returned no audio".to_string(),
            ));
        }

        debug!(bytes = audio.len(), "ElevenLabs synthesis complete");
        Ok(audio)
    }

    fn provider_name(&self) -> &'static str {
        "elevenlabs"
    }
}
