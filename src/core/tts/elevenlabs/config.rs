//! Configuration types for the ElevenLabs text-to-speech API.

/// Production API host
pub const ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io";

/// Model used for every synthesis request
pub const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";

/// Audio format requested from the API and served to clients
pub const AUDIO_MIME_TYPE: &str = "audio/mpeg";

/// ElevenLabs client configuration.
///
/// Built once at process start from [`crate::config::ServerConfig`] and
/// handed to [`super::ElevenLabsTTS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevenLabsTTSConfig {
    /// Value of the `xi-api-key` header
    pub api_key: String,
    /// Voice used for all requests
    pub voice_id: String,
    pub model_id: String,
    /// API host without trailing slash, overridable for tests and proxies
    pub base_url: String,
}

impl ElevenLabsTTSConfig {
    pub fn new(api_key: impl Into<String>, voice_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            voice_id: voice_id.into(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            base_url: ELEVENLABS_BASE_URL.to_string(),
        }
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Full synthesis endpoint for the configured voice.
    pub fn synthesis_url(&self) -> String {
        format!("{}/v1/text-to-speech/{}", self.base_url, self.voice_id)
    }

    /// Both the API key and voice id are set.
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.voice_id.is_empty()
    }
}

impl Default for ElevenLabsTTSConfig {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}
