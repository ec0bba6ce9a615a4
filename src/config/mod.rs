//! Configuration module for the Emotion TTS Gateway
//!
//! This module handles server configuration from `.env` files, environment
//! variables and an optional YAML file. Priority: YAML > ENV vars > .env values
//! > defaults.
//!
//! # Environment Variables
//! - `HOST` (default `0.0.0.0`), `PORT` (default `3000`)
//! - `ELEVENLABS_API_KEY`, `ELEVENLABS_VOICE_ID`
//! - `ELEVENLABS_MODEL_ID` (default `eleven_multilingual_v2`)
//! - `ELEVENLABS_BASE_URL` (default `https://api.elevenlabs.io`)
//! - `PUBLIC_DIR` (default `public`), `AUDIO_DIR` (default `<PUBLIC_DIR>/audio`)
//! - `CORS_ALLOWED_ORIGINS` (default `*`)
//! - `TLS_CERT_PATH`, `TLS_KEY_PATH` (optional, both or neither)
//!
//! # Example
//! ```rust,no_run
//! use emotion_tts_gateway::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variable fallbacks
//! let config_path = PathBuf::from("config.yaml");
//! let config = ServerConfig::from_file(&config_path)?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

mod env;
mod merge;
mod yaml;

pub use env::{DEFAULT_CORS_ALLOWED_ORIGINS, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PUBLIC_DIR};
pub use yaml::YamlConfig;

use crate::core::tts::ElevenLabsTTSConfig;

/// TLS configuration for HTTPS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsConfig {
    /// Path to the TLS certificate file (PEM format)
    pub cert_path: PathBuf,
    /// Path to the TLS private key file (PEM format)
    pub key_path: PathBuf,
}

/// Server configuration
///
/// Read once at process start and shared read-only through
/// [`crate::state::AppState`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // TLS configuration (optional)
    pub tls: Option<TlsConfig>,

    // ElevenLabs settings
    /// Missing keys do not stop the server; synthesis requests fail instead.
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_voice_id: Option<String>,
    pub elevenlabs_model_id: String,
    pub elevenlabs_base_url: String,

    // Static files
    /// Served as the site root (index page at `/`)
    pub public_dir: PathBuf,
    /// Generated audio is written here and served at `/audio`
    pub audio_dir: PathBuf,

    // Security configuration
    /// CORS allowed origins (comma-separated list or "*" for all)
    pub cors_allowed_origins: String,
}

/// Zeroize the provider key when the configuration is dropped.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        if let Some(ref mut key) = self.elevenlabs_api_key {
            key.zeroize();
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables only.
    ///
    /// # Errors
    /// Returns an error if a variable has an invalid format (e.g. `PORT`) or
    /// only one of the TLS paths is set.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        merge::merge_config(None)
    }

    /// Load configuration from a YAML file with environment variable base.
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    ///
    /// # Errors
    /// Returns an error if the YAML file cannot be read or is malformed, or
    /// if the merged configuration is invalid.
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let yaml_config = yaml::YamlConfig::from_file(path)?;
        merge::merge_config(Some(yaml_config))
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if TLS is enabled
    pub fn is_tls_enabled(&self) -> bool {
        self.tls.is_some()
    }

    /// Both the ElevenLabs API key and voice id are configured.
    pub fn has_elevenlabs_credentials(&self) -> bool {
        self.elevenlabs_api_key.is_some() && self.elevenlabs_voice_id.is_some()
    }

    /// Build the ElevenLabs client configuration.
    ///
    /// Missing credentials become empty strings; the client rejects calls
    /// until both are set.
    pub fn elevenlabs_config(&self) -> ElevenLabsTTSConfig {
        ElevenLabsTTSConfig::new(
            self.elevenlabs_api_key.clone().unwrap_or_default(),
            self.elevenlabs_voice_id.clone().unwrap_or_default(),
        )
        .with_model_id(self.elevenlabs_model_id.clone())
        .with_base_url(self.elevenlabs_base_url.clone())
    }
}
