//! Merging YAML and environment configuration.
//!
//! Priority (highest to lowest): YAML file, environment, defaults.

use std::path::PathBuf;

use super::env::{self, DEFAULT_CORS_ALLOWED_ORIGINS, DEFAULT_HOST, DEFAULT_PUBLIC_DIR};
use super::yaml::{TlsYaml, YamlConfig};
use super::{ServerConfig, TlsConfig};
use crate::core::tts::{DEFAULT_MODEL_ID, ELEVENLABS_BASE_URL};

/// Build a [`ServerConfig`] from the environment with optional YAML overrides.
pub(crate) fn merge_config(
    yaml: Option<YamlConfig>,
) -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let YamlConfig {
        server,
        providers,
        storage,
        security,
    } = yaml.unwrap_or_default();
    let server = server.unwrap_or_default();
    let providers = providers.unwrap_or_default();
    let storage = storage.unwrap_or_default();
    let security = security.unwrap_or_default();

    let host = server
        .host
        .or_else(|| env::var("HOST"))
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = match server.port {
        Some(port) => port,
        None => env::port()?,
    };

    let tls = merge_tls(server.tls)?;

    let elevenlabs_api_key = providers
        .elevenlabs_api_key
        .or_else(|| env::var("ELEVENLABS_API_KEY"));
    let elevenlabs_voice_id = providers
        .elevenlabs_voice_id
        .or_else(|| env::var("ELEVENLABS_VOICE_ID"));
    let elevenlabs_model_id = providers
        .elevenlabs_model_id
        .or_else(|| env::var("ELEVENLABS_MODEL_ID"))
        .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());
    let elevenlabs_base_url = providers
        .elevenlabs_base_url
        .or_else(|| env::var("ELEVENLABS_BASE_URL"))
        .unwrap_or_else(|| ELEVENLABS_BASE_URL.to_string());

    let public_dir = storage
        .public_dir
        .map(PathBuf::from)
        .or_else(|| env::path_var("PUBLIC_DIR"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR));
    let audio_dir = storage
        .audio_dir
        .map(PathBuf::from)
        .or_else(|| env::path_var("AUDIO_DIR"))
        .unwrap_or_else(|| public_dir.join("audio"));

    let cors_allowed_origins = security
        .cors_allowed_origins
        .or_else(|| env::var("CORS_ALLOWED_ORIGINS"))
        .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGINS.to_string());

    Ok(ServerConfig {
        host,
        port,
        tls,
        elevenlabs_api_key,
        elevenlabs_voice_id,
        elevenlabs_model_id,
        elevenlabs_base_url,
        public_dir,
        audio_dir,
        cors_allowed_origins,
    })
}

/// Resolve TLS settings.
///
/// A YAML `tls` block with `enabled: false` disables TLS even when the
/// environment provides certificate paths.
fn merge_tls(yaml: Option<TlsYaml>) -> Result<Option<TlsConfig>, Box<dyn std::error::Error>> {
    let (cert_path, key_path) = match yaml {
        Some(TlsYaml {
            enabled: Some(false),
            ..
        }) => return Ok(None),
        Some(tls) => (
            tls.cert_path
                .map(PathBuf::from)
                .or_else(|| env::path_var("TLS_CERT_PATH")),
            tls.key_path
                .map(PathBuf::from)
                .or_else(|| env::path_var("TLS_KEY_PATH")),
        ),
        None => (env::path_var("TLS_CERT_PATH"), env::path_var("TLS_KEY_PATH")),
    };

    match (cert_path, key_path) {
        (Some(cert_path), Some(key_path)) => Ok(Some(TlsConfig {
            cert_path,
            key_path,
        })),
        (None, None) => Ok(None),
        _ => Err("TLS requires both a certificate path and a key path".into()),
    }
}
