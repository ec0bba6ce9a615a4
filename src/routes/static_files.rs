//! Static file routes
//!
//! Generated audio is served from the audio directory at `/audio`. Every other
//! unmatched path falls back to the public directory, which serves
//! `index.html` at `/`.

use axum::Router;
use tower_http::services::ServeDir;

use crate::config::ServerConfig;
use crate::core::storage::AUDIO_URL_PREFIX;
use crate::state::AppState;
use std::sync::Arc;

/// Create the static file router
///
/// Must be merged last: the public directory is installed as the fallback.
pub fn create_static_router(config: &ServerConfig) -> Router<Arc<AppState>> {
    Router::new()
        .nest_service(AUDIO_URL_PREFIX, ServeDir::new(&config.audio_dir))
        .fallback_service(ServeDir::new(&config.public_dir))
}
