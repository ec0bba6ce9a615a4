use axum::{Router, routing::post};
use tower_http::trace::TraceLayer;

use crate::handlers::tts;
use crate::state::AppState;
use std::sync::Arc;

/// Create the text-to-speech API router
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/tts", post(tts::tts_handler))
        .route("/api/tts-stream", post(tts::tts_stream_handler))
        .route("/api/chat-tts", post(tts::chat_tts_handler))
        .layer(TraceLayer::new_for_http())
}
