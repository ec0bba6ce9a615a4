//! HTTP request handlers
//!
//! - `api` - Health check endpoint
//! - `tts` - Text-to-speech REST API

pub mod api;
pub mod tts;
