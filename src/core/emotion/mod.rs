//! Emotion presets for ElevenLabs synthesis.
//!
//! Translates a requested emotion label and intensity into the voice settings
//! ElevenLabs uses to control expression.
//!
//! ```text
//!   "happy", 0.8 ──▶ Emotion::Happy ──▶ VoiceSettings {
//!                                          stability: 0.14,
//!                                          similarity_boost: 0.7,
//!                                          style: 0.54,
//!                                          use_speaker_boost: true,
//!                                        }
//! ```
//!
//! # Example
//!
//! ```rust
//! use emotion_tts_gateway::core::emotion::{Emotion, map_voice_settings};
//!
//! let settings = map_voice_settings("sad", 0.5);
//! assert!(settings.stability > 0.7);
//!
//! // Unknown labels fall back to the neutral preset
//! assert_eq!(
//!     map_voice_settings("wistful", 0.5),
//!     Emotion::Neutral.voice_settings(0.5),
//! );
//! ```

pub mod mapper;
pub mod types;

pub use mapper::{VoiceSettings, map_voice_settings};
pub use types::{DEFAULT_EMOTION_LABEL, DEFAULT_INTENSITY, Emotion};
