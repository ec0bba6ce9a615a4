//! Emotion type definitions.
//!
//! The gateway understands a closed set of five emotions. Any label outside
//! that set resolves to [`Emotion::Neutral`] rather than producing an error,
//! so callers can pass user input straight through.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotion label used when a request does not specify one.
pub const DEFAULT_EMOTION_LABEL: &str = "neutral";

/// Emotion intensity used when a request does not specify one.
pub const DEFAULT_INTENSITY: f32 = 0.5;

/// Emotions with a voice-settings preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    /// Baseline delivery
    #[default]
    Neutral,
    Happy,
    Sad,
    Angry,
    Surprised,
}

impl Emotion {
    /// Resolve a request label into an emotion.
    ///
    /// Matching is exact: `"happy"` resolves to [`Emotion::Happy`] but
    /// `"Happy"` or `"joyful"` fall back to [`Emotion::Neutral`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "neutral" => Self::Neutral,
            "happy" => Self::Happy,
            "sad" => Self::Sad,
            "angry" => Self::Angry,
            "surprised" => Self::Surprised,
            _ => Self::Neutral,
        }
    }

    /// Wire label for this emotion.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Surprised => "surprised",
        }
    }

    /// All emotions with a preset.
    pub const fn all() -> &'static [Emotion] {
        &[
            Self::Neutral,
            Self::Happy,
            Self::Sad,
            Self::Angry,
            Self::Surprised,
        ]
    }

    /// High-energy emotions lower stability and raise style as intensity grows.
    #[inline]
    pub const fn is_energetic(&self) -> bool {
        matches!(self, Self::Happy | Self::Angry | Self::Surprised)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Emotion {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}
