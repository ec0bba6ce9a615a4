//! ElevenLabs voice-settings mapping.
//!
//! ElevenLabs has no explicit emotion tags. Emotion is expressed through the
//! voice settings sent with every synthesis request:
//!
//! - **Stability** (0.0-1.0): lower values are more expressive
//! - **Similarity Boost** (0.0-1.0): higher values stay closer to the voice
//! - **Style** (0.0-1.0): style exaggeration
//! - **Speaker Boost**: boosts similarity to the original speaker
//!
//! Each emotion has a fixed preset. Intensity pushes the preset further from
//! baseline: energetic emotions lose stability and gain style, sad gains both,
//! neutral is left untouched. Intensity is not range-checked here; values
//! outside 0.0-1.0 are applied as-is and validated by the provider.

use serde::{Deserialize, Serialize};

use super::types::Emotion;

/// Lowest stability an energetic emotion can be pushed to
const MIN_ENERGETIC_STABILITY: f32 = 0.1;
/// Highest stability sad can be pushed to
const MAX_SAD_STABILITY: f32 = 0.9;
const MAX_STYLE: f32 = 1.0;

const ENERGETIC_STABILITY_STEP: f32 = 0.2;
const ENERGETIC_STYLE_STEP: f32 = 0.3;
const SAD_STABILITY_STEP: f32 = 0.2;
const SAD_STYLE_STEP: f32 = 0.2;

/// Voice settings in the ElevenLabs wire format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl VoiceSettings {
    /// Unadjusted preset for an emotion.
    pub const fn preset(emotion: Emotion) -> Self {
        let (stability, similarity_boost, style) = match emotion {
            Emotion::Neutral => (0.5, 0.75, 0.0),
            Emotion::Happy => (0.3, 0.7, 0.3),
            Emotion::Sad => (0.7, 0.8, 0.2),
            Emotion::Angry => (0.3, 0.5, 0.4),
            Emotion::Surprised => (0.4, 0.6, 0.3),
        };

        Self {
            stability,
            similarity_boost,
            style,
            use_speaker_boost: true,
        }
    }
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self::preset(Emotion::Neutral)
    }
}

impl Emotion {
    /// Voice settings for this emotion at the given intensity.
    pub fn voice_settings(self, intensity: f32) -> VoiceSettings {
        let mut settings = VoiceSettings::preset(self);

        if intensity > 0.0 {
            match self {
                emotion if emotion.is_energetic() => {
                    settings.stability = (settings.stability
                        - intensity * ENERGETIC_STABILITY_STEP)
                        .max(MIN_ENERGETIC_STABILITY);
                    settings.style =
                        (settings.style + intensity * ENERGETIC_STYLE_STEP).min(MAX_STYLE);
                }
                Emotion::Sad => {
                    settings.stability = (settings.stability + intensity * SAD_STABILITY_STEP)
                        .min(MAX_SAD_STABILITY);
                    settings.style = (settings.style + intensity * SAD_STYLE_STEP).min(MAX_STYLE);
                }
                _ => {}
            }
        }

        settings
    }
}

/// Map a raw emotion label and intensity to voice settings.
///
/// Unknown labels use the neutral preset.
pub fn map_voice_settings(emotion: &str, intensity: f32) -> VoiceSettings {
    Emotion::from_label(emotion).voice_settings(intensity)
}
