//! Text-to-speech REST endpoints.
//!
//! - `POST /api/tts` synthesizes, stores the audio and returns its URL
//! - `POST /api/tts-stream` synthesizes and returns the audio bytes directly
//! - `POST /api/chat-tts` is `/api/tts` for chat messages
//!
//! Bodies are JSON or `application/x-www-form-urlencoded`. An absent
//! `emotion` or `intensity` defaults to neutral at 0.5; an explicit JSON
//! `null` is echoed back as `null` and leaves the preset unadjusted. A missing
//! or empty text field is a 400; any provider or storage failure is a 500 with
//! a generic message, the cause only being logged.

use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::emotion::{DEFAULT_EMOTION_LABEL, DEFAULT_INTENSITY};
use crate::core::storage::{AudioStore, StoredFile};
use crate::core::tts::AUDIO_MIME_TYPE;
use crate::errors::{AppError, AppResult};
use crate::state::AppState;

/// Filename prefix for `/api/tts` audio
pub const TTS_FILE_PREFIX: &str = "tts";
/// Filename prefix for `/api/chat-tts` audio
pub const CHAT_FILE_PREFIX: &str = "chat";

const MISSING_TEXT_MESSAGE: &str = "Text is required";
const MISSING_MESSAGE_MESSAGE: &str = "Message is required";

/// Keep a present field as `Some`, even when its value is `null`.
///
/// Paired with `#[serde(default)]` so an absent field stays `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Body of `/api/tts` and `/api/tts-stream`
#[derive(Debug, Clone, Deserialize)]
pub struct TtsRequest {
    /// Text to synthesize (required, non-empty)
    pub text: Option<String>,
    /// Emotion label; unknown labels use the neutral preset
    #[serde(default, deserialize_with = "present")]
    pub emotion: Option<Option<String>>,
    /// Emotion intensity, nominally 0.0 to 1.0
    #[serde(default, deserialize_with = "present")]
    pub intensity: Option<Option<f32>>,
}

/// Body of `/api/chat-tts`
#[derive(Debug, Clone, Deserialize)]
pub struct ChatTtsRequest {
    /// Chat message to synthesize (required, non-empty)
    pub message: Option<String>,
    /// Emotion label; unknown labels use the neutral preset
    #[serde(default, deserialize_with = "present")]
    pub emotion: Option<Option<String>>,
    /// Emotion intensity, nominally 0.0 to 1.0
    #[serde(default, deserialize_with = "present")]
    pub intensity: Option<Option<f32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsResponse {
    pub success: bool,
    /// Relative URL of the stored audio, e.g. `/audio/tts_1700000000000.mp3`
    pub audio_url: String,
    pub text: String,
    /// Emotion label as requested
    pub emotion: Option<String>,
    pub intensity: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTtsResponse {
    pub success: bool,
    pub audio_url: String,
    pub message: String,
    pub emotion: Option<String>,
    pub intensity: Option<f32>,
}

/// Request body accepted as JSON or as a urlencoded form.
///
/// The form decoder is used when `Content-Type` is
/// `application/x-www-form-urlencoded`; everything else goes to the JSON
/// decoder, which rejects non-JSON content types.
pub struct SpeechBody<T>(pub T);

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

impl<S, T> FromRequest<S> for SpeechBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(req.headers()) {
            let Form(body) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
            Ok(Self(body))
        } else {
            let Json(body) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
            Ok(Self(body))
        }
    }
}

/// Validated synthesis input with defaults applied.
///
/// `None` in `emotion` or `intensity` records an explicit `null`.
#[derive(Debug, Clone, PartialEq)]
struct SpeechInput {
    text: String,
    emotion: Option<String>,
    intensity: Option<f32>,
}

impl SpeechInput {
    fn resolve(
        text: Option<String>,
        emotion: Option<Option<String>>,
        intensity: Option<Option<f32>>,
        missing_message: &str,
    ) -> AppResult<Self> {
        let text = text
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Validation(missing_message.to_string()))?;

        Ok(Self {
            text,
            emotion: emotion.unwrap_or_else(|| Some(DEFAULT_EMOTION_LABEL.to_string())),
            intensity: intensity.unwrap_or(Some(DEFAULT_INTENSITY)),
        })
    }

    /// Label handed to the provider; `null` maps like any unknown label.
    fn provider_emotion(&self) -> &str {
        self.emotion.as_deref().unwrap_or(DEFAULT_EMOTION_LABEL)
    }

    /// Intensity handed to the provider; `null` leaves the preset unadjusted.
    fn provider_intensity(&self) -> f32 {
        self.intensity.unwrap_or(0.0)
    }
}

async fn synthesize(state: &AppState, input: &SpeechInput) -> AppResult<Bytes> {
    debug!(
        emotion = input.provider_emotion(),
        intensity = input.provider_intensity(),
        chars = input.text.chars().count(),
        "Synthesizing speech"
    );

    let audio = state
        .synthesizer
        .synthesize(&input.text, input.provider_emotion(), input.provider_intensity())
        .await?;
    Ok(audio)
}

async fn synthesize_and_store(
    state: &AppState,
    input: &SpeechInput,
    prefix: &str,
) -> AppResult<StoredFile> {
    let audio = synthesize(state, input).await?;
    let filename = AudioStore::generate_filename(prefix);
    let stored = state.audio_store.store(&audio, &filename).await?;

    info!(
        filename = %stored.filename,
        bytes = audio.len(),
        emotion = input.provider_emotion(),
        "Generated speech audio"
    );

    Ok(stored)
}

/// Synthesize text, store it and return its URL
pub async fn tts_handler(
    State(state): State<Arc<AppState>>,
    SpeechBody(request): SpeechBody<TtsRequest>,
) -> AppResult<Json<TtsResponse>> {
    let input = SpeechInput::resolve(
        request.text,
        request.emotion,
        request.intensity,
        MISSING_TEXT_MESSAGE,
    )?;

    let stored = synthesize_and_store(&state, &input, TTS_FILE_PREFIX).await?;

    Ok(Json(TtsResponse {
        success: true,
        audio_url: stored.url(),
        text: input.text,
        emotion: input.emotion,
        intensity: input.intensity,
    }))
}

/// Synthesize text and return the audio bytes directly
pub async fn tts_stream_handler(
    State(state): State<Arc<AppState>>,
    SpeechBody(request): SpeechBody<TtsRequest>,
) -> AppResult<Response> {
    let input = SpeechInput::resolve(
        request.text,
        request.emotion,
        request.intensity,
        MISSING_TEXT_MESSAGE,
    )?;

    let audio = synthesize(&state, &input).await?;

    info!(
        bytes = audio.len(),
        emotion = input.provider_emotion(),
        "Streaming speech audio"
    );

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(AUDIO_MIME_TYPE));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(audio.len()));

    Ok((StatusCode::OK, headers, audio).into_response())
}

/// Synthesize a chat message, store it and return its URL
pub async fn chat_tts_handler(
    State(state): State<Arc<AppState>>,
    SpeechBody(request): SpeechBody<ChatTtsRequest>,
) -> AppResult<Json<ChatTtsResponse>> {
    let input = SpeechInput::resolve(
        request.message,
        request.emotion,
        request.intensity,
        MISSING_MESSAGE_MESSAGE,
    )?;

    let stored = synthesize_and_store(&state, &input, CHAT_FILE_PREFIX).await?;

    Ok(Json(ChatTtsResponse {
        success: true,
        audio_url: stored.url(),
        message: input.text,
        emotion: input.emotion,
        intensity: input.intensity,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::emotion::{Emotion, VoiceSettings, map_voice_settings};

    #[test]
    fn test_resolve_applies_defaults() {
        let input =
            SpeechInput::resolve(Some("hello".to_string()), None, None, MISSING_TEXT_MESSAGE)
                .unwrap();
        assert_eq!(input.text, "hello");
        assert_eq!(input.emotion.as_deref(), Some("neutral"));
        assert_eq!(input.intensity, Some(0.5));
    }

    #[test]
    fn test_resolve_keeps_requested_values() {
        let input = SpeechInput::resolve(
            Some("hello".to_string()),
            Some(Some("ecstatic".to_string())),
            Some(Some(0.9)),
            MISSING_TEXT_MESSAGE,
        )
        .unwrap();
        // The label is echoed as given even though it maps to neutral
        assert_eq!(input.emotion.as_deref(), Some("ecstatic"));
        assert_eq!(input.intensity, Some(0.9));
    }

    #[test]
    fn test_resolve_keeps_explicit_null() {
        let input = SpeechInput::resolve(
            Some("hello".to_string()),
            Some(None),
            Some(None),
            MISSING_TEXT_MESSAGE,
        )
        .unwrap();
        assert_eq!(input.emotion, None);
        assert_eq!(input.intensity, None);
        assert_eq!(input.provider_emotion(), "neutral");
        assert_eq!(input.provider_intensity(), 0.0);
    }

    #[test]
    fn test_null_intensity_leaves_preset_unadjusted() {
        let input = SpeechInput::resolve(
            Some("hi".to_string()),
            Some(Some("happy".to_string())),
            Some(None),
            MISSING_TEXT_MESSAGE,
        )
        .unwrap();

        let settings = map_voice_settings(input.provider_emotion(), input.provider_intensity());
        assert_eq!(settings, VoiceSettings::preset(Emotion::Happy));
    }

    #[test]
    fn test_resolve_rejects_missing_and_empty_text() {
        for text in [None, Some(String::new())] {
            let err = SpeechInput::resolve(text, None, None, MISSING_MESSAGE_MESSAGE).unwrap_err();
            assert!(matches!(err, AppError::Validation(ref m) if m == "Message is required"));
        }
    }

    #[test]
    fn test_request_deserialization_absent_and_null() {
        let request: TtsRequest = serde_json::from_str("{}").unwrap();
        assert!(request.text.is_none());
        assert!(request.emotion.is_none());
        assert!(request.intensity.is_none());

        let request: TtsRequest =
            serde_json::from_str(r#"{"text":"hi","emotion":null,"intensity":null}"#).unwrap();
        assert_eq!(request.emotion, Some(None));
        assert_eq!(request.intensity, Some(None));

        let request: ChatTtsRequest =
            serde_json::from_str(r#"{"message":"hi","intensity":1}"#).unwrap();
        assert_eq!(request.message.as_deref(), Some("hi"));
        assert_eq!(request.intensity, Some(Some(1.0)));
    }

    #[test]
    fn test_is_form() {
        let mut headers = HeaderMap::new();
        assert!(!is_form(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded; charset=UTF-8"),
        );
        assert!(is_form(&headers));

        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        assert!(!is_form(&headers));
    }
}
