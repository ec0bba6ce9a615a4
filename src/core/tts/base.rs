use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Errors raised while synthesizing speech.
///
/// Variants keep the provider's diagnostic detail for logging. The HTTP layer
/// never forwards it to clients.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Missing provider credentials: {0}")]
    MissingCredentials(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Request to provider failed: {0}")]
    Transport(String),
    #[error("Provider returned status {status}: {body}")]
    Provider { status: u16, body: String },
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

impl SynthesisError {
    /// HTTP status returned by the provider, if the provider answered at all.
    pub fn provider_status(&self) -> Option<u16> {
        match self {
            Self::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type SynthesisResult<T> = Result<T, SynthesisError>;

/// A remote text-to-speech backend.
///
/// One call produces one complete audio artifact. Implementations make a
/// single attempt and do not retry.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` with the voice preset for `emotion` at `intensity`.
    async fn synthesize(&self, text: &str, emotion: &str, intensity: f32)
    -> SynthesisResult<Bytes>;

    /// Short provider identifier used in logs.
    fn provider_name(&self) -> &'static str;
}

pub type BoxedSynthesizer = Box<dyn SpeechSynthesizer>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_status() {
        let err = SynthesisError::Provider {
            status: 401,
            body: "invalid api key".to_string(),
        };
        assert_eq!(err.provider_status(), Some(401));
        assert_eq!(
            err.to_string(),
            "Provider returned status 401: invalid api key"
        );

        let err = SynthesisError::Transport("connection refused".to_string());
        assert_eq!(err.provider_status(), None);
    }
}
