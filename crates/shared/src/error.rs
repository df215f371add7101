use thiserror::Error;

/// Why a submission to the generation endpoint did not produce output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The service answered with a non-2xx status or an `error` field.
    #[error("generation service rejected the request (status {status})")]
    Service { status: u16, message: Option<String> },
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
}

impl GenerationError {
    pub fn service(status: u16, message: Option<String>) -> Self {
        Self::Service { status, message }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Text shown inline under the form. Every failure falls back to the same
    /// generic message when it has nothing more specific to say.
    pub fn user_message(&self, fallback: &str) -> String {
        let specific = match self {
            Self::Service { message, .. } => message.as_deref(),
            Self::Transport(message) | Self::Decode(message) => Some(message.as_str()),
        };
        match specific {
            Some(message) if !message.trim().is_empty() => message.to_string(),
            _ => fallback.to_string(),
        }
    }
}
