//! ML gateway error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MlError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("ML service error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("No suggestions returned")]
    NoSuggestions,
}

impl MlError {
    /// User-friendly error message for API consumers.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => "Unable to reach the assistant service. Check your connection.",
            Self::Api { status, .. } if *status >= 500 => {
                "The assistant service is experiencing issues. Please try again later."
            }
            Self::Api { .. } => "The assistant service rejected the request.",
            Self::Decode(_) => "The assistant service returned an unexpected response.",
            Self::NoSuggestions => "Could not extract an event from the provided text.",
        }
    }

    /// Whether retrying the call might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Api { status, .. } => *status >= 500,
            Self::Decode(_) | Self::NoSuggestions => false,
        }
    }
}
