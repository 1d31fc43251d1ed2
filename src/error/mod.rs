//! Error types for podgen.

pub mod unified;

pub use unified::ErrorCategory;

use thiserror::Error;

/// Message shown when a failure carries no description of its own.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Primary error type for all podgen operations.
#[derive(Error, Debug)]
pub enum PodgenError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Non-2xx response. Displays only the message so the server's own
    /// `error` text reaches the user verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PodgenError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// HTTP status for application-level failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Api { .. } => ErrorCategory::Application,
            Self::Network(e) if e.is_decode() => ErrorCategory::MalformedResponse,
            Self::Network(e) if e.is_timeout() => ErrorCategory::Timeout,
            Self::Network(_) => ErrorCategory::Transport,
            // Only local input (prompting) surfaces raw IO errors.
            Self::Io(_) => ErrorCategory::Validation,
            Self::Serialization(_) => ErrorCategory::MalformedResponse,
            Self::Timeout(_) => ErrorCategory::Timeout,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::InvalidArgument(_) => ErrorCategory::Validation,
        }
    }

    /// Text for the inline error panel: the failure's description, or
    /// [`FALLBACK_MESSAGE`] when it has none.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PodgenError>;
