//! Error classification.

use strum::Display;

/// Broad error category for a failed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    /// The request never completed.
    Transport,
    /// The service answered with a non-2xx status.
    Application,
    /// A 2xx body that could not be parsed.
    MalformedResponse,
    Timeout,
    Configuration,
    Validation,
}

impl ErrorCategory {
    /// Whether the user can reasonably resubmit the same form unchanged.
    pub fn is_resubmittable(&self) -> bool {
        matches!(
            self,
            Self::Transport | Self::Application | Self::MalformedResponse | Self::Timeout
        )
    }
}
