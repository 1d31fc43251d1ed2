//! Convenience re-exports for common use.

pub use crate::client::{HttpPodcastClient, PodcastService};
pub use crate::config::PodgenConfig;
pub use crate::controller::{FormController, Lifecycle, LifecycleObserver};
pub use crate::error::{PodgenError, Result};
pub use crate::types::{FormState, Gender, GeneratePodcastRequest, PodcastResult, ScriptLine};
