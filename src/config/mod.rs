//! Configuration system (layered: defaults < file < env < explicit).

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{PodgenError, Result};

/// Origin of the hosted generation service.
pub const DEFAULT_API_BASE: &str = "https://ai-podcast-backend-gen.onrender.com";

/// Path of the generation endpoint, relative to the API origin.
pub const GENERATE_PATH: &str = "/api/generate-podcast";

const ENV_API_BASE: &str = "PODGEN_API_BASE";
const ENV_TIMEOUT_SECS: &str = "PODGEN_TIMEOUT_SECS";

/// Client configuration.
///
/// Resolution order, later wins:
/// 1. Built-in defaults
/// 2. TOML file (`from_file`)
/// 3. Environment (`PODGEN_API_BASE`, `PODGEN_TIMEOUT_SECS`, `.env` honored)
/// 4. Explicit setters (CLI flags)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodgenConfig {
    api_base: String,
    timeout: Option<Duration>,
}

/// On-disk shape of a config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    api_base: Option<String>,
    timeout_secs: Option<u64>,
}

impl Default for PodgenConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: None,
        }
    }
}

impl PodgenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document on top of the defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(contents)
            .map_err(|e| PodgenError::Configuration(format!("invalid config file: {e}")))?;
        let mut config = Self::default();
        if let Some(api_base) = file.api_base {
            config.set_api_base(api_base)?;
        }
        if let Some(secs) = file.timeout_secs {
            config.timeout = timeout_from_secs(secs);
        }
        Ok(config)
    }

    /// Load a TOML config file on top of the defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PodgenError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Defaults overlaid with the environment.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env()
    }

    /// Overlay `PODGEN_*` environment variables (and `.env`, if present).
    pub fn with_env(mut self) -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        if let Ok(api_base) = std::env::var(ENV_API_BASE) {
            self.set_api_base(api_base)?;
        }
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                PodgenError::Configuration(format!(
                    "{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            self.timeout = timeout_from_secs(secs);
        }
        Ok(self)
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Set the service origin. Must be an absolute http(s) URL; a trailing
    /// `/` is dropped so paths can be appended directly.
    pub fn set_api_base(&mut self, api_base: impl Into<String>) -> Result<()> {
        let api_base = api_base.into();
        let trimmed = api_base.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(PodgenError::Configuration(format!(
                "API base must be an http(s) URL, got '{api_base}'"
            )));
        }
        self.api_base = trimmed.to_string();
        Ok(())
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Result<Self> {
        self.set_api_base(api_base)?;
        Ok(self)
    }

    /// Request timeout. `None` lets a request run until it settles.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL of the generation endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{GENERATE_PATH}", self.api_base)
    }

    /// Playable URL for an audio path returned by the service.
    pub fn audio_url(&self, audio_path: &str) -> String {
        format!("{}{audio_path}", self.api_base)
    }
}

/// Zero seconds disables the timeout.
fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
