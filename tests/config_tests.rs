//! Tests for configuration layering.

use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use podgen::config::{PodgenConfig, DEFAULT_API_BASE};
use podgen::error::PodgenError;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_ENV_VARS: [&str; 2] = ["PODGEN_API_BASE", "PODGEN_TIMEOUT_SECS"];

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

fn env_lock_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn clear_env() {
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }
}

#[test]
fn from_env_without_overrides_uses_defaults() {
    let _lock = env_lock_guard();
    let _env = EnvGuard::capture(&CONFIG_ENV_VARS);
    clear_env();

    let config = PodgenConfig::from_env().unwrap();
    assert_eq!(config.api_base(), DEFAULT_API_BASE);
    assert_eq!(config.timeout(), None);
}

#[test]
fn env_overrides_file() {
    let _lock = env_lock_guard();
    let _env = EnvGuard::capture(&CONFIG_ENV_VARS);
    clear_env();
    std::env::set_var("PODGEN_API_BASE", "http://localhost:9000/");
    std::env::set_var("PODGEN_TIMEOUT_SECS", "30");

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("podgen.toml");
    std::fs::write(&path, "api_base = \"http://from-file.example\"\ntimeout_secs = 5\n").unwrap();

    let config = PodgenConfig::from_file(&path).unwrap().with_env().unwrap();
    assert_eq!(config.api_base(), "http://localhost:9000");
    assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    assert_eq!(config.endpoint(), "http://localhost:9000/api/generate-podcast");
}

#[test]
fn invalid_env_timeout_is_configuration_error() {
    let _lock = env_lock_guard();
    let _env = EnvGuard::capture(&CONFIG_ENV_VARS);
    clear_env();
    std::env::set_var("PODGEN_TIMEOUT_SECS", "soon");

    let err = PodgenConfig::from_env().unwrap_err();
    assert!(matches!(err, PodgenError::Configuration(msg) if msg.contains("soon")));
}

#[test]
fn invalid_env_api_base_is_configuration_error() {
    let _lock = env_lock_guard();
    let _env = EnvGuard::capture(&CONFIG_ENV_VARS);
    clear_env();
    std::env::set_var("PODGEN_API_BASE", "localhost:9000");

    assert!(matches!(
        PodgenConfig::from_env(),
        Err(PodgenError::Configuration(_))
    ));
}

#[test]
fn missing_file_is_configuration_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = PodgenConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, PodgenError::Configuration(msg) if msg.contains("absent.toml")));
}
