//! HTTP plumbing: client construction and response decoding.

use serde::de::DeserializeOwned;

use crate::error::{PodgenError, Result};

const USER_AGENT: &str = concat!("podgen/", env!("CARGO_PKG_VERSION"));

/// Build the reqwest client used for service calls.
pub fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .pool_max_idle_per_host(2)
        .build()
        .map_err(|e| PodgenError::Configuration(format!("failed to build HTTP client: {e}")))
}

/// Map a non-2xx response body to an error.
///
/// Uses the string `error` field of a JSON body when present and non-empty,
/// otherwise `Request failed with <status>`.
pub fn status_to_error(status: u16, body: &str) -> PodgenError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.as_str())
                .filter(|e| !e.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("Request failed with {status}"));
    PodgenError::api(status, message)
}

/// Decode a response: 2xx bodies as `T`, anything else via [`status_to_error`].
pub async fn decode_json_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), body = %body, "service returned failure status");
        return Err(status_to_error(status.as_u16(), &body));
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
