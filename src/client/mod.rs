//! Podcast generation service client.

pub mod http;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::PodgenConfig;
use crate::error::{PodgenError, Result};
use crate::types::{GeneratePodcastRequest, PodcastResult};

/// A backend that turns a form submission into a script and audio.
#[async_trait]
pub trait PodcastService: Send + Sync {
    /// Submit one generation request and wait for it to settle.
    async fn generate_podcast(&self, request: &GeneratePodcastRequest) -> Result<PodcastResult>;
}

#[async_trait]
impl<T: PodcastService + ?Sized> PodcastService for Arc<T> {
    async fn generate_podcast(&self, request: &GeneratePodcastRequest) -> Result<PodcastResult> {
        (**self).generate_podcast(request).await
    }
}

/// `PodcastService` over HTTP (`POST <api_base>/api/generate-podcast`).
#[derive(Debug, Clone)]
pub struct HttpPodcastClient {
    config: PodgenConfig,
    http: reqwest::Client,
}

impl HttpPodcastClient {
    pub fn new(config: PodgenConfig) -> Result<Self> {
        Ok(Self {
            config,
            http: http::build_client()?,
        })
    }

    async fn send(&self, request: &GeneratePodcastRequest) -> Result<PodcastResult> {
        let url = self.config.endpoint();
        tracing::debug!(
            url = %url,
            topic = %request.topic,
            guests = request.guest_names.len(),
            "submitting podcast generation request"
        );

        let mut builder = self.http.post(url).json(request);
        if let Some(timeout) = self.config.timeout() {
            builder = builder.timeout(timeout);
        }
        let response = builder.send().await.map_err(|e| self.transport_error(e))?;
        tracing::debug!(status = response.status().as_u16(), "podcast service responded");
        http::decode_json_response(response).await
    }

    /// An elapsed configured deadline becomes `Timeout`; anything else stays `Network`.
    fn transport_error(&self, error: reqwest::Error) -> PodgenError {
        match self.config.timeout() {
            Some(timeout) if error.is_timeout() => PodgenError::Timeout(timeout.as_millis() as u64),
            _ => PodgenError::Network(error),
        }
    }
}

#[async_trait]
impl PodcastService for HttpPodcastClient {
    async fn generate_podcast(&self, request: &GeneratePodcastRequest) -> Result<PodcastResult> {
        self.send(request).await
    }
}
