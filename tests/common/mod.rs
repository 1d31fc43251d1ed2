//! Shared test helpers and mock service.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use podgen::client::PodcastService;
use podgen::controller::{Lifecycle, LifecycleObserver};
use podgen::error::PodgenError;
use podgen::types::{GeneratePodcastRequest, PodcastResult, ScriptLine};

/// A mock service that returns queued outcomes and records requests.
#[derive(Default)]
pub struct MockService {
    outcomes: Mutex<VecDeque<Result<PodcastResult, PodgenError>>>,
    requests: Mutex<Vec<GeneratePodcastRequest>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_success(&self, result: PodcastResult) {
        self.outcomes.lock().unwrap().push_back(Ok(result));
    }

    pub fn queue_error(&self, error: PodgenError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<GeneratePodcastRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PodcastService for MockService {
    async fn generate_podcast(
        &self,
        request: &GeneratePodcastRequest,
    ) -> Result<PodcastResult, PodgenError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(PodcastResult::default()))
    }
}

/// Observer that records every lifecycle transition.
pub fn recording_observer() -> (LifecycleObserver, Arc<Mutex<Vec<Lifecycle>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let observer: LifecycleObserver = Arc::new(move |state| sink.lock().unwrap().push(state));
    (observer, seen)
}

pub fn sample_result() -> PodcastResult {
    PodcastResult {
        script: Some(vec![ScriptLine {
            speaker: "Alex".to_string(),
            text: "Hello".to_string(),
        }]),
        audio: Some("/files/a.mp3".to_string()),
    }
}
