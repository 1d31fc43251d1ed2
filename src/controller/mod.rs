//! Form controller: owns form state, runs submissions, tracks lifecycle.

use std::fmt;
use std::sync::Arc;

use strum::Display;

use crate::client::PodcastService;
use crate::error::Result;
use crate::render::View;
use crate::types::{FormState, GeneratePodcastRequest, PodcastResult};

/// Progress of the current submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Lifecycle {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl Lifecycle {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Callback invoked on every lifecycle transition.
pub type LifecycleObserver = Arc<dyn Fn(Lifecycle) + Send + Sync>;

/// Single-form controller.
///
/// After a submission settles exactly one of `result()` / `error_message()`
/// is populated. Both are empty only before the first submission.
pub struct FormController<S> {
    service: S,
    form: FormState,
    lifecycle: Lifecycle,
    result: Option<PodcastResult>,
    error: String,
    observer: Option<LifecycleObserver>,
}

impl<S> fmt::Debug for FormController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("form", &self.form)
            .field("lifecycle", &self.lifecycle)
            .field("result", &self.result)
            .field("error", &self.error)
            .field("observer", &self.observer.as_ref().map(|_| ".."))
            .finish()
    }
}

impl<S: PodcastService> FormController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            form: FormState::default(),
            lifecycle: Lifecycle::Idle,
            result: None,
            error: String::new(),
            observer: None,
        }
    }

    pub fn with_form(mut self, form: FormState) -> Self {
        self.form = form;
        self
    }

    pub fn with_observer(mut self, observer: LifecycleObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Direct access for the input layer.
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Guest names derived from the current guest text.
    pub fn guest_list(&self) -> Vec<String> {
        self.form.guest_list()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle.is_loading()
    }

    pub fn result(&self) -> Option<&PodcastResult> {
        self.result.as_ref()
    }

    /// Empty when there is no error to show.
    pub fn error_message(&self) -> &str {
        &self.error
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> View<'_> {
        View {
            form: &self.form,
            lifecycle: self.lifecycle,
            result: self.result.as_ref(),
            error: &self.error,
        }
    }

    /// Submit the form and wait for the request to settle.
    ///
    /// Never fails: every failure lands in `error_message()`. Returns the
    /// lifecycle the submission settled in.
    pub async fn submit(&mut self) -> Lifecycle {
        let request = self.begin_submit();
        let outcome = self.service.generate_podcast(&request).await;
        self.settle(outcome)
    }

    /// Clear the previous outcome, enter `Loading`, and build the payload.
    pub fn begin_submit(&mut self) -> GeneratePodcastRequest {
        self.error.clear();
        self.result = None;
        self.set_lifecycle(Lifecycle::Loading);
        GeneratePodcastRequest::from(&self.form)
    }

    /// Record the outcome of the in-flight request and leave `Loading`.
    pub fn settle(&mut self, outcome: Result<PodcastResult>) -> Lifecycle {
        let next = match outcome {
            Ok(result) => {
                tracing::debug!(
                    lines = result.script_lines().len(),
                    has_audio = result.audio_path().is_some(),
                    "podcast generated"
                );
                self.result = Some(result);
                Lifecycle::Success
            }
            Err(e) => {
                let category = e.category();
                tracing::warn!(
                    error = %e,
                    %category,
                    status = ?e.status(),
                    resubmittable = category.is_resubmittable(),
                    "podcast generation failed"
                );
                self.error = e.user_message();
                Lifecycle::Error
            }
        };
        self.set_lifecycle(next);
        next
    }

    fn set_lifecycle(&mut self, next: Lifecycle) {
        self.lifecycle = next;
        if let Some(observer) = &self.observer {
            observer(next);
        }
    }
}
