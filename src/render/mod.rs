//! Text rendering of the form and its outcome.
//!
//! Every function here is pure: it reads a [`View`] snapshot, form state, or
//! a lifecycle value and returns text.

use crate::config::PodgenConfig;
use crate::controller::Lifecycle;
use crate::types::{FormState, PodcastResult};

pub const TITLE: &str = "AI Podcast Generator";
pub const SUBTITLE: &str = "Enter details below and generate a script and audio in one click.";
pub const SUBMIT_LABEL: &str = "Generate Podcast";
pub const SUBMIT_BUSY_LABEL: &str = "Generating… this can take a bit";
pub const LOADING_MESSAGE: &str = "Generating your podcast...";
pub const RESULTS_TITLE: &str = "Generated Output";
pub const NO_SCRIPT: &str = "No script produced.";
pub const NO_AUDIO: &str = "No audio url returned.";

/// Borrowed snapshot of everything the view depends on.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub form: &'a FormState,
    pub lifecycle: Lifecycle,
    pub result: Option<&'a PodcastResult>,
    pub error: &'a str,
}

/// Header, field values, guest hint, and the submit control.
pub fn render_form(view: &View<'_>) -> String {
    let form = view.form;
    let mut lines = vec![
        TITLE.to_string(),
        SUBTITLE.to_string(),
        String::new(),
        format!("Topic: {}", form.topic),
        format!("Host Name: {}", form.host),
        format!("Host Gender: {}", form.host_gender),
        format!("Guests (comma-separated): {}", form.guests_text),
        guest_hint(form),
        format!("Guest Gender (applied to all): {}", form.guest_gender),
    ];
    if !form.info.is_empty() {
        lines.push(format!("Additional Info: {}", form.info));
    }
    lines.push(String::new());
    lines.push(submit_control(view.lifecycle));
    lines.join("\n")
}

/// `Guests parsed: ...` hint under the guest field.
pub fn guest_hint(form: &FormState) -> String {
    let guests = form.guest_list();
    if guests.is_empty() {
        "Guests parsed: None".to_string()
    } else {
        format!("Guests parsed: {}", guests.join(", "))
    }
}

/// Submit button caption; disabled while loading.
pub fn submit_control(lifecycle: Lifecycle) -> String {
    if lifecycle.is_loading() {
        format!("[ {SUBMIT_BUSY_LABEL} ] (disabled)")
    } else {
        format!("[ {SUBMIT_LABEL} ]")
    }
}

/// Blocking overlay, present only while loading.
pub fn render_overlay(view: &View<'_>) -> Option<String> {
    view.lifecycle
        .is_loading()
        .then(|| LOADING_MESSAGE.to_string())
}

/// Disabled submit caption plus overlay, shown for the duration of `Loading`.
pub fn render_progress(lifecycle: Lifecycle) -> Option<String> {
    lifecycle
        .is_loading()
        .then(|| format!("{}\n{LOADING_MESSAGE}", submit_control(lifecycle)))
}

/// Error panel and/or result panels, if there is anything to show.
pub fn render_outcome(view: &View<'_>, config: &PodgenConfig) -> Option<String> {
    let mut sections = Vec::new();
    if !view.error.is_empty() {
        sections.push(render_error(view.error));
    }
    if let Some(result) = view.result {
        sections.push(render_result(result, config));
    }
    (!sections.is_empty()).then(|| sections.join("\n\n"))
}

pub fn render_error(message: &str) -> String {
    format!("Error: {message}")
}

/// "Generated Output" with the script and audio panels.
pub fn render_result(result: &PodcastResult, config: &PodgenConfig) -> String {
    [
        RESULTS_TITLE.to_string(),
        render_script(result),
        render_audio(result, config),
    ]
    .join("\n\n")
}

pub fn render_script(result: &PodcastResult) -> String {
    let lines = result.script_lines();
    if lines.is_empty() {
        return format!("Script\n{NO_SCRIPT}");
    }
    let mut out = vec!["Script".to_string()];
    out.extend(lines.iter().map(|line| format!("{}: {}", line.speaker, line.text)));
    out.join("\n")
}

pub fn render_audio(result: &PodcastResult, config: &PodgenConfig) -> String {
    match result.audio_path() {
        Some(path) => format!("Audio\n{}", config.audio_url(path)),
        None => format!("Audio\n{NO_AUDIO}"),
    }
}
