//! Form state and the guest list derived from it.

use bon::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Voice gender requested for a speaker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Gender {
    Female,
    Male,
}

/// Raw input fields of the podcast form.
///
/// Mutated directly by the input layer. Only `topic` and `host` are
/// required, and that is enforced where the values are collected.
#[derive(Debug, Clone, Builder, PartialEq, Eq)]
pub struct FormState {
    #[builder(default, into)]
    pub topic: String,
    #[builder(default, into)]
    pub host: String,
    /// Free-text, comma separated guest names.
    #[builder(default, into)]
    pub guests_text: String,
    #[builder(default, into)]
    pub info: String,
    #[builder(default = Gender::Female)]
    pub host_gender: Gender,
    #[builder(default = Gender::Male)]
    pub guest_gender: Gender,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            topic: String::new(),
            host: String::new(),
            guests_text: String::new(),
            info: String::new(),
            host_gender: Gender::Female,
            guest_gender: Gender::Male,
        }
    }
}

impl FormState {
    /// Guest names parsed from `guests_text`. Recomputed on every call.
    pub fn guest_list(&self) -> Vec<String> {
        parse_guest_list(&self.guests_text)
    }

    /// Names of required fields that are still empty. Whitespace counts as
    /// a value, as with an HTML `required` input.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.topic.is_empty() {
            missing.push("topic");
        }
        if self.host.is_empty() {
            missing.push("host");
        }
        missing
    }
}

/// Split on commas, trim each entry, drop the empty ones.
pub fn parse_guest_list(guests_text: &str) -> Vec<String> {
    guests_text
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}
