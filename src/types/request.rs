//! Request payload for `/api/generate-podcast`.

use serde::{Deserialize, Serialize};

use super::form::{FormState, Gender};

/// JSON body sent to the generation service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePodcastRequest {
    pub topic: String,
    pub host: String,
    /// Guest names; the service names this field `guestname`.
    #[serde(rename = "guestname")]
    pub guest_names: Vec<String>,
    pub info: String,
    pub host_gender: Gender,
    pub guest_gender: Gender,
}

impl From<&FormState> for GeneratePodcastRequest {
    fn from(form: &FormState) -> Self {
        Self {
            topic: form.topic.clone(),
            host: form.host.clone(),
            guest_names: form.guest_list(),
            info: form.info.clone(),
            host_gender: form.host_gender,
            guest_gender: form.guest_gender,
        }
    }
}
