//! Successful generation result.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One line of the generated transcript.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScriptLine {
    #[serde(default, deserialize_with = "lenient_text")]
    pub speaker: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,
}

/// Parsed 2xx response body.
///
/// Any well-formed JSON object is accepted: a `script` that is not an array
/// counts as absent, and lines missing `speaker` or `text` keep them empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PodcastResult {
    #[serde(
        default,
        deserialize_with = "lenient_script",
        skip_serializing_if = "Option::is_none"
    )]
    pub script: Option<Vec<ScriptLine>>,
    /// Audio path relative to the service origin.
    #[serde(
        default,
        deserialize_with = "lenient_audio",
        skip_serializing_if = "Option::is_none"
    )]
    pub audio: Option<String>,
}

fn text_of(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(text_of(Value::deserialize(deserializer)?))
}

fn lenient_script<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<ScriptLine>>, D::Error> {
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    let lines = items
        .into_iter()
        .map(|item| match item {
            Value::Object(mut fields) => ScriptLine {
                speaker: fields.remove("speaker").map(text_of).unwrap_or_default(),
                text: fields.remove("text").map(text_of).unwrap_or_default(),
            },
            _ => ScriptLine::default(),
        })
        .collect();
    Ok(Some(lines))
}

fn lenient_audio<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

impl PodcastResult {
    /// Script lines, empty when the service produced none.
    pub fn script_lines(&self) -> &[ScriptLine] {
        self.script.as_deref().unwrap_or_default()
    }

    /// Audio path, treating an empty string as absent.
    pub fn audio_path(&self) -> Option<&str> {
        self.audio.as_deref().filter(|a| !a.is_empty())
    }
}
