//! Fragment: the unit of work handed to a template engine.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Maximum number of body characters kept when abbreviating for log lines.
const ABBREVIATE_LEN: usize = 64;

/// A renderable snippet: template source plus the JSON payload it is
/// evaluated against.
///
/// Fragments travel through the processing pipeline as self-contained
/// documents. The `body` holds the template source in whatever syntax the
/// selected backend understands; the `payload` is the rendering context.
/// After processing, the body is replaced with the rendered output.
///
/// # JSON shape
///
/// ```json
/// {
///   "id": "4f6c9a32-...",
///   "type": "snippet",
///   "configuration": {},
///   "body": "Hello {{ name }}!",
///   "payload": { "name": "World" }
/// }
/// ```
///
/// All fields except `type` and `body` may be omitted; a fresh id is
/// generated and configuration/payload default to empty objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Unique fragment identifier.
    #[serde(default = "generated_id")]
    pub id: String,
    /// Fragment type tag (e.g. `"snippet"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Per-fragment engine configuration.
    #[serde(default = "empty_object")]
    pub configuration: Value,
    /// Template source text.
    pub body: String,
    /// JSON object the template is evaluated against.
    #[serde(default = "empty_object")]
    pub payload: Value,
}

fn generated_id() -> String {
    Uuid::new_v4().to_string()
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

impl Fragment {
    /// Creates a fragment with a generated id and an empty payload.
    pub fn new(kind: impl Into<String>, configuration: Value, body: impl Into<String>) -> Self {
        Self {
            id: generated_id(),
            kind: kind.into(),
            configuration,
            body: body.into(),
            payload: empty_object(),
        }
    }

    /// Shallow-merges a JSON object into the payload; keys from `json` win.
    ///
    /// Non-object values are ignored: the payload must stay an object so
    /// engines can treat it as the root rendering context.
    pub fn merge_in_payload(&mut self, json: Value) {
        let Value::Object(incoming) = json else {
            return;
        };
        match &mut self.payload {
            Value::Object(existing) => existing.extend(incoming),
            other => *other = Value::Object(incoming),
        }
    }

    /// Single-line, truncated rendering of the body for log messages.
    pub fn abbreviate(&self) -> String {
        let flat: String = self
            .body
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        if flat.chars().count() <= ABBREVIATE_LEN {
            flat
        } else {
            let cut: String = flat.chars().take(ABBREVIATE_LEN).collect();
            format!("{cut}...")
        }
    }
}
