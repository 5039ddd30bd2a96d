//! Wire format of the component API.

use serde::Deserialize;

/// Envelope returned by `/api/products/{id}/components`.
///
/// Only the envelope is inspected; `result` is forwarded untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentResponse {
    /// Whether the API considers the lookup successful.
    #[serde(default = "default_success")]
    pub success: bool,
    /// API-level status code.
    #[serde(default)]
    pub code: Option<i64>,
    /// The CAD document, absent or null for unknown components.
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

impl ComponentResponse {
    /// Take the CAD document if the response actually carries one.
    pub fn into_cad_document(self) -> Option<serde_json::Value> {
        if !self.success {
            return None;
        }
        match self.result {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::Object(map)) if map.is_empty() => None,
            Some(serde_json::Value::Array(items)) if items.is_empty() => None,
            Some(value) => Some(value),
        }
    }
}

fn default_success() -> bool {
    true
}
