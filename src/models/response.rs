/// Response model returned to the invoking platform
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The handler's response: a status code and a JSON-encoded message string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    /// Builds a response, JSON-encoding the message into the body.
    pub fn new(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            body: Value::String(message.to_string()).to_string(),
        }
    }

    /// Decodes the JSON-encoded message back out of the body.
    pub fn message(&self) -> Option<String> {
        serde_json::from_str(&self.body).ok()
    }
}
