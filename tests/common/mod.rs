//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

use formrelay::HandlerContext;
use formrelay::services::{InputShape, MockEmailSender, RelayConfig};
use serde_json::{Value, json};
use std::sync::Arc;

/// Direct-shape event carrying subject and body at the top level
pub fn direct_event(subject: &str, body: &str) -> Value {
    json!({ "subject": subject, "body": body })
}

/// Wrapped-shape event carrying the payload as a JSON-encoded body string
pub fn wrapped_event(subject: &str, body: &str) -> Value {
    json!({ "body": json!({ "subject": subject, "body": body }).to_string() })
}

/// Default configuration: direct shape, two-field limit, no configuration set
pub fn direct_config() -> RelayConfig {
    RelayConfig::default()
}

/// Wrapped-shape configuration with the default field limit
pub fn wrapped_config() -> RelayConfig {
    RelayConfig {
        input_shape: InputShape::Wrapped,
        ..RelayConfig::default()
    }
}

/// Handler context wired to the given mock sender
pub fn context_with(sender: Arc<MockEmailSender>, config: RelayConfig) -> HandlerContext {
    HandlerContext::with_sender(sender, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_event_shape() {
        let event = direct_event("Hello", "World");
        assert_eq!(event["subject"], "Hello");
        assert_eq!(event["body"], "World");
    }

    #[test]
    fn test_wrapped_event_shape() {
        let event = wrapped_event("Hello", "World");
        let inner: Value = serde_json::from_str(event["body"].as_str().unwrap()).unwrap();
        assert_eq!(inner["subject"], "Hello");
        assert_eq!(inner["body"], "World");
    }
}
