/// Contact form handler - validates, sanitizes, and relays submissions
use crate::error::{ConfigError, SendError, ValidationError};
use crate::models::{ContactRequest, HandlerResponse};
use crate::services::{EmailSender, InputShape, RelayConfig, SesEmailSender};
use crate::utils::{redact_body, redact_subject, sanitize_text};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{error, info};

/// Contact handler context
///
/// Built once at startup and shared across invocations. Holds the mail-send
/// capability behind a trait object so tests can substitute a mock.
pub struct HandlerContext {
    sender: Arc<dyn EmailSender>,
    config: RelayConfig,
}

impl HandlerContext {
    pub async fn new() -> Result<Self, ConfigError> {
        let config = RelayConfig::from_env()?;
        let aws_config = aws_config::load_from_env().await;
        let ses_client = aws_sdk_ses::Client::new(&aws_config);

        Ok(Self {
            sender: Arc::new(SesEmailSender::new(
                ses_client,
                config.configuration_set.clone(),
            )),
            config,
        })
    }

    /// Context with a caller-supplied sender, for tests.
    pub fn with_sender(sender: Arc<dyn EmailSender>, config: RelayConfig) -> Self {
        Self { sender, config }
    }
}

#[tracing::instrument(name = "contact.process", skip(ctx, payload))]
pub async fn process(ctx: &HandlerContext, payload: &Value) -> HandlerResponse {
    // 1. Extract and validate the submission
    let request = match extract_request(payload, &ctx.config) {
        Ok(request) => request,
        Err(rejection) => {
            info!(reason = %rejection, "Rejected contact form submission");
            return HandlerResponse::new(413, &rejection.to_string());
        }
    };

    // 2. Sanitize both fields
    let subject = sanitize_text(&request.subject);
    let body = sanitize_text(&request.body);

    info!(
        subject = %redact_subject(&subject),
        body = %redact_body(&body),
        "Relaying contact form submission"
    );

    // 3. Send and classify the outcome
    match ctx.sender.send(&subject, &body).await {
        Ok(message_id) => {
            info!(message_id = %message_id, "Contact form relayed");
            HandlerResponse::new(200, "Successfully sent email.")
        }
        Err(failure) => {
            error!(error = %failure, "Failed to send contact form email");
            failure_response(&failure)
        }
    }
}

/// Pulls the subject/body mapping out of the raw event per the configured
/// input shape, then validates it.
fn extract_request(
    payload: &Value,
    config: &RelayConfig,
) -> Result<ContactRequest, ValidationError> {
    match config.input_shape {
        InputShape::Direct => {
            let fields = payload.as_object().ok_or(ValidationError::MissingBody)?;
            ContactRequest::from_object(fields, config.max_fields)
        }
        InputShape::Wrapped => {
            let raw = payload
                .get("body")
                .and_then(Value::as_str)
                .ok_or(ValidationError::MissingBody)?;
            let fields: Map<String, Value> =
                serde_json::from_str(raw).map_err(|_| ValidationError::MissingBody)?;
            ContactRequest::from_object(&fields, config.max_fields)
        }
    }
}

/// Maps a send failure onto its response. The caller only ever sees the
/// generic message here; the provider detail stays in the server-side log.
fn failure_response(failure: &SendError) -> HandlerResponse {
    match failure {
        SendError::MessageRejected(_) => HandlerResponse::new(400, "Email rejected."),
        SendError::DomainNotVerified(_) => HandlerResponse::new(400, "Domain not verified."),
        SendError::ConfigurationSetMissing(_) => {
            HandlerResponse::new(400, "Configuration set does not exist.")
        }
        SendError::Client(_) => HandlerResponse::new(400, "Client error."),
        SendError::SendingPaused(_) => HandlerResponse::new(403, "Account sending paused."),
        SendError::LimitExceeded(_) => HandlerResponse::new(429, "Limit exceeded."),
        SendError::Other(_) => HandlerResponse::new(500, "Error sending email."),
    }
}
