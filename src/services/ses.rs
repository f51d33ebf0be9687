/// SES email sending service
use crate::constants::{FROM_ADDRESS, TO_ADDRESS};
use crate::error::SendError;
use async_trait::async_trait;
use aws_sdk_ses::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ses::operation::send_email::SendEmailError;
use aws_sdk_ses::types::{Body, Content, Destination, Message};
use tracing::info;

/// The mail-send capability.
///
/// Sends a plain-text message with the fixed sender and recipient; the
/// handler owns an instance of this trait so tests can substitute a mock.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends one message, returning the provider message id.
    async fn send(&self, subject: &str, body: &str) -> Result<String, SendError>;
}

/// `EmailSender` backed by the SES `SendEmail` API.
pub struct SesEmailSender {
    client: aws_sdk_ses::Client,
    configuration_set: Option<String>,
}

impl SesEmailSender {
    pub fn new(client: aws_sdk_ses::Client, configuration_set: Option<String>) -> Self {
        Self {
            client,
            configuration_set,
        }
    }
}

#[async_trait]
impl EmailSender for SesEmailSender {
    async fn send(&self, subject: &str, body: &str) -> Result<String, SendError> {
        let subject = Content::builder()
            .data(subject)
            .charset("UTF-8")
            .build()
            .map_err(|e| SendError::Other(format!("Failed to build subject: {}", e)))?;

        let text = Content::builder()
            .data(body)
            .charset("UTF-8")
            .build()
            .map_err(|e| SendError::Other(format!("Failed to build body: {}", e)))?;

        let message = Message::builder()
            .subject(subject)
            .body(Body::builder().text(text).build())
            .build();

        let destination = Destination::builder().to_addresses(TO_ADDRESS).build();

        let mut request = self
            .client
            .send_email()
            .source(FROM_ADDRESS)
            .destination(destination)
            .message(message);

        if let Some(name) = self.configuration_set.as_deref() {
            request = request.configuration_set_name(name);
        }

        let response = request.send().await.map_err(classify_sdk_error)?;

        info!(message_id = %response.message_id, "Sent email via SES");
        Ok(response.message_id)
    }
}

/// Maps an SES SDK failure onto the fixed set of send failure kinds.
fn classify_sdk_error(err: SdkError<SendEmailError>) -> SendError {
    if err.as_service_error().is_none() {
        // Dispatch, timeout, or response decoding failure - nothing the
        // provider classified.
        return SendError::Other(DisplayErrorContext(&err).to_string());
    }
    classify_service_error(err.into_service_error())
}

fn classify_service_error(err: SendEmailError) -> SendError {
    match err {
        SendEmailError::MessageRejected(e) => SendError::MessageRejected(e.to_string()),
        SendEmailError::MailFromDomainNotVerifiedException(e) => {
            SendError::DomainNotVerified(e.to_string())
        }
        SendEmailError::ConfigurationSetDoesNotExistException(e) => {
            SendError::ConfigurationSetMissing(e.to_string())
        }
        SendEmailError::AccountSendingPausedException(e) => SendError::SendingPaused(e.to_string()),
        other => match other.code() {
            Some("LimitExceededException") | Some("Throttling") | Some("ThrottlingException") => {
                SendError::LimitExceeded(other.to_string())
            }
            _ => SendError::Client(other.to_string()),
        },
    }
}

/// Mock email sender for testing.
///
/// Records every send and can be programmed to fail with any failure kind.
pub struct MockEmailSender {
    sent: tokio::sync::Mutex<Vec<SentEmail>>,
    failure: tokio::sync::Mutex<Option<SendError>>,
}

/// A message captured by [`MockEmailSender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub subject: String,
    pub body: String,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self {
            sent: tokio::sync::Mutex::new(Vec::new()),
            failure: tokio::sync::Mutex::new(None),
        }
    }

    /// A sender whose every send fails with the given kind.
    pub fn failing_with(failure: SendError) -> Self {
        Self {
            sent: tokio::sync::Mutex::new(Vec::new()),
            failure: tokio::sync::Mutex::new(Some(failure)),
        }
    }

    pub async fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent.lock().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

impl Default for MockEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, subject: &str, body: &str) -> Result<String, SendError> {
        if let Some(failure) = self.failure.lock().await.clone() {
            return Err(failure);
        }
        self.sent.lock().await.push(SentEmail {
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok("mock-message-id".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ses::error::ErrorMetadata;
    use aws_sdk_ses::types::error::{
        AccountSendingPausedException, ConfigurationSetDoesNotExistException,
        ConfigurationSetSendingPausedException, MailFromDomainNotVerifiedException,
        MessageRejected,
    };

    #[test]
    fn test_classifies_named_service_errors() {
        let err = SendEmailError::MessageRejected(
            MessageRejected::builder()
                .message("Email address is not verified.")
                .build(),
        );
        assert!(matches!(
            classify_service_error(err),
            SendError::MessageRejected(_)
        ));

        let err = SendEmailError::MailFromDomainNotVerifiedException(
            MailFromDomainNotVerifiedException::builder().build(),
        );
        assert!(matches!(
            classify_service_error(err),
            SendError::DomainNotVerified(_)
        ));

        let err = SendEmailError::ConfigurationSetDoesNotExistException(
            ConfigurationSetDoesNotExistException::builder().build(),
        );
        assert!(matches!(
            classify_service_error(err),
            SendError::ConfigurationSetMissing(_)
        ));

        let err = SendEmailError::AccountSendingPausedException(
            AccountSendingPausedException::builder().build(),
        );
        assert!(matches!(
            classify_service_error(err),
            SendError::SendingPaused(_)
        ));
    }

    #[test]
    fn test_classifies_throttling_codes_as_limit_exceeded() {
        for code in ["LimitExceededException", "Throttling", "ThrottlingException"] {
            let err = SendEmailError::generic(ErrorMetadata::builder().code(code).build());
            assert!(
                matches!(classify_service_error(err), SendError::LimitExceeded(_)),
                "code {} should classify as limit exceeded",
                code
            );
        }
    }

    #[test]
    fn test_unrecognized_service_errors_are_client_errors() {
        let err = SendEmailError::generic(
            ErrorMetadata::builder()
                .code("InvalidParameterValue")
                .build(),
        );
        assert!(matches!(classify_service_error(err), SendError::Client(_)));

        // Pausing a configuration set is not in the fixed enumeration, so it
        // takes the generic client-error arm, not the account-level 403.
        let err = SendEmailError::ConfigurationSetSendingPausedException(
            ConfigurationSetSendingPausedException::builder().build(),
        );
        assert!(matches!(classify_service_error(err), SendError::Client(_)));

        let err = SendEmailError::unhandled("garbled response");
        assert!(matches!(classify_service_error(err), SendError::Client(_)));
    }

    #[tokio::test]
    async fn test_mock_sender_records_sends() {
        let sender = MockEmailSender::new();
        let message_id = sender.send("Hello", "World").await.unwrap();
        assert_eq!(message_id, "mock-message-id");

        let sent = sender.sent_emails().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Hello");
        assert_eq!(sent[0].body, "World");
    }

    #[tokio::test]
    async fn test_mock_sender_programmed_failure() {
        let sender = MockEmailSender::failing_with(SendError::SendingPaused("paused".to_string()));
        let result = sender.send("Hello", "World").await;
        assert!(matches!(result, Err(SendError::SendingPaused(_))));
        assert_eq!(sender.sent_count().await, 0);
    }
}
