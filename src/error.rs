/// Error types for the formrelay handler
use thiserror::Error;

/// Rejection reasons detected locally, before any send is attempted.
///
/// The `Display` strings double as the user-facing rejection messages; every
/// rejection maps to status 413.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Too many fields.")]
    TooManyFields,

    #[error("Missing subject.")]
    MissingSubject,

    #[error("Missing body.")]
    MissingBody,

    #[error("Subject too long.")]
    SubjectTooLong,

    #[error("Body too long.")]
    BodyTooLong,
}

/// Failure kinds surfaced by the mail-send capability.
///
/// One variant per named provider failure plus the catch-all. The payload is
/// the provider detail, logged server-side only; callers receive the generic
/// mapped message instead.
#[derive(Error, Debug, Clone)]
pub enum SendError {
    #[error("Message rejected: {0}")]
    MessageRejected(String),

    #[error("Domain not verified: {0}")]
    DomainNotVerified(String),

    #[error("Configuration set does not exist: {0}")]
    ConfigurationSetMissing(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Account sending paused: {0}")]
    SendingPaused(String),

    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("Error sending email: {0}")]
    Other(String),
}

/// Configuration errors raised at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid input shape: {0}")]
    InvalidInputShape(String),

    #[error("Invalid max fields value: {0}")]
    InvalidMaxFields(String),
}
