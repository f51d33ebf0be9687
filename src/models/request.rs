/// Contact form request extraction and validation
use crate::constants::{MAX_BODY_LENGTH, MAX_SUBJECT_LENGTH};
use crate::error::ValidationError;
use serde_json::{Map, Value};

/// A raw contact form submission, extracted but not yet sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub subject: String,
    pub body: String,
}

impl ContactRequest {
    /// Validates and extracts a contact request from its carrying mapping.
    ///
    /// Checks run in a fixed order and stop at the first failure: field
    /// count, subject presence, body presence, subject length, body length.
    /// Presence requires a non-empty string value; lengths are measured in
    /// characters on the raw value, before sanitization.
    pub fn from_object(
        fields: &Map<String, Value>,
        max_fields: Option<usize>,
    ) -> Result<Self, ValidationError> {
        if let Some(limit) = max_fields {
            if fields.len() > limit {
                return Err(ValidationError::TooManyFields);
            }
        }

        let subject = fields
            .get("subject")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingSubject)?;

        let body = fields
            .get("body")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingBody)?;

        if subject.chars().count() > MAX_SUBJECT_LENGTH {
            return Err(ValidationError::SubjectTooLong);
        }

        if body.chars().count() > MAX_BODY_LENGTH {
            return Err(ValidationError::BodyTooLong);
        }

        Ok(Self {
            subject: subject.to_string(),
            body: body.to_string(),
        })
    }
}
