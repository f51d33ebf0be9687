/// Logging utilities for PII redaction
///
/// Inbound payloads are attacker-controlled free text and may carry PII, so
/// log lines never include the raw fields. These helpers produce the
/// redacted forms the handler logs instead.

/// Redacts a subject line for logging (shows a short preview and the length).
///
/// # Examples
/// ```
/// use formrelay::utils::logging::redact_subject;
///
/// assert_eq!(redact_subject("Confidential Document"), "Con...[21 chars]");
/// assert_eq!(redact_subject("Hi"), "Hi");
/// ```
pub fn redact_subject(subject: &str) -> String {
    const MAX_VISIBLE_CHARS: usize = 3;
    const MIN_LENGTH_TO_REDACT: usize = 6;

    let total = subject.chars().count();
    if total < MIN_LENGTH_TO_REDACT {
        subject.to_string()
    } else {
        let visible: String = subject.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}...[{} chars]", visible, total)
    }
}

/// Redacts a message body for logging (shows length only).
pub fn redact_body(body: &str) -> String {
    format!("[{} bytes]", body.len())
}
