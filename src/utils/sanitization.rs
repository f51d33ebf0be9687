/// Free-text sanitization for outbound messages
use regex::Regex;
use std::sync::LazyLock;

// Runs of CR, LF, and tab collapse to a single space
static CONTROL_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n\t]+").unwrap());

/// Sanitizes free text before it is used in an outbound message.
///
/// Collapses each run of carriage returns, line feeds, and tabs into a
/// single space, strips embedded NUL characters, and trims leading and
/// trailing whitespace. Idempotent: sanitizing twice yields the same result
/// as sanitizing once.
///
/// # Examples
/// ```
/// use formrelay::utils::sanitization::sanitize_text;
///
/// assert_eq!(sanitize_text("Hello\r\nWorld"), "Hello World");
/// assert_eq!(sanitize_text("  padded\t"), "padded");
/// ```
pub fn sanitize_text(text: &str) -> String {
    let collapsed = CONTROL_RUNS.replace_all(text, " ");
    collapsed.replace('\0', "").trim().to_string()
}
