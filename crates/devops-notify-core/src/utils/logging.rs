/// Logging utilities: subscriber setup and PII redaction
///
/// Committer and approver addresses end up in info/error logs; they are
/// redacted to their domain before being logged there.
use crate::models::LogLevel;
use regex::Regex;
use std::sync::LazyLock;
use tracing_subscriber::EnvFilter;

// Email redaction regex
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Installs the JSON tracing subscriber
///
/// `RUST_LOG` wins when set, otherwise the level selected by the `DEBUG` /
/// `INFO` toggles is applied.
pub fn init_tracing(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    // A second initialisation (tests, warm re-entry) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_current_span(false)
        .try_init();
}

/// Redacts email addresses from text, preserving domain for debugging
///
/// # Examples
/// ```
/// use devops_notify_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("alice@example.com"), "***@example.com");
/// assert_eq!(redact_email("to: a@x.com, b@y.org"), "to: ***@x.com, ***@y.org");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            match email.find('@') {
                Some(at_pos) => format!("***{}", &email[at_pos..]),
                None => "***@***".to_string(),
            }
        })
        .to_string()
}
