/// Configuration models
use serde::{Deserialize, Serialize};

/// Runtime configuration of the relay
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NotifyConfig {
    /// ARN prefix the SES template name is appended to
    pub template_arn_prefix: String,
    /// Sender and reply-to address of every notification
    pub email_from: String,
}

impl NotifyConfig {
    /// Validates configuration is valid
    pub fn validate(&self) -> Result<(), String> {
        if self.template_arn_prefix.trim().is_empty() {
            return Err("Template ARN prefix not configured".to_string());
        }

        if self.email_from.trim().is_empty() {
            return Err("Sender address not configured".to_string());
        }

        if !self.email_from.contains('@') {
            return Err(format!("Invalid sender address: {}", self.email_from));
        }

        Ok(())
    }

    /// Full ARN of an SES template
    pub fn template_arn(&self, template_id: &str) -> String {
        format!("{}{}", self.template_arn_prefix, template_id)
    }
}

/// Log verbosity selected through the `DEBUG` and `INFO` toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Error,
}

impl LogLevel {
    /// `DEBUG` defaults to on when unset or empty; `INFO` only matters when
    /// `DEBUG` is off
    pub fn from_toggles(debug: Option<&str>, info: Option<&str>) -> Self {
        let enabled = |v: &str| v.trim().eq_ignore_ascii_case("true");

        match debug.map(str::trim).filter(|v| !v.is_empty()) {
            None => return Self::Debug,
            Some(v) if enabled(v) => return Self::Debug,
            Some(_) => {}
        }

        if info.is_some_and(enabled) {
            Self::Debug
        } else if enabled(info) {
            Self::Info
        } else {
            Self::Error
        }
    }

    pub fn as_filter(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}
