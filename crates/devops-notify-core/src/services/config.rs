/// Configuration service - loads config from environment variables
use crate::constants::{ENV_DEBUG, ENV_EMAIL_FROM, ENV_INFO, ENV_TEMPLATE_ARN_PREFIX};
use crate::error::NotifyError;
use crate::models::{LogLevel, NotifyConfig};

impl NotifyConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, NotifyError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| NotifyError::Config(format!("Missing {} env var", key)))
        };

        let config = NotifyConfig {
            template_arn_prefix: required(ENV_TEMPLATE_ARN_PREFIX)?,
            email_from: required(ENV_EMAIL_FROM)?,
        };

        config
            .validate()
            .map_err(|e| NotifyError::Config(format!("Invalid configuration: {}", e)))?;

        Ok(config)
    }
}

impl LogLevel {
    /// Reads the `DEBUG` / `INFO` toggles from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the `DEBUG` / `INFO` toggles through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_toggles(lookup(ENV_DEBUG).as_deref(), lookup(ENV_INFO).as_deref())
    }
}
