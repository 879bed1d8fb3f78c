/// SES email sending service
use crate::constants::{EMAIL_TAG_NAME, EMAIL_TAG_VALUE};
use crate::error::NotifyError;
use crate::models::{NotifyConfig, TemplatedEmail};
use crate::utils::logging::redact_email;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplatedEmailSender: Send + Sync {
    /// Sends one templated email and returns the SES message id
    async fn send_templated_email(&self, email: &TemplatedEmail) -> Result<String, NotifyError>;
}

pub struct SesEmailSender {
    client: aws_sdk_ses::Client,
}

impl SesEmailSender {
    pub fn new(client: aws_sdk_ses::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TemplatedEmailSender for SesEmailSender {
    async fn send_templated_email(&self, email: &TemplatedEmail) -> Result<String, NotifyError> {
        use aws_sdk_ses::types::{Destination, MessageTag};

        let destination = Destination::builder()
            .set_to_addresses(Some(email.to.clone()))
            .build();

        let tags = email
            .tags
            .iter()
            .map(|(name, value)| {
                MessageTag::builder()
                    .name(name)
                    .value(value)
                    .build()
                    .map_err(|e| NotifyError::Ses(format!("Failed to build message tag: {}", e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let response = self
            .client
            .send_templated_email()
            .template(&email.template_name)
            .template_arn(&email.template_arn)
            .template_data(&email.template_data)
            .destination(destination)
            .source(&email.from)
            .set_reply_to_addresses(Some(email.reply_to.clone()))
            .set_tags(Some(tags))
            .send()
            .await
            .map_err(|e| NotifyError::Ses(format!("SES send_templated_email failed: {}", e)))?;

        Ok(response.message_id().to_string())
    }
}

/// Renders notification requests into templated SES sends
#[derive(Clone)]
pub struct EmailNotifier {
    sender: Arc<dyn TemplatedEmailSender>,
    /// Loaded configuration, or the reason it could not be loaded
    config: Result<NotifyConfig, String>,
}

impl EmailNotifier {
    pub fn new(sender: Arc<dyn TemplatedEmailSender>, config: NotifyConfig) -> Self {
        Self {
            sender,
            config: Ok(config),
        }
    }

    /// Notifier without a usable configuration
    ///
    /// Every send that has recipients fails with [`NotifyError::Config`];
    /// requests without recipients stay no-ops.
    pub fn unconfigured(sender: Arc<dyn TemplatedEmailSender>, reason: impl Into<String>) -> Self {
        Self {
            sender,
            config: Err(reason.into()),
        }
    }

    /// Builds the SES request, `None` when there is nothing to send
    ///
    /// Empty and missing addresses are dropped; the remaining ones keep their
    /// order and are neither deduplicated nor capped.
    pub fn build_email<P: Serialize + ?Sized>(
        &self,
        template_id: &str,
        emails: &[Option<String>],
        params: &P,
    ) -> Result<Option<TemplatedEmail>, NotifyError> {
        if template_id.is_empty() || emails.is_empty() {
            return Ok(None);
        }

        let to: Vec<String> = emails
            .iter()
            .flatten()
            .filter(|email| !email.is_empty())
            .cloned()
            .collect();

        if to.is_empty() {
            return Ok(None);
        }

        let config = self
            .config
            .as_ref()
            .map_err(|reason| NotifyError::Config(reason.clone()))?;

        Ok(Some(TemplatedEmail {
            template_name: template_id.to_string(),
            template_arn: config.template_arn(template_id),
            template_data: serde_json::to_string(params)?,
            to,
            from: config.email_from.clone(),
            reply_to: vec![config.email_from.clone()],
            tags: vec![(EMAIL_TAG_NAME.to_string(), EMAIL_TAG_VALUE.to_string())],
        }))
    }

    /// Sends one templated email to every resolved address
    ///
    /// Returns the SES message id, or `None` when the request was a no-op.
    /// SES failures propagate to the caller.
    pub async fn send_emails<P: Serialize + ?Sized + Sync>(
        &self,
        template_id: &str,
        emails: &[Option<String>],
        params: &P,
    ) -> Result<Option<String>, NotifyError> {
        let Some(email) = self.build_email(template_id, emails, params)? else {
            debug!(template = %template_id, "No recipients, email not sent");
            return Ok(None);
        };

        debug!(
            template_arn = %email.template_arn,
            recipients = email.to.len(),
            "Sending email"
        );

        let message_id = self.sender.send_templated_email(&email).await?;

        info!(
            template = %template_id,
            message_id = %message_id,
            to = %redact_email(&email.to.join(", ")),
            "Sent templated email via SES"
        );

        Ok(Some(message_id))
    }
}
