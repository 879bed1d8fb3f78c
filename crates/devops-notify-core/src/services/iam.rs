/// IAM service - maps IAM user names to notification addresses
use crate::constants::EMAIL_TAG_KEY;
use crate::error::NotifyError;
use crate::utils::logging::redact_email;
use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Tags of an IAM user as `(key, value)` pairs, in the order IAM returns them
    async fn get_user_tags(&self, user_name: &str) -> Result<Vec<(String, String)>, NotifyError>;
}

pub struct AwsIdentityService {
    client: aws_sdk_iam::Client,
}

impl AwsIdentityService {
    pub fn new(client: aws_sdk_iam::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityService for AwsIdentityService {
    async fn get_user_tags(&self, user_name: &str) -> Result<Vec<(String, String)>, NotifyError> {
        let response = self
            .client
            .get_user()
            .user_name(user_name)
            .send()
            .await
            .map_err(|e| NotifyError::Iam(format!("GetUser failed for {}: {}", user_name, e)))?;

        let tags = response
            .user()
            .map(|user| {
                user.tags()
                    .iter()
                    .map(|tag| (tag.key().to_string(), tag.value().to_string()))
                    .collect()
            })
            .unwrap_or_default();

        Ok(tags)
    }
}

/// Email of one IAM user, taken from the first `email` tag
pub async fn get_user_email(
    service: &dyn IdentityService,
    user_name: &str,
) -> Result<Option<String>, NotifyError> {
    let tags = service.get_user_tags(user_name).await?;

    let email = tags
        .into_iter()
        .find(|(key, _)| key == EMAIL_TAG_KEY)
        .map(|(_, value)| value);

    debug!(
        user_name = %user_name,
        email = ?email.as_deref().map(redact_email),
        "Found user email"
    );

    Ok(email)
}

/// Emails of IAM users, one entry per user name in the same order
///
/// Lookups run concurrently. A failed lookup is logged and yields `None`
/// without affecting the other users.
pub async fn get_user_emails(
    service: &dyn IdentityService,
    user_names: &[String],
) -> Vec<Option<String>> {
    if user_names.is_empty() {
        debug!("No user names to convert to emails");
        return Vec::new();
    }

    let results = join_all(
        user_names
            .iter()
            .map(|user_name| get_user_email(service, user_name)),
    )
    .await;

    user_names
        .iter()
        .zip(results)
        .map(|(user_name, result)| match result {
            Ok(email) => email,
            Err(e) => {
                error!(
                    user_name = %user_name,
                    error = %e,
                    "Unable to get email address for IAM user"
                );
                None
            }
        })
        .collect()
}
