//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

pub mod mock_aws;
pub mod test_data;

use devops_notify_core::models::NotifyConfig;
use devops_notify_core::services::EmailNotifier;
use devops_notify_worker::NotifyContext;
use mock_aws::{MockCodeCommit, MockIam, MockPipeline, MockSes};
use std::sync::Arc;

pub const TEMPLATE_ARN_PREFIX: &str = "arn:aws:ses:eu-west-1:123456789012:template/";
pub const EMAIL_FROM: &str = "devops@example.com";

pub fn test_config() -> NotifyConfig {
    NotifyConfig {
        template_arn_prefix: TEMPLATE_ARN_PREFIX.to_string(),
        email_from: EMAIL_FROM.to_string(),
    }
}

/// In-memory AWS collaborators plus a context wired to them
pub struct TestHarness {
    pub codecommit: Arc<MockCodeCommit>,
    pub pipeline: Arc<MockPipeline>,
    pub iam: Arc<MockIam>,
    pub ses: Arc<MockSes>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            codecommit: Arc::new(MockCodeCommit::new()),
            pipeline: Arc::new(MockPipeline::new()),
            iam: Arc::new(MockIam::new()),
            ses: Arc::new(MockSes::new()),
        }
    }

    pub fn context(&self) -> NotifyContext {
        NotifyContext::new(
            self.codecommit.clone(),
            self.pipeline.clone(),
            self.iam.clone(),
            self.ses.clone(),
            test_config(),
        )
    }

    /// Context whose notifier has no usable configuration
    pub fn unconfigured_context(&self, reason: &str) -> NotifyContext {
        NotifyContext::with_notifier(
            self.codecommit.clone(),
            self.pipeline.clone(),
            self.iam.clone(),
            EmailNotifier::unconfigured(self.ses.clone(), reason),
        )
    }

    /// Total number of calls made against any collaborator
    pub fn total_calls(&self) -> usize {
        self.codecommit.call_count()
            + self.pipeline.call_count()
            + self.iam.call_count()
            + self.ses.sent().len()
    }
}

/// Generate a unique SNS message ID
pub fn generate_message_id() -> String {
    format!("test-{}", uuid::Uuid::new_v4())
}
