/// Service handles used while handling one invocation
use aws_config::SdkConfig;
use devops_notify_core::error::NotifyError;
use devops_notify_core::models::NotifyConfig;
use devops_notify_core::services::codecommit::{AwsCodeCommitService, CodeCommitService};
use devops_notify_core::services::codepipeline::{AwsPipelineService, PipelineService};
use devops_notify_core::services::iam::{AwsIdentityService, IdentityService};
use devops_notify_core::services::ses::{EmailNotifier, SesEmailSender, TemplatedEmailSender};
use std::sync::Arc;

/// Collaborators of the handlers, injected so tests can swap in fakes
pub struct NotifyContext {
    pub codecommit: Arc<dyn CodeCommitService>,
    pub pipeline: Arc<dyn PipelineService>,
    pub iam: Arc<dyn IdentityService>,
    pub notifier: EmailNotifier,
}

impl NotifyContext {
    pub fn new(
        codecommit: Arc<dyn CodeCommitService>,
        pipeline: Arc<dyn PipelineService>,
        iam: Arc<dyn IdentityService>,
        sender: Arc<dyn TemplatedEmailSender>,
        config: NotifyConfig,
    ) -> Self {
        Self::with_notifier(codecommit, pipeline, iam, EmailNotifier::new(sender, config))
    }

    pub fn with_notifier(
        codecommit: Arc<dyn CodeCommitService>,
        pipeline: Arc<dyn PipelineService>,
        iam: Arc<dyn IdentityService>,
        notifier: EmailNotifier,
    ) -> Self {
        Self {
            codecommit,
            pipeline,
            iam,
            notifier,
        }
    }

    /// Builds AWS SDK backed services from an already loaded SDK config
    ///
    /// A configuration error does not prevent building the context; it fails
    /// each email send instead.
    pub fn from_sdk_config(sdk_config: &SdkConfig, config: Result<NotifyConfig, String>) -> Self {
        let sender: Arc<dyn TemplatedEmailSender> =
            Arc::new(SesEmailSender::new(aws_sdk_ses::Client::new(sdk_config)));
        let notifier = match config {
            Ok(config) => EmailNotifier::new(sender, config),
            Err(reason) => EmailNotifier::unconfigured(sender, reason),
        };

        Self::with_notifier(
            Arc::new(AwsCodeCommitService::new(aws_sdk_codecommit::Client::new(
                sdk_config,
            ))),
            Arc::new(AwsPipelineService::new(aws_sdk_codepipeline::Client::new(
                sdk_config,
            ))),
            Arc::new(AwsIdentityService::new(aws_sdk_iam::Client::new(sdk_config))),
            notifier,
        )
    }
}

/// State loaded once per cold start
pub struct AppState {
    pub sdk_config: SdkConfig,
    /// Relay configuration, or the reason it is unusable
    pub config: Result<NotifyConfig, String>,
}

impl AppState {
    pub async fn load(config: Result<NotifyConfig, NotifyError>) -> Self {
        let config = config.map_err(|e| match e {
            NotifyError::Config(reason) => reason,
            other => other.to_string(),
        });

        Self {
            sdk_config: aws_config::load_from_env().await,
            config,
        }
    }

    /// Fresh set of service handles for one invocation
    pub fn context(&self) -> NotifyContext {
        NotifyContext::from_sdk_config(&self.sdk_config, self.config.clone())
    }
}
