/// AWS service clients and notification services
pub mod codecommit;
pub mod codepipeline;
pub mod config;
pub mod iam;
pub mod ses;

// Re-export service traits
pub use codecommit::CodeCommitService;
pub use codepipeline::PipelineService;
pub use iam::IdentityService;
pub use ses::{EmailNotifier, TemplatedEmailSender};
