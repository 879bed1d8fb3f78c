/// DevOps Notify Worker - SNS to SES notification Lambda
///
/// This module contains the dispatcher and event handlers that turn
/// CodeCommit, CodeBuild and CodePipeline events into templated emails.
pub mod context;
pub mod dispatcher;
pub mod handlers;

// Re-export commonly used items
pub use context::{AppState, NotifyContext};
pub use dispatcher::{DispatchReport, dispatch};
pub use handlers::handler;
pub use devops_notify_core::*;
