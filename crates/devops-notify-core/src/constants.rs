/// Application constants
///
/// This module contains all hardcoded values used throughout the application.
/// Constants are organized by category for easy maintenance.
// ============================================================================
// Envelope Types
// ============================================================================
/// Envelope `type` published by the CodeCommit EventBridge rule
pub const TYPE_CODECOMMIT: &str = "codecommit";

/// Envelope `type` published by the CodeBuild EventBridge rule
pub const TYPE_CODEBUILD: &str = "codebuild";

/// Envelope `type` published by the CodePipeline EventBridge rule
pub const TYPE_CODEPIPELINE: &str = "codepipeline";

/// Expected `EventSource` of records delivered by SNS
pub const SNS_EVENT_SOURCE: &str = "aws:sns";

// ============================================================================
// CodeCommit
// ============================================================================

/// Prefix of approval pool members that refer to IAM users
pub const PREFIX_APPROVERS: &str = "CodeCommitApprovers:";

/// Approval rule statement type that lists approver pool members
pub const STATEMENT_TYPE_APPROVERS: &str = "Approvers";

// ============================================================================
// CodePipeline
// ============================================================================

/// Pipeline execution state that triggers failure notifications
pub const PIPELINE_STATE_FAILED: &str = "FAILED";

/// Name of the pipeline action that checks out the source revision
pub const SOURCE_ACTION_NAME: &str = "Source";

/// Output variable names exposed by CodeCommit source actions
pub const VAR_COMMIT_ID: &str = "CommitId";
pub const VAR_BRANCH_NAME: &str = "BranchName";
pub const VAR_COMMIT_MESSAGE: &str = "CommitMessage";
pub const VAR_COMMITTER_DATE: &str = "CommitterDate";
pub const VAR_REPOSITORY_NAME: &str = "RepositoryName";

// ============================================================================
// IAM
// ============================================================================

/// IAM user tag holding the user's notification address
pub const EMAIL_TAG_KEY: &str = "email";

// ============================================================================
// SES
// ============================================================================

/// Template used for pull request notifications
pub const TEMPLATE_PULL_REQUEST: &str = "PullRequest";

/// Template used for failed pipeline notifications
pub const TEMPLATE_PIPELINE_FAILED: &str = "PipelineFailed";

/// Message tag attached to every notification
pub const EMAIL_TAG_NAME: &str = "TYPE";
pub const EMAIL_TAG_VALUE: &str = "DEVOPS";

// ============================================================================
// Environment Variables
// ============================================================================

pub const ENV_TEMPLATE_ARN_PREFIX: &str = "TEMPLATE_ARN_PREFIX";
pub const ENV_EMAIL_FROM: &str = "EMAIL_FROM";
pub const ENV_DEBUG: &str = "DEBUG";
pub const ENV_INFO: &str = "INFO";
