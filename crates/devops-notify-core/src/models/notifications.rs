/// Notification data derived from DevOps events
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Commit checked out by a pipeline `Source` action
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceCommit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    pub commit_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committer_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
}

/// Template parameters of the `PipelineFailed` email
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineFailureNotification {
    #[serde(flatten)]
    pub commit: SourceCommit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committer_name: Option<String>,
}

/// Data gathered while handling a pull request event, kept for logging
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestNotification {
    pub pull_request_id: String,
    pub approver_iam_user_names: Vec<String>,
    pub resolved_emails: Vec<Option<String>>,
}

/// A single templated email send
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatedEmail {
    pub template_name: String,
    pub template_arn: String,
    pub template_data: String,
    pub to: Vec<String>,
    pub from: String,
    pub reply_to: Vec<String>,
    pub tags: Vec<(String, String)>,
}

impl TemplatedEmail {
    /// Decodes the template data back into JSON, mostly useful for inspection
    pub fn params(&self) -> Value {
        serde_json::from_str(&self.template_data).unwrap_or(Value::Null)
    }
}

/// Committer and author details of a fetched commit
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommitDetails {
    pub author_name: Option<String>,
    pub committer_name: Option<String>,
    pub committer_email: Option<String>,
}
