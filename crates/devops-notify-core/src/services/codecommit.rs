/// CodeCommit service - pull request approvers and commit lookups
use crate::constants::{PREFIX_APPROVERS, STATEMENT_TYPE_APPROVERS};
use crate::error::NotifyError;
use crate::models::CommitDetails;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeCommitService: Send + Sync {
    /// Raw `approvalRuleContent` JSON of every approval rule on a pull request
    async fn get_approval_rule_contents(
        &self,
        pull_request_id: &str,
    ) -> Result<Vec<String>, NotifyError>;

    async fn get_commit(
        &self,
        repository_name: &str,
        commit_id: &str,
    ) -> Result<CommitDetails, NotifyError>;
}

pub struct AwsCodeCommitService {
    client: aws_sdk_codecommit::Client,
}

impl AwsCodeCommitService {
    pub fn new(client: aws_sdk_codecommit::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CodeCommitService for AwsCodeCommitService {
    async fn get_approval_rule_contents(
        &self,
        pull_request_id: &str,
    ) -> Result<Vec<String>, NotifyError> {
        let response = self
            .client
            .get_pull_request()
            .pull_request_id(pull_request_id)
            .send()
            .await
            .map_err(|e| {
                NotifyError::CodeCommit(format!(
                    "GetPullRequest failed for pull request {}: {}",
                    pull_request_id, e
                ))
            })?;

        let contents: Vec<String> = response
            .pull_request()
            .map(|pr| {
                pr.approval_rules()
                    .iter()
                    .filter_map(|rule| rule.approval_rule_content().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        debug!(
            pull_request_id = %pull_request_id,
            rules = contents.len(),
            "Pull request loaded"
        );

        Ok(contents)
    }

    async fn get_commit(
        &self,
        repository_name: &str,
        commit_id: &str,
    ) -> Result<CommitDetails, NotifyError> {
        let response = self
            .client
            .get_commit()
            .repository_name(repository_name)
            .commit_id(commit_id)
            .send()
            .await
            .map_err(|e| {
                NotifyError::CodeCommit(format!(
                    "GetCommit failed for {}@{}: {}",
                    repository_name, commit_id, e
                ))
            })?;

        let commit = response.commit();
        let author = commit.and_then(|c| c.author());
        let committer = commit.and_then(|c| c.committer());

        Ok(CommitDetails {
            author_name: author.and_then(|u| u.name()).map(str::to_string),
            committer_name: committer.and_then(|u| u.name()).map(str::to_string),
            committer_email: committer.and_then(|u| u.email()).map(str::to_string),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ApprovalRuleContent {
    #[serde(rename = "Statements", default)]
    statements: Vec<Option<ApprovalRuleStatement>>,
}

#[derive(Debug, Deserialize)]
struct ApprovalRuleStatement {
    #[serde(rename = "Type", default)]
    statement_type: Option<String>,
    #[serde(rename = "ApprovalPoolMembers", default)]
    approval_pool_members: Vec<Option<String>>,
}

/// Extracts IAM user names from one approval rule's content
///
/// Members are kept in order and not deduplicated; only members carrying
/// the `CodeCommitApprovers:` prefix are returned, with the prefix removed.
pub fn extract_approvers(rule_content: &str) -> Result<Vec<String>, NotifyError> {
    let content: ApprovalRuleContent = serde_json::from_str(rule_content)
        .map_err(|e| NotifyError::Parse(format!("Invalid approval rule content: {}", e)))?;

    let approvers = content
        .statements
        .into_iter()
        .flatten()
        .filter(|statement| {
            statement.statement_type.as_deref() == Some(STATEMENT_TYPE_APPROVERS)
        })
        .flat_map(|statement| statement.approval_pool_members)
        .flatten()
        .filter_map(|member| {
            member
                .find(PREFIX_APPROVERS)
                .map(|pos| member[pos + PREFIX_APPROVERS.len()..].to_string())
        })
        .collect();

    Ok(approvers)
}

/// IAM user names of everyone allowed to approve a pull request
pub async fn get_pull_request_approvers(
    service: &dyn CodeCommitService,
    pull_request_id: &str,
) -> Result<Vec<String>, NotifyError> {
    let contents = service.get_approval_rule_contents(pull_request_id).await?;

    let mut user_names = Vec::new();
    for content in &contents {
        user_names.extend(extract_approvers(content)?);
    }

    debug!(
        pull_request_id = %pull_request_id,
        approvers = ?user_names,
        "Resolved pull request approvers"
    );

    Ok(user_names)
}
