/// CodePipeline service - resolves the commits behind a pipeline execution
use crate::constants::{
    SOURCE_ACTION_NAME, VAR_BRANCH_NAME, VAR_COMMIT_ID, VAR_COMMIT_MESSAGE, VAR_COMMITTER_DATE,
    VAR_REPOSITORY_NAME,
};
use crate::error::NotifyError;
use crate::models::SourceCommit;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

/// One action execution of a pipeline run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActionExecution {
    pub action_name: Option<String>,
    pub output_variables: HashMap<String, String>,
}

impl ActionExecution {
    /// Commit descriptor of a source action, `None` without a `CommitId` output
    pub fn source_commit(&self) -> Option<SourceCommit> {
        let var = |name: &str| self.output_variables.get(name).cloned();

        Some(SourceCommit {
            commit_id: var(VAR_COMMIT_ID).filter(|id| !id.is_empty())?,
            branch_name: var(VAR_BRANCH_NAME),
            commit_message: var(VAR_COMMIT_MESSAGE),
            committer_date: var(VAR_COMMITTER_DATE),
            repository_name: var(VAR_REPOSITORY_NAME),
        })
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PipelineService: Send + Sync {
    async fn list_action_executions(
        &self,
        pipeline_name: &str,
        pipeline_execution_id: &str,
    ) -> Result<Vec<ActionExecution>, NotifyError>;
}

pub struct AwsPipelineService {
    client: aws_sdk_codepipeline::Client,
}

impl AwsPipelineService {
    pub fn new(client: aws_sdk_codepipeline::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PipelineService for AwsPipelineService {
    async fn list_action_executions(
        &self,
        pipeline_name: &str,
        pipeline_execution_id: &str,
    ) -> Result<Vec<ActionExecution>, NotifyError> {
        use aws_sdk_codepipeline::types::ActionExecutionFilter;

        let filter = ActionExecutionFilter::builder()
            .pipeline_execution_id(pipeline_execution_id)
            .build();

        // Single page only; the default page size covers every action of one execution.
        let response = self
            .client
            .list_action_executions()
            .pipeline_name(pipeline_name)
            .filter(filter)
            .send()
            .await
            .map_err(|e| {
                NotifyError::CodePipeline(format!(
                    "ListActionExecutions failed for {} ({}): {}",
                    pipeline_name, pipeline_execution_id, e
                ))
            })?;

        let actions = response
            .action_execution_details()
            .iter()
            .map(|detail| ActionExecution {
                action_name: detail.action_name().map(str::to_string),
                output_variables: detail
                    .output()
                    .and_then(|output| output.output_variables())
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect();

        Ok(actions)
    }
}

/// Commits checked out by the `Source` actions of a pipeline execution
///
/// Source actions without a `CommitId` output variable are dropped.
pub async fn get_commit_info_for_pipeline(
    service: &dyn PipelineService,
    pipeline_name: &str,
    pipeline_execution_id: &str,
) -> Result<Vec<SourceCommit>, NotifyError> {
    let actions = service
        .list_action_executions(pipeline_name, pipeline_execution_id)
        .await?;

    let commits: Vec<SourceCommit> = actions
        .iter()
        .filter(|action| action.action_name.as_deref() == Some(SOURCE_ACTION_NAME))
        .filter_map(|action| {
            let commit = action.source_commit();
            if commit.is_none() {
                debug!(
                    pipeline = %pipeline_name,
                    execution_id = %pipeline_execution_id,
                    "Source action has no CommitId output, skipping"
                );
            }
            commit
        })
        .collect();

    debug!(
        pipeline = %pipeline_name,
        execution_id = %pipeline_execution_id,
        commits = ?commits,
        "Resolved source commits"
    );

    Ok(commits)
}
