/// Pipeline failure handler - notifies the committers behind a failed execution
use crate::context::NotifyContext;
use crate::handlers::{CommitOutcome, HandlerOutcome};
use devops_notify_core::constants::{PIPELINE_STATE_FAILED, TEMPLATE_PIPELINE_FAILED};
use devops_notify_core::error::NotifyError;
use devops_notify_core::models::{PipelineFailureNotification, SourceCommit};
use devops_notify_core::services::codepipeline::get_commit_info_for_pipeline;
use devops_notify_core::utils::logging::redact_email;
use futures::future::join_all;
use serde_json::Value;
use tracing::{debug, error, info};

fn required_str<'a>(payload: &'a Value, field: &str) -> Result<&'a str, NotifyError> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| NotifyError::Validation(format!("Pipeline event has no '{}'", field)))
}

#[tracing::instrument(name = "handlers.pipeline", skip(ctx, payload))]
pub async fn handle(ctx: &NotifyContext, payload: &Value) -> Result<HandlerOutcome, NotifyError> {
    let state = payload.get("state").and_then(Value::as_str);
    if state != Some(PIPELINE_STATE_FAILED) {
        debug!(state = ?state, "Pipeline state is not FAILED, nothing to do");
        return Ok(HandlerOutcome::Skipped);
    }

    let pipeline = required_str(payload, "pipeline")?;
    let execution_id = required_str(payload, "execution-id")?;
    debug!(pipeline = %pipeline, execution_id = %execution_id, "Processing failed pipeline");

    let commits =
        get_commit_info_for_pipeline(ctx.pipeline.as_ref(), pipeline, execution_id).await?;
    if commits.is_empty() {
        debug!(pipeline = %pipeline, "No source commits found");
        return Ok(HandlerOutcome::Skipped);
    }

    let results = join_all(
        commits
            .into_iter()
            .map(|commit| notify_committer(ctx, commit)),
    )
    .await;

    for outcome in &results {
        match &outcome.result {
            Ok(email_sent) => info!(
                pipeline = %pipeline,
                commit_id = %outcome.commit_id,
                email_sent = email_sent,
                "Processing of pipeline event done"
            ),
            Err(e) => error!(
                pipeline = %pipeline,
                commit_id = %outcome.commit_id,
                error_type = e.kind(),
                error = %e,
                "Error processing pipeline event"
            ),
        }
    }

    Ok(HandlerOutcome::PipelineFailure { results })
}

/// Emails the committer of one source commit
async fn notify_committer(ctx: &NotifyContext, commit: SourceCommit) -> CommitOutcome {
    let commit_id = commit.commit_id.clone();
    let result = send_failure_email(ctx, commit).await;
    CommitOutcome { commit_id, result }
}

async fn send_failure_email(
    ctx: &NotifyContext,
    commit: SourceCommit,
) -> Result<bool, NotifyError> {
    let repository_name = commit.repository_name.as_deref().ok_or_else(|| {
        NotifyError::Validation(format!(
            "Source commit {} has no repository name",
            commit.commit_id
        ))
    })?;

    let details = ctx
        .codecommit
        .get_commit(repository_name, &commit.commit_id)
        .await?;
    debug!(commit = ?details, "Got commit");

    let Some(email) = details.committer_email.filter(|email| !email.is_empty()) else {
        debug!(commit_id = %commit.commit_id, "Commit has no committer email");
        return Ok(false);
    };
    debug!(to = %redact_email(&email), "Notifying committer");

    let notification = PipelineFailureNotification {
        commit,
        author_name: details.author_name,
        committer_name: details.committer_name,
    };

    ctx.notifier
        .send_emails(TEMPLATE_PIPELINE_FAILED, &[Some(email)], &notification)
        .await?;

    Ok(true)
}
