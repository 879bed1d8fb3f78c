/// Pull request handler - notifies the approvers of a pull request
use crate::context::NotifyContext;
use crate::handlers::HandlerOutcome;
use devops_notify_core::constants::TEMPLATE_PULL_REQUEST;
use devops_notify_core::error::NotifyError;
use devops_notify_core::models::PullRequestNotification;
use devops_notify_core::services::codecommit::get_pull_request_approvers;
use devops_notify_core::services::iam::get_user_emails;
use serde_json::Value;
use tracing::{debug, error};

/// `pullRequestId` of the payload; numeric ids are accepted as well
pub fn pull_request_id(payload: &Value) -> Option<String> {
    match payload.get("pullRequestId")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

#[tracing::instrument(name = "handlers.pull_request", skip(ctx, payload))]
pub async fn handle(ctx: &NotifyContext, payload: &Value) -> Result<HandlerOutcome, NotifyError> {
    let Some(pull_request_id) = pull_request_id(payload) else {
        debug!("Payload has no pullRequestId, nothing to do");
        return Ok(HandlerOutcome::Skipped);
    };

    let approvers = get_pull_request_approvers(ctx.codecommit.as_ref(), &pull_request_id).await?;
    let emails = get_user_emails(ctx.iam.as_ref(), &approvers).await;

    let notification = PullRequestNotification {
        pull_request_id,
        approver_iam_user_names: approvers,
        resolved_emails: emails,
    };
    debug!(
        pull_request_id = %notification.pull_request_id,
        approvers = ?notification.approver_iam_user_names,
        resolved = notification.resolved_emails.iter().flatten().count(),
        "Prepared pull request notification"
    );

    let message_id = ctx
        .notifier
        .send_emails(TEMPLATE_PULL_REQUEST, &notification.resolved_emails, payload)
        .await
        .inspect_err(|e| {
            error!(
                pull_request_id = %notification.pull_request_id,
                error = %e,
                "Error sending emails"
            )
        })?;

    Ok(HandlerOutcome::PullRequest { message_id })
}
