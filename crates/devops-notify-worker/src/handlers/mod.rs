/// Lambda event handlers
pub mod pipeline;
pub mod pull_request;

use crate::context::{AppState, NotifyContext};
use crate::dispatcher::{DispatchReport, dispatch};
use devops_notify_core::error::NotifyError;
use devops_notify_core::models::SnsEvent;
use lambda_runtime::{Error, LambdaEvent as RuntimeEvent};
use serde_json::Value;
use tracing::{debug, error, info};

/// Result of one routed record
#[derive(Debug)]
pub enum HandlerOutcome {
    /// The route had nothing to do for this event
    Skipped,
    /// Pull request notification, with the SES message id when an email went out
    PullRequest { message_id: Option<String> },
    /// Per-commit results of a failed pipeline execution
    PipelineFailure { results: Vec<CommitOutcome> },
}

/// Result of notifying the committer of one source commit
#[derive(Debug)]
pub struct CommitOutcome {
    pub commit_id: String,
    /// `Ok(true)` when an email was sent, `Ok(false)` without a committer email
    pub result: Result<bool, NotifyError>,
}

/// Main Lambda handler
///
/// Always reports success to the runtime; failed records are logged and
/// never redelivered.
pub async fn handler(event: RuntimeEvent<Value>, state: &AppState) -> Result<Value, Error> {
    info!(request_id = %event.context.request_id, "Received Lambda event");

    let ctx = state.context();
    Ok(handle_invocation(&ctx, event.payload).await)
}

/// Processes one invocation payload and returns the `"done"` acknowledgement
pub async fn handle_invocation(ctx: &NotifyContext, payload: Value) -> Value {
    process_event(ctx, payload).await;
    Value::String("done".to_string())
}

/// Decodes the SNS event and dispatches its records
///
/// Returns `None` when the payload is not an SNS event at all.
pub async fn process_event(ctx: &NotifyContext, payload: Value) -> Option<DispatchReport> {
    debug!(event = %payload, "Starting with event");

    let sns_event: SnsEvent = match serde_json::from_value(payload) {
        Ok(event) => event,
        Err(e) => {
            error!(error = %e, "Error processing event: not an SNS event");
            return None;
        }
    };

    let report = dispatch(ctx, &sns_event).await;
    info!(
        records = sns_event.records.len(),
        succeeded = report.succeeded(),
        failed = report.failed(),
        skipped = report.skipped,
        "Processing done"
    );

    Some(report)
}
