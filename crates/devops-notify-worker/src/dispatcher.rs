/// Routes SNS records to their handlers
use crate::context::NotifyContext;
use crate::handlers::{HandlerOutcome, pipeline, pull_request};
use devops_notify_core::error::NotifyError;
use devops_notify_core::models::{DevOpsEvent, Envelope, SnsEvent, SnsEventRecord};
use futures::future::join_all;
use tracing::{debug, error, info};

/// Settled result of one dispatched record
#[derive(Debug)]
pub struct RecordOutcome {
    /// Position of the record in the SNS event
    pub index: usize,
    /// Route taken, `None` when the message could not be parsed
    pub route: Option<&'static str>,
    pub result: Result<HandlerOutcome, NotifyError>,
}

/// Outcomes of every routed record of one invocation
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub outcomes: Vec<RecordOutcome>,
    /// Records that were malformed, not SNS messages or matched no route
    pub skipped: usize,
}

impl DispatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }
}

/// Dispatches all records concurrently and waits for every one to settle
///
/// Failures are logged and collected, never propagated.
pub async fn dispatch(ctx: &NotifyContext, event: &SnsEvent) -> DispatchReport {
    let settled = join_all(
        event
            .records
            .iter()
            .enumerate()
            .map(|(index, record)| process_record(ctx, index, record.as_ref())),
    )
    .await;

    let mut report = DispatchReport::default();
    for outcome in settled {
        let Some(outcome) = outcome else {
            report.skipped += 1;
            continue;
        };

        match &outcome.result {
            Ok(result) => info!(
                index = outcome.index,
                route = outcome.route.unwrap_or("none"),
                outcome = ?result,
                "Processing done"
            ),
            Err(e) => error!(
                index = outcome.index,
                route = outcome.route.unwrap_or("none"),
                error_type = e.kind(),
                error = %e,
                "Error processing event"
            ),
        }
        report.outcomes.push(outcome);
    }

    report
}

/// Parses, classifies and handles one record, `None` when it is skipped
#[tracing::instrument(name = "dispatcher.process_record", skip(ctx, record))]
async fn process_record(
    ctx: &NotifyContext,
    index: usize,
    record: Option<&SnsEventRecord>,
) -> Option<RecordOutcome> {
    let Some(record) = record else {
        debug!("Record does not match the SNS record shape, skipping");
        return None;
    };

    let Some(message) = record.sns_message() else {
        debug!("Record carries no SNS message, skipping");
        return None;
    };

    let envelope = match Envelope::parse(message) {
        Ok(envelope) => envelope,
        Err(e) => {
            return Some(RecordOutcome {
                index,
                route: None,
                result: Err(e),
            });
        }
    };

    let event_type = envelope.event_type.clone();
    let Some(event) = DevOpsEvent::classify(envelope) else {
        debug!(event_type = ?event_type, "Not processing, no route for message");
        return None;
    };

    let route = event.route();
    debug!(route = route, payload = %event.payload(), "Processing event");

    Some(RecordOutcome {
        index,
        route: Some(route),
        result: route_event(ctx, &event).await,
    })
}

async fn route_event(
    ctx: &NotifyContext,
    event: &DevOpsEvent,
) -> Result<HandlerOutcome, NotifyError> {
    match event {
        // commits need no notification for now
        DevOpsEvent::ReferenceCreated(_) => Ok(HandlerOutcome::Skipped),
        DevOpsEvent::ApprovalRuleChanged(payload) | DevOpsEvent::PullRequestChanged(payload) => {
            pull_request::handle(ctx, payload).await
        }
        DevOpsEvent::OtherCodeCommit { event, .. } => {
            debug!(event = ?event, "CodeCommit event not implemented");
            Ok(HandlerOutcome::Skipped)
        }
        DevOpsEvent::CodeBuild(_) => {
            debug!("CodeBuild events not implemented");
            Ok(HandlerOutcome::Skipped)
        }
        DevOpsEvent::PipelineExecution(payload) => pipeline::handle(ctx, payload).await,
    }
}
