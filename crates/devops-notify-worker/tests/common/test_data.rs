/// Test data builders for SNS events and AWS responses
use super::generate_message_id;
use devops_notify_core::models::CommitDetails;
use devops_notify_core::services::codepipeline::ActionExecution;
use serde_json::{Value, json};

/// SNS record wrapping an already serialized message body
pub fn sns_record(message: &str) -> Value {
    json!({
        "EventSource": "aws:sns",
        "EventVersion": "1.0",
        "EventSubscriptionArn": "arn:aws:sns:eu-west-1:123456789012:devops-events:sub",
        "Sns": {
            "Type": "Notification",
            "MessageId": generate_message_id(),
            "TopicArn": "arn:aws:sns:eu-west-1:123456789012:devops-events",
            "Subject": null,
            "Message": message,
            "Timestamp": "2025-11-01T12:00:00.000Z",
            "SignatureVersion": "1",
            "MessageAttributes": {}
        }
    })
}

/// SNS record carrying a `{type, payload}` envelope
pub fn envelope_record(event_type: &str, payload: Value) -> Value {
    sns_record(&json!({ "type": event_type, "payload": payload }).to_string())
}

/// Lambda invocation payload containing the given records
pub fn sns_event(records: Vec<Value>) -> Value {
    json!({ "Records": records })
}

pub fn pull_request_payload(event: &str, pull_request_id: &str) -> Value {
    json!({
        "callerUserArn": "arn:aws:iam::123456789012:user/alice",
        "destinationReference": "refs/heads/main",
        "event": event,
        "isMerged": "False",
        "notificationBody": "A pull request event occurred",
        "pullRequestId": pull_request_id,
        "pullRequestStatus": "Open",
        "repositoryNames": ["service"],
        "sourceReference": "refs/heads/feature",
        "title": "Add feature"
    })
}

pub fn pipeline_payload(state: &str) -> Value {
    json!({
        "pipeline": "service-deploy",
        "execution-id": "01234567-0123-0123-0123-012345678901",
        "state": state,
        "version": 3.0
    })
}

/// `approvalRuleContent` JSON listing the given pool members
pub fn approval_rule(members: &[&str]) -> String {
    json!({
        "Version": "2018-11-08",
        "DestinationReferences": ["refs/heads/main"],
        "Statements": [{
            "Type": "Approvers",
            "NumberOfApprovalsNeeded": 1,
            "ApprovalPoolMembers": members
        }]
    })
    .to_string()
}

/// `Source` action that checked out the given commit
pub fn source_action(commit_id: &str, repository_name: &str) -> ActionExecution {
    ActionExecution {
        action_name: Some("Source".to_string()),
        output_variables: [
            ("CommitId", commit_id),
            ("BranchName", "main"),
            ("CommitMessage", "Break the build"),
            ("CommitterDate", "2025-11-01T11:59:00Z"),
            ("RepositoryName", repository_name),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect(),
    }
}

/// `Source` action without output variables
pub fn source_action_without_commit() -> ActionExecution {
    ActionExecution {
        action_name: Some("Source".to_string()),
        output_variables: Default::default(),
    }
}

pub fn build_action() -> ActionExecution {
    ActionExecution {
        action_name: Some("Build".to_string()),
        output_variables: Default::default(),
    }
}

pub fn commit_details(committer_email: Option<&str>) -> CommitDetails {
    CommitDetails {
        author_name: Some("Alice Author".to_string()),
        committer_name: Some("Carl Committer".to_string()),
        committer_email: committer_email.map(str::to_string),
    }
}
