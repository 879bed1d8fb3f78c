/// Envelope published by the EventBridge rules and its classification
use crate::constants::{TYPE_CODEBUILD, TYPE_CODECOMMIT, TYPE_CODEPIPELINE};
use crate::error::NotifyError;
use serde::Serialize;
use serde_json::Value;

/// `{type, payload}` wrapper around a raw service event detail
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    pub payload: Value,
}

impl Envelope {
    /// Parses an SNS message body
    ///
    /// Only invalid JSON is an error. A body that is valid JSON but lacks a
    /// `type` yields an envelope that [`DevOpsEvent::classify`] will not route.
    pub fn parse(message: &str) -> Result<Self, NotifyError> {
        let value: Value = serde_json::from_str(message)
            .map_err(|e| NotifyError::Parse(format!("Invalid SNS message JSON: {}", e)))?;

        Ok(Self {
            event_type: value
                .get("type")
                .and_then(Value::as_str)
                .map(str::to_string),
            payload: value.get("payload").cloned().unwrap_or(Value::Null),
        })
    }

    pub fn new(event_type: impl Into<String>, payload: Value) -> Self {
        Self {
            event_type: Some(event_type.into()),
            payload,
        }
    }
}

/// Routed DevOps event, one variant per handler route
#[derive(Debug, Clone, PartialEq)]
pub enum DevOpsEvent {
    /// A branch or tag was created in a repository
    ReferenceCreated(Value),
    /// An approval rule on a pull request was created, overridden or updated
    ApprovalRuleChanged(Value),
    /// A pull request was created or its status changed
    PullRequestChanged(Value),
    /// Any other CodeCommit event
    OtherCodeCommit {
        event: Option<String>,
        payload: Value,
    },
    /// CodeBuild state change
    CodeBuild(Value),
    /// CodePipeline execution state change
    PipelineExecution(Value),
}

impl DevOpsEvent {
    /// Maps an envelope onto its route, `None` when no route matches
    pub fn classify(envelope: Envelope) -> Option<Self> {
        let Envelope {
            event_type,
            payload,
        } = envelope;

        match event_type.as_deref()? {
            TYPE_CODECOMMIT => {
                let event = payload
                    .get("event")
                    .and_then(Value::as_str)
                    .map(str::to_string);

                Some(match event.as_deref() {
                    Some("referenceCreated" | "referenceCreated ") => {
                        Self::ReferenceCreated(payload)
                    }
                    Some(
                        "pullRequestApprovalRuleCreated"
                        | "pullRequestApprovalRuleOverridden"
                        | "pullRequestApprovalRuleUpdated",
                    ) => Self::ApprovalRuleChanged(payload),
                    Some("pullRequestCreated" | "pullRequestStatusChanged") => {
                        Self::PullRequestChanged(payload)
                    }
                    _ => Self::OtherCodeCommit { event, payload },
                })
            }
            TYPE_CODEBUILD => Some(Self::CodeBuild(payload)),
            TYPE_CODEPIPELINE => Some(Self::PipelineExecution(payload)),
            _ => None,
        }
    }

    /// Route name used in log fields
    pub fn route(&self) -> &'static str {
        match self {
            Self::ReferenceCreated(_) => "codecommit.reference_created",
            Self::ApprovalRuleChanged(_) => "codecommit.approval_rule",
            Self::PullRequestChanged(_) => "codecommit.pull_request",
            Self::OtherCodeCommit { .. } => "codecommit.other",
            Self::CodeBuild(_) => "codebuild",
            Self::PipelineExecution(_) => "codepipeline",
        }
    }

    pub fn payload(&self) -> &Value {
        match self {
            Self::ReferenceCreated(payload)
            | Self::ApprovalRuleChanged(payload)
            | Self::PullRequestChanged(payload)
            | Self::OtherCodeCommit { payload, .. }
            | Self::CodeBuild(payload)
            | Self::PipelineExecution(payload) => payload,
        }
    }
}
