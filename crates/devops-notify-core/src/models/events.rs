/// AWS Lambda event types
use crate::constants::SNS_EVENT_SOURCE;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// SNS event delivered to the Lambda
///
/// Records are decoded one by one; an entry that does not fit the SNS record
/// shape becomes `None` without affecting its siblings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SnsEvent {
    #[serde(rename = "Records", default, deserialize_with = "records_lenient")]
    pub records: Vec<Option<SnsEventRecord>>,
}

fn records_lenient<'de, D>(deserializer: D) -> Result<Vec<Option<SnsEventRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record)
                .inspect_err(|e| debug!(index, error = %e, "Record is not an SNS record"))
                .ok()
        })
        .collect())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SnsEventRecord {
    #[serde(rename = "EventSource", default, skip_serializing_if = "Option::is_none")]
    pub event_source: Option<String>,
    #[serde(rename = "Sns", default, skip_serializing_if = "Option::is_none")]
    pub sns: Option<SnsMessage>,
}

impl SnsEventRecord {
    /// Returns the raw message body if this record came from SNS
    pub fn sns_message(&self) -> Option<&str> {
        if let Some(source) = self.event_source.as_deref()
            && source != SNS_EVENT_SOURCE
        {
            return None;
        }
        self.sns.as_ref().and_then(|sns| sns.message.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SnsMessage {
    #[serde(rename = "MessageId", default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(rename = "TopicArn", default, skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,
    #[serde(rename = "Subject", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "Message", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "Timestamp", default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(rename = "MessageAttributes", default, deserialize_with = "null_as_default")]
    pub message_attributes: HashMap<String, SnsMessageAttribute>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnsMessageAttribute {
    #[serde(rename = "Type")]
    pub data_type: String,
    #[serde(rename = "Value")]
    pub value: String,
}
