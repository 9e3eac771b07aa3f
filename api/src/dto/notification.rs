use serde::{Deserialize, Serialize};

use hs_core::services::NotificationOutcome;

/// What happened to the SMS that followed a state change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    /// `sent`, `contact_missing` or `failed`
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&NotificationOutcome> for NotificationDto {
    fn from(outcome: &NotificationOutcome) -> Self {
        match outcome {
            NotificationOutcome::Sent { message_id } => Self {
                status: "sent".to_string(),
                message_id: Some(message_id.clone()),
                reason: None,
            },
            NotificationOutcome::ContactMissing => Self {
                status: "contact_missing".to_string(),
                message_id: None,
                reason: None,
            },
            NotificationOutcome::Failed { reason } => Self {
                status: "failed".to_string(),
                message_id: None,
                reason: Some(reason.clone()),
            },
        }
    }
}
