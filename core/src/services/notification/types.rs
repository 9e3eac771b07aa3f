//! Result of a notification attempt

use serde::{Deserialize, Serialize};

/// What happened to a notification tied to a persisted transition
///
/// A failed or skipped notification never rolls the transition back; the
/// outcome is reported to the caller instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NotificationOutcome {
    /// Accepted by the provider
    Sent { message_id: String },
    /// Recipient has no usable phone number on file
    ContactMissing,
    /// Provider error or timeout
    Failed { reason: String },
}

impl NotificationOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, NotificationOutcome::Sent { .. })
    }
}
