//! Timeout-bounded dispatch of notifications

use std::sync::Arc;
use std::time::Duration;

use hs_shared::utils::phone::mask_phone_number;

use super::traits::NotificationSender;
use super::types::NotificationOutcome;

/// Wraps a sender with a per-message timeout and outcome logging
pub struct Notifier<N: NotificationSender> {
    sender: Arc<N>,
    timeout: Duration,
}

impl<N: NotificationSender> Notifier<N> {
    pub fn new(sender: Arc<N>, timeout: Duration) -> Self {
        Self { sender, timeout }
    }

    /// Underlying sender
    pub fn sender(&self) -> &Arc<N> {
        &self.sender
    }

    /// Send `body` to `recipient`; never returns an error
    pub async fn notify(&self, recipient: Option<&str>, body: &str, event: &str) -> NotificationOutcome {
        let Some(to) = recipient else {
            tracing::warn!(event = event, "Notification skipped: recipient has no phone number");
            return NotificationOutcome::ContactMissing;
        };
        let masked = mask_phone_number(to);

        if !self.sender.is_deliverable(to) {
            tracing::warn!(phone = %masked, event = event, "Notification skipped: undeliverable phone number");
            return NotificationOutcome::ContactMissing;
        }

        match tokio::time::timeout(self.timeout, self.sender.send(to, body)).await {
            Ok(Ok(message_id)) => {
                tracing::info!(
                    phone = %masked,
                    event = event,
                    message_id = %message_id,
                    "Notification sent"
                );
                NotificationOutcome::Sent { message_id }
            }
            Ok(Err(reason)) => {
                tracing::error!(phone = %masked, event = event, error = %reason, "Notification failed");
                NotificationOutcome::Failed { reason }
            }
            Err(_) => {
                tracing::error!(
                    phone = %masked,
                    event = event,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Notification timed out"
                );
                NotificationOutcome::Failed {
                    reason: format!("timed out after {}ms", self.timeout.as_millis()),
                }
            }
        }
    }
}
