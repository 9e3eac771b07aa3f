//! Trait for outbound message delivery

use async_trait::async_trait;

/// Sends a text message to a phone number
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Deliver `body` to `to`, returning the provider's message id
    async fn send(&self, to: &str, body: &str) -> Result<String, String>;

    /// Whether `to` looks like a number this sender can deliver to
    fn is_deliverable(&self, to: &str) -> bool;
}
