//! Recording notification sender

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

use hs_shared::utils::phone::is_valid_e164;

use super::traits::NotificationSender;

/// A message captured by [`MockNotificationSender`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub to: String,
    pub body: String,
    pub message_id: String,
}

/// Records every message instead of delivering it
pub struct MockNotificationSender {
    sent: RwLock<Vec<SentMessage>>,
    counter: AtomicU64,
    simulate_failure: AtomicBool,
    delay: Option<Duration>,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self {
            sent: RwLock::new(Vec::new()),
            counter: AtomicU64::new(0),
            simulate_failure: AtomicBool::new(false),
            delay: None,
        }
    }

    /// Sender that sleeps before answering, to exercise timeouts
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new()
        }
    }

    /// Make subsequent sends fail
    pub fn set_failure(&self, fail: bool) {
        self.simulate_failure.store(fail, Ordering::SeqCst);
    }

    /// Everything delivered so far
    pub async fn sent_messages(&self) -> Vec<SentMessage> {
        self.sent.read().await.clone()
    }

    /// Most recent message delivered to `to`
    pub async fn last_message_to(&self, to: &str) -> Option<SentMessage> {
        self.sent
            .read()
            .await
            .iter()
            .rev()
            .find(|m| m.to == to)
            .cloned()
    }
}

impl Default for MockNotificationSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send(&self, to: &str, body: &str) -> Result<String, String> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.simulate_failure.load(Ordering::SeqCst) {
            return Err("simulated provider failure".to_string());
        }

        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let message_id = format!("mock-{}", n);
        self.sent.write().await.push(SentMessage {
            to: to.to_string(),
            body: body.to_string(),
            message_id: message_id.clone(),
        });
        Ok(message_id)
    }

    fn is_deliverable(&self, to: &str) -> bool {
        is_valid_e164(to)
    }
}
