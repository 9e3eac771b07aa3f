//! Bridge from an SMS provider to the core notification seam

use async_trait::async_trait;
use std::sync::Arc;

use hs_core::services::notification::NotificationSender;

use super::sms_service::SmsService;

/// Exposes an [`SmsService`] as a [`NotificationSender`]
pub struct SmsNotificationSender<S: SmsService + ?Sized> {
    sms: Arc<S>,
}

impl<S: SmsService + ?Sized> SmsNotificationSender<S> {
    pub fn new(sms: Arc<S>) -> Self {
        Self { sms }
    }

    pub fn provider_name(&self) -> &str {
        self.sms.provider_name()
    }
}

#[async_trait]
impl<S: SmsService + ?Sized> NotificationSender for SmsNotificationSender<S> {
    async fn send(&self, to: &str, body: &str) -> Result<String, String> {
        self.sms.send_sms(to, body).await.map_err(|e| e.to_string())
    }

    fn is_deliverable(&self, to: &str) -> bool {
        self.sms.is_valid_phone_number(to)
    }
}
