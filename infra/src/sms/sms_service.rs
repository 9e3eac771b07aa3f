//! SMS Service Interface

use async_trait::async_trait;

use hs_shared::utils::phone::is_valid_e164;

use crate::InfrastructureError;

/// An SMS provider
#[async_trait]
pub trait SmsService: Send + Sync {
    /// Send a message; returns the provider's message ID
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError>;

    fn provider_name(&self) -> &str;

    /// Whether the provider will accept this recipient
    fn is_valid_phone_number(&self, phone_number: &str) -> bool {
        is_valid_e164(phone_number)
    }
}
