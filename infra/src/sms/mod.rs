//! SMS Service Module
//!
//! - **SMS Service Trait**: common interface for SMS providers
//! - **Mock Implementation**: logs messages for development
//! - **Twilio Support**: production SMS via the Twilio API
//! - **Notification bridge**: exposes any provider as the core `NotificationSender`

use std::sync::Arc;

use hs_shared::config::{NotificationConfig, SmsProvider};

use crate::InfrastructureError;

pub mod mock_sms;
pub mod notification_sender;
pub mod sms_service;

// Twilio SMS service (feature-gated)
#[cfg(feature = "twilio-sms")]
pub mod twilio;

#[cfg(test)]
mod tests;

pub use mock_sms::MockSmsService;
pub use notification_sender::SmsNotificationSender;
pub use sms_service::SmsService;

#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioSmsConfig, TwilioSmsService};

/// Build the SMS provider selected in configuration
pub fn create_sms_service(config: &NotificationConfig) -> Result<Arc<dyn SmsService>, InfrastructureError> {
    match config.provider {
        SmsProvider::Mock => {
            tracing::warn!("Using mock SMS service; messages are logged, not delivered");
            Ok(Arc::new(MockSmsService::new()))
        }
        #[cfg(feature = "twilio-sms")]
        SmsProvider::Twilio => {
            let twilio = config.twilio.as_ref().ok_or_else(|| {
                InfrastructureError::Config("notification.twilio must be set for the twilio provider".to_string())
            })?;
            let service = TwilioSmsService::new(TwilioSmsConfig::from_settings(twilio, config.max_retries))?;
            Ok(Arc::new(service))
        }
        #[cfg(not(feature = "twilio-sms"))]
        SmsProvider::Twilio => Err(InfrastructureError::Config(
            "Twilio support was not compiled in (enable the twilio-sms feature)".to_string(),
        )),
    }
}
