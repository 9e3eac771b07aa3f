use std::sync::Arc;

use hs_core::services::notification::NotificationSender;
use hs_shared::config::{NotificationConfig, SmsProvider};

use crate::sms::{create_sms_service, MockSmsService, SmsNotificationSender, SmsService};

#[tokio::test]
async fn test_bridge_delivers_through_provider() {
    let sms = Arc::new(MockSmsService::new());
    let sender = SmsNotificationSender::new(sms.clone());

    assert!(sender.is_deliverable("+14155550101"));
    assert!(!sender.is_deliverable("not a phone"));

    let id = sender.send("+14155550101", "Your OTP is 123456").await.unwrap();
    assert!(id.starts_with("mock_"));
    assert_eq!(sms.get_message_count(), 1);
}

#[tokio::test]
async fn test_bridge_reports_failure_as_string() {
    let sms = Arc::new(MockSmsService::new());
    sms.set_simulate_failure(true);
    let sender = SmsNotificationSender::new(sms);

    let err = sender.send("+14155550101", "hello").await.unwrap_err();
    assert!(err.contains("Simulated"));
}

#[tokio::test]
async fn test_bridge_over_trait_object() {
    let sms = create_sms_service(&NotificationConfig::default()).unwrap();
    assert_eq!(sms.provider_name(), "Mock");

    let sender: SmsNotificationSender<dyn SmsService> = SmsNotificationSender::new(sms);
    assert_eq!(sender.provider_name(), "Mock");
    assert!(sender.send("+14155550101", "hello").await.is_ok());
}

#[test]
fn test_twilio_requires_credentials() {
    let config = NotificationConfig {
        provider: SmsProvider::Twilio,
        twilio: None,
        ..NotificationConfig::default()
    };
    assert!(create_sms_service(&config).is_err());
}
