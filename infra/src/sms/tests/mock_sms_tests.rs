use crate::sms::{MockSmsService, SmsService};

#[tokio::test]
async fn test_send_counts_messages() {
    let sms = MockSmsService::new();

    let id = sms.send_sms("+14155550101", "hello").await.unwrap();
    assert!(id.starts_with("mock_"));
    sms.send_sms("+14155550101", "again").await.unwrap();
    assert_eq!(sms.get_message_count(), 2);
}

#[tokio::test]
async fn test_invalid_number_rejected() {
    let sms = MockSmsService::new();
    assert!(sms.send_sms("0415550101", "hello").await.is_err());
    assert_eq!(sms.get_message_count(), 0);
}

#[tokio::test]
async fn test_simulated_failure() {
    let sms = MockSmsService::new();
    sms.set_simulate_failure(true);
    assert!(sms.send_sms("+14155550101", "hello").await.is_err());

    sms.set_simulate_failure(false);
    assert!(sms.send_sms("+14155550101", "hello").await.is_ok());
}
