mod mock_sms_tests;
mod notification_sender_tests;
