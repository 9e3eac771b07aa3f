//! Configuration for the booking service

use std::time::Duration;

use hs_shared::config::{BookingConfig, NotificationConfig};

/// Configuration for the booking service
#[derive(Debug, Clone)]
pub struct BookingServiceConfig {
    /// OTP lifetime and rating link
    pub booking: BookingConfig,
    /// Seconds allowed for a single notification
    pub notification_timeout_secs: u64,
}

impl Default for BookingServiceConfig {
    fn default() -> Self {
        Self::from_settings(&BookingConfig::default(), &NotificationConfig::default())
    }
}

impl BookingServiceConfig {
    pub fn from_settings(booking: &BookingConfig, notification: &NotificationConfig) -> Self {
        Self {
            booking: booking.clone(),
            notification_timeout_secs: notification.timeout_secs,
        }
    }

    pub fn otp_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.booking.otp_ttl_minutes)
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_secs(self.notification_timeout_secs)
    }
}
