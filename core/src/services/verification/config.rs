//! Configuration for the verification service

use std::time::Duration;

use hs_shared::config::{NotificationConfig, VerificationConfig};

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Code lifetime in seconds
    pub code_ttl_seconds: u64,
    /// Minimum gap between two codes for the same phone
    pub resend_cooldown_seconds: u64,
    /// Wrong attempts tolerated before a code is discarded
    pub max_attempts: u32,
    /// Upper bound on one SMS delivery
    pub notification_timeout_secs: u64,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self::from_settings(&VerificationConfig::default(), &NotificationConfig::default())
    }
}

impl VerificationServiceConfig {
    pub fn from_settings(verification: &VerificationConfig, notification: &NotificationConfig) -> Self {
        Self {
            code_ttl_seconds: verification.code_ttl_seconds,
            resend_cooldown_seconds: verification.resend_cooldown_seconds,
            max_attempts: verification.max_attempts,
            notification_timeout_secs: notification.timeout_secs,
        }
    }

    /// Code lifetime rounded up to whole minutes, as shown in the SMS
    pub fn code_ttl_minutes(&self) -> u64 {
        self.code_ttl_seconds.div_ceil(60)
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_secs(self.notification_timeout_secs)
    }
}
