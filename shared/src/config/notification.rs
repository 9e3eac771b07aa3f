//! Outbound SMS configuration

use serde::{Deserialize, Serialize};

/// Which SMS backend delivers notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SmsProvider {
    /// Log messages instead of sending them
    #[default]
    Mock,
    /// Deliver through Twilio
    Twilio,
}

/// Twilio credentials
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Sender number in E.164 format
    pub from_number: String,
}

/// Notification delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationConfig {
    /// SMS backend
    #[serde(default)]
    pub provider: SmsProvider,

    /// Upper bound on a single delivery attempt, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries for transient provider errors
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Required when `provider` is twilio
    #[serde(default)]
    pub twilio: Option<TwilioConfig>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            provider: SmsProvider::Mock,
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            twilio: None,
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    3
}
