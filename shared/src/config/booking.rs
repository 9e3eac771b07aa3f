//! Booking workflow configuration

use serde::{Deserialize, Serialize};

/// Settings for the completion OTP handed to customers
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingConfig {
    /// Lifetime of a completion OTP in minutes
    #[serde(default = "default_otp_ttl_minutes")]
    pub otp_ttl_minutes: i64,

    /// Base URL of the customer-facing rating page
    #[serde(default = "default_feedback_base_url")]
    pub feedback_base_url: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            otp_ttl_minutes: default_otp_ttl_minutes(),
            feedback_base_url: default_feedback_base_url(),
        }
    }
}

impl BookingConfig {
    /// Link sent to the customer together with the OTP
    pub fn feedback_link(&self, booking_id: &str) -> String {
        format!(
            "{}/{}/giverating",
            self.feedback_base_url.trim_end_matches('/'),
            booking_id
        )
    }
}

fn default_otp_ttl_minutes() -> i64 {
    30
}

fn default_feedback_base_url() -> String {
    String::from("http://localhost:5173")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_link() {
        let config = BookingConfig::default();
        assert_eq!(
            config.feedback_link("abc"),
            "http://localhost:5173/abc/giverating"
        );

        let trailing = BookingConfig {
            feedback_base_url: "https://homeserve.example/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            trailing.feedback_link("abc"),
            "https://homeserve.example/abc/giverating"
        );
    }
}
