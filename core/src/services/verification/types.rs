//! Types for verification service results

use chrono::{DateTime, Utc};

/// Result of sending a verification code
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// Normalized phone number the code went to
    pub phone: String,
    /// The SMS message ID from the provider
    pub message_id: String,
    /// When the code stops verifying
    pub expires_at: DateTime<Utc>,
    /// When the user can request another code
    pub next_resend_at: DateTime<Utc>,
}
