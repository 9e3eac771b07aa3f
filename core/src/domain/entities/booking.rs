//! Booking entity and its lifecycle states.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::one_time_code::code_matches;

/// Longest before/after proof reference a booking stores
pub const MAX_PROOF_REFERENCE_LENGTH: usize = 1024;

/// Lifecycle state of a booking
///
/// ```text
/// Pending ──accept──▶ Confirmed ──proof──▶ Completed ──otp──▶ Closed
///    └──────────────────reject─────────────────────────────────▲
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Closed,
}

impl BookingStatus {
    /// The only edges a booking may follow
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Closed) | (Confirmed, Completed) | (Completed, Closed)
        )
    }

    /// Ratings are accepted once the provider has accepted the job
    pub fn is_ratable(&self) -> bool {
        matches!(
            self,
            BookingStatus::Confirmed | BookingStatus::Completed | BookingStatus::Closed
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Closed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Closed => "Closed",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(BookingStatus::Pending),
            "Confirmed" => Ok(BookingStatus::Confirmed),
            "Completed" => Ok(BookingStatus::Completed),
            "Closed" => Ok(BookingStatus::Closed),
            _ => Err(format!("Unknown booking status: {}", s)),
        }
    }
}

/// A provider's answer to a pending booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderDecision {
    Accepted,
    Rejected,
}

impl ProviderDecision {
    /// State the booking moves to
    pub fn target_status(&self) -> BookingStatus {
        match self {
            ProviderDecision::Accepted => BookingStatus::Confirmed,
            ProviderDecision::Rejected => BookingStatus::Closed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderDecision::Accepted => "Accepted",
            ProviderDecision::Rejected => "Rejected",
        }
    }
}

/// Completion OTP stored on a booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingOtp {
    /// SHA-256 hex digest of the code
    pub code_hash: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl BookingOtp {
    pub fn new(code_hash: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            code_hash,
            issued_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    pub fn matches(&self, supplied: &str) -> bool {
        code_matches(&self.code_hash, supplied)
    }
}

/// Booking entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub provider_listing_id: Uuid,
    pub booking_date: DateTime<Utc>,
    pub status: BookingStatus,
    /// Reference to the "before" proof image
    pub before_working: Option<String>,
    /// Reference to the "after" proof image
    pub after_working: Option<String>,
    /// Present only between proof upload and successful verification
    pub otp: Option<BookingOtp>,
    /// Customer rating in [0, 5]
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a pending booking
    pub fn new(customer_id: Uuid, provider_listing_id: Uuid, booking_date: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customer_id,
            provider_listing_id,
            booking_date,
            status: BookingStatus::Pending,
            before_working: None,
            after_working: None,
            otp: None,
            rating: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_pending_otp(&self) -> bool {
        self.otp.is_some()
    }
}
