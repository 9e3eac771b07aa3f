//! Types returned by the booking service

use chrono::{DateTime, Utc};

use crate::domain::entities::booking::Booking;
use crate::domain::entities::rating::RatingAggregate;
use crate::services::notification::NotificationOutcome;

/// A persisted booking and the notification that followed
#[derive(Debug, Clone)]
pub struct BookingNotice {
    pub booking: Booking,
    pub notification: NotificationOutcome,
}

/// A freshly minted completion OTP; the code itself only travels by SMS
#[derive(Debug, Clone)]
pub struct OtpIssuance {
    pub expires_at: DateTime<Utc>,
    pub notification: NotificationOutcome,
}

/// Result of attaching proof of work
#[derive(Debug, Clone)]
pub struct ProofAttached {
    pub booking: Booking,
    pub otp: OtpIssuance,
}

/// Result of rating a booking
#[derive(Debug, Clone)]
pub struct RatingSubmitted {
    pub booking: Booking,
    /// Aggregate of the rated listing after recomputation
    pub listing_rating: RatingAggregate,
}
