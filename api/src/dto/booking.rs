use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use hs_core::domain::entities::{Booking, BookingStatus, ProviderDecision};
use hs_core::services::booking::OtpIssuance;

use super::listing::RatingDto;
use super::NotificationDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub customer_id: Uuid,
    pub provider_listing_id: Uuid,
    /// RFC 3339 timestamp
    pub booking_date: DateTime<Utc>,
}

/// References to the before/after images, such as upload URLs
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProofRequest {
    #[validate(length(min = 1, max = 1024, message = "beforeWorking must be 1 to 1024 characters"))]
    pub before_working: String,

    #[validate(length(min = 1, max = 1024, message = "afterWorking must be 1 to 1024 characters"))]
    pub after_working: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1, max = 16, message = "otp is required"))]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RateRequest {
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    pub rating: f64,
}

/// A worker's answer to a pending booking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyRequest {
    pub booking_id: Uuid,
    /// `Accepted` or `Rejected`
    pub message: ProviderDecision,
}

/// Booking as returned to clients; the OTP digest never leaves the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub provider_listing_id: Uuid,
    pub booking_date: DateTime<Utc>,
    pub status: BookingStatus,
    pub before_working: Option<String>,
    pub after_working: Option<String>,
    pub otp_pending: bool,
    pub otp_expires_at: Option<DateTime<Utc>>,
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Booking> for BookingDto {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            customer_id: booking.customer_id,
            provider_listing_id: booking.provider_listing_id,
            booking_date: booking.booking_date,
            status: booking.status,
            before_working: booking.before_working.clone(),
            after_working: booking.after_working.clone(),
            otp_pending: booking.has_pending_otp(),
            otp_expires_at: booking.otp.as_ref().map(|o| o.expires_at),
            rating: booking.rating,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpResultDto {
    pub expires_at: DateTime<Utc>,
    pub notification: NotificationDto,
}

impl From<&OtpIssuance> for OtpResultDto {
    fn from(issuance: &OtpIssuance) -> Self {
        Self {
            expires_at: issuance.expires_at,
            notification: NotificationDto::from(&issuance.notification),
        }
    }
}

/// Created or responded-to booking with the SMS outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingNoticeResponse {
    pub message: String,
    pub booking: BookingDto,
    pub notification: NotificationDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofResponse {
    pub message: String,
    pub booking: BookingDto,
    pub otp_result: OtpResultDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpResponse {
    pub message: String,
    pub otp_result: OtpResultDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateResponse {
    pub message: String,
    pub booking: BookingDto,
    pub listing_rating: RatingDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingValueResponse {
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub booking: BookingDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingListResponse {
    pub bookings: Vec<BookingDto>,
}

impl BookingListResponse {
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        Self {
            bookings: bookings.iter().map(BookingDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_dto_hides_otp_digest() {
        let mut booking = Booking::new(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
        booking.otp = Some(hs_core::domain::entities::BookingOtp::new(
            "digest".to_string(),
            chrono::Duration::minutes(30),
        ));

        let json = serde_json::to_value(BookingDto::from(&booking)).unwrap();
        assert_eq!(json["otpPending"], true);
        assert!(json["otpExpiresAt"].is_string());
        assert_eq!(json["status"], "Pending");
        assert!(!json.to_string().contains("digest"));
    }

    #[test]
    fn test_notify_request_decision() {
        let body = serde_json::json!({
            "bookingId": Uuid::new_v4(),
            "message": "Accepted"
        });
        let request: NotifyRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.message, ProviderDecision::Accepted);

        let bad = serde_json::json!({ "bookingId": Uuid::new_v4(), "message": "Maybe" });
        assert!(serde_json::from_value::<NotifyRequest>(bad).is_err());
    }

    #[test]
    fn test_proof_reference_limit_matches_stored_width() {
        let at_limit = "r".repeat(hs_core::domain::entities::MAX_PROOF_REFERENCE_LENGTH);
        let request = ProofRequest {
            before_working: at_limit.clone(),
            after_working: at_limit.clone(),
        };
        assert!(request.validate().is_ok());

        let request = ProofRequest {
            before_working: format!("{}r", at_limit),
            after_working: "after.jpg".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("before_working"));
    }

    #[test]
    fn test_rating_range_validation() {
        assert!(RateRequest { rating: 4.5 }.validate().is_ok());
        assert!(RateRequest { rating: 5.1 }.validate().is_err());
        assert!(RateRequest { rating: -0.1 }.validate().is_err());
    }

    #[test]
    fn test_proof_requires_both_references() {
        let missing = ProofRequest {
            before_working: "s3://proof/before.jpg".to_string(),
            after_working: String::new(),
        };
        assert!(missing.validate().is_err());
    }
}
