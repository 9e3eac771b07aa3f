//! Main booking service implementation

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::booking::{
    Booking, BookingOtp, BookingStatus, ProviderDecision, MAX_PROOF_REFERENCE_LENGTH,
};
use crate::domain::entities::one_time_code::OneTimeCode;
use crate::domain::entities::rating::{validate_rating, RatingAggregate};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{BookingRepository, ProviderListingRepository, UserRepository};
use crate::services::notification::{templates, NotificationOutcome, NotificationSender, Notifier};

use super::config::BookingServiceConfig;
use super::types::{BookingNotice, OtpIssuance, ProofAttached, RatingSubmitted};

/// Booking lifecycle manager
pub struct BookingService<B, L, U, N>
where
    B: BookingRepository,
    L: ProviderListingRepository,
    U: UserRepository,
    N: NotificationSender,
{
    bookings: Arc<B>,
    listings: Arc<L>,
    users: Arc<U>,
    notifier: Notifier<N>,
    config: BookingServiceConfig,
}

impl<B, L, U, N> BookingService<B, L, U, N>
where
    B: BookingRepository,
    L: ProviderListingRepository,
    U: UserRepository,
    N: NotificationSender,
{
    /// Create a new booking service
    ///
    /// # Arguments
    ///
    /// * `bookings` - Booking store
    /// * `listings` - Provider listing store, owner of the rating aggregate
    /// * `users` - Identity store used to resolve notification recipients
    /// * `sender` - Outbound SMS
    /// * `config` - OTP lifetime, rating link and notification timeout
    pub fn new(
        bookings: Arc<B>,
        listings: Arc<L>,
        users: Arc<U>,
        sender: Arc<N>,
        config: BookingServiceConfig,
    ) -> Self {
        let notifier = Notifier::new(sender, config.notification_timeout());
        Self {
            bookings,
            listings,
            users,
            notifier,
            config,
        }
    }

    /// Create a pending booking and tell the listing's worker about it
    pub async fn create_booking(
        &self,
        customer_id: Uuid,
        provider_listing_id: Uuid,
        booking_date: DateTime<Utc>,
    ) -> DomainResult<BookingNotice> {
        let listing = self
            .listings
            .find_by_id(provider_listing_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Service provider"))?;

        if self.users.find_by_id(customer_id).await?.is_none() {
            return Err(DomainError::not_found("Customer"));
        }

        let booking = self
            .bookings
            .create(Booking::new(customer_id, provider_listing_id, booking_date))
            .await?;

        tracing::info!(
            booking_id = %booking.id,
            customer_id = %customer_id,
            provider_listing_id = %provider_listing_id,
            event = "booking_created",
            "Booking created"
        );

        let worker_phone = self.contact_of(listing.worker_id).await;
        let notification = self
            .notifier
            .notify(
                worker_phone.as_deref(),
                &templates::new_booking_for_worker(&booking.id.to_string()),
                "booking_created",
            )
            .await;

        Ok(BookingNotice {
            booking,
            notification,
        })
    }

    /// Accept or reject a pending booking and tell the customer
    pub async fn respond_to_booking(
        &self,
        booking_id: Uuid,
        decision: ProviderDecision,
    ) -> DomainResult<BookingNotice> {
        let booking = self.load(booking_id).await?;
        if booking.status != BookingStatus::Pending {
            return Err(DomainError::invalid_state(format!(
                "Booking is {} and can no longer be {}",
                booking.status,
                decision.as_str().to_lowercase()
            )));
        }

        let target = decision.target_status();
        let booking = self
            .bookings
            .transition_status(booking_id, BookingStatus::Pending, target)
            .await?
            .ok_or_else(|| DomainError::invalid_state("Booking was updated by another request"))?;

        tracing::info!(
            booking_id = %booking_id,
            decision = decision.as_str(),
            status = %booking.status,
            event = "booking_responded",
            "Provider responded to booking"
        );

        let customer_phone = self.contact_of(booking.customer_id).await;
        let notification = self
            .notifier
            .notify(
                customer_phone.as_deref(),
                &templates::booking_decision(decision),
                "booking_responded",
            )
            .await;

        Ok(BookingNotice {
            booking,
            notification,
        })
    }

    /// Attach before/after proof, complete the booking and send the customer an OTP
    pub async fn attach_proof(
        &self,
        booking_id: Uuid,
        before_working: &str,
        after_working: &str,
    ) -> DomainResult<ProofAttached> {
        let before_working = proof_reference("beforeWorking", before_working)?;
        let after_working = proof_reference("afterWorking", after_working)?;

        let booking = self.load(booking_id).await?;
        if booking.status != BookingStatus::Confirmed {
            return Err(DomainError::invalid_state(format!(
                "Proof can only be attached to a confirmed booking (current status: {})",
                booking.status
            )));
        }

        let code = OneTimeCode::generate();
        let otp = BookingOtp::new(code.hash(), self.config.otp_ttl());
        let expires_at = otp.expires_at;

        let booking = self
            .bookings
            .attach_proof(booking_id, before_working, after_working, otp)
            .await?
            .ok_or_else(|| DomainError::invalid_state("Booking was updated by another request"))?;

        tracing::info!(
            booking_id = %booking_id,
            expires_at = %expires_at,
            event = "otp_issued",
            "Proof attached, completion OTP issued"
        );

        let notification = self.send_otp(&booking, &code).await;
        Ok(ProofAttached {
            booking,
            otp: OtpIssuance {
                expires_at,
                notification,
            },
        })
    }

    /// Replace the OTP of a completed booking and send it again
    ///
    /// The previous code stops verifying as soon as the new one is stored.
    pub async fn resend_otp(&self, booking_id: Uuid) -> DomainResult<OtpIssuance> {
        let booking = self.load(booking_id).await?;
        if booking.status != BookingStatus::Completed {
            return Err(DomainError::invalid_state(format!(
                "No OTP can be issued for a booking in status {}",
                booking.status
            )));
        }

        let code = OneTimeCode::generate();
        let otp = BookingOtp::new(code.hash(), self.config.otp_ttl());
        let expires_at = otp.expires_at;

        let booking = self
            .bookings
            .replace_otp(booking_id, otp)
            .await?
            .ok_or_else(|| DomainError::invalid_state("Booking was updated by another request"))?;

        tracing::info!(booking_id = %booking_id, event = "otp_reissued", "Completion OTP reissued");

        let notification = self.send_otp(&booking, &code).await;
        Ok(OtpIssuance {
            expires_at,
            notification,
        })
    }

    /// Verify the customer's OTP and close the booking
    ///
    /// # Errors
    ///
    /// * `NotFound` - unknown booking, or no OTP outstanding (including one
    ///   consumed by a concurrent request)
    /// * `OtpExpired` - the OTP outlived its TTL
    /// * `InvalidOtp` - mismatch; the booking is left untouched
    pub async fn verify_otp(&self, booking_id: Uuid, supplied: &str) -> DomainResult<Booking> {
        if supplied.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "otp".to_string(),
            }
            .into());
        }

        let booking = self.load(booking_id).await?;
        let otp = booking
            .otp
            .as_ref()
            .ok_or_else(|| DomainError::not_found("OTP"))?;

        if otp.is_expired() {
            tracing::warn!(booking_id = %booking_id, event = "otp_expired", "Expired OTP presented");
            return Err(DomainError::OtpExpired);
        }

        if !otp.matches(supplied) {
            tracing::warn!(booking_id = %booking_id, event = "otp_mismatch", "Invalid OTP presented");
            return Err(DomainError::InvalidOtp);
        }

        let closed = self
            .bookings
            .consume_otp(booking_id, &otp.code_hash)
            .await?
            .ok_or_else(|| DomainError::not_found("OTP"))?;

        tracing::info!(booking_id = %booking_id, event = "otp_verified", "Booking verified and closed");
        Ok(closed)
    }

    /// Rate a booking and recompute its listing's aggregate
    pub async fn submit_rating(&self, booking_id: Uuid, value: f64) -> DomainResult<RatingSubmitted> {
        let value = validate_rating(value)?;

        let booking = self.load(booking_id).await?;
        if !booking.status.is_ratable() {
            return Err(DomainError::invalid_state(
                "Booking must be Confirmed, Completed or Closed to be rated",
            ));
        }

        let booking = self
            .bookings
            .set_rating(booking_id, value)
            .await?
            .ok_or_else(|| DomainError::invalid_state("Booking can no longer be rated"))?;

        let listing_rating = self.recompute_listing_rating(booking.provider_listing_id).await?;

        tracing::info!(
            booking_id = %booking_id,
            provider_listing_id = %booking.provider_listing_id,
            rating = value,
            average = listing_rating.average,
            count = listing_rating.count,
            event = "booking_rated",
            "Booking rated"
        );

        Ok(RatingSubmitted {
            booking,
            listing_rating,
        })
    }

    /// Rating of a booking, if any
    pub async fn get_rating(&self, booking_id: Uuid) -> DomainResult<Option<f64>> {
        Ok(self.load(booking_id).await?.rating)
    }

    /// A single booking
    pub async fn get_booking(&self, booking_id: Uuid) -> DomainResult<Booking> {
        self.load(booking_id).await
    }

    /// Bookings made by a customer; empty when there are none
    pub async fn list_for_customer(&self, customer_id: Uuid) -> DomainResult<Vec<Booking>> {
        self.bookings.find_by_customer(customer_id).await
    }

    /// Bookings against any listing owned by a worker; empty when there are none
    pub async fn list_for_provider_owner(&self, worker_id: Uuid) -> DomainResult<Vec<Booking>> {
        let listing_ids: Vec<Uuid> = self
            .listings
            .find_by_worker(worker_id)
            .await?
            .into_iter()
            .map(|l| l.id)
            .collect();

        if listing_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.bookings.find_by_listings(&listing_ids).await
    }

    /// Every booking
    pub async fn list_all(&self) -> DomainResult<Vec<Booking>> {
        self.bookings.find_all().await
    }

    async fn load(&self, booking_id: Uuid) -> DomainResult<Booking> {
        self.bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))
    }

    /// Full scan over the listing's rated bookings; last writer wins
    async fn recompute_listing_rating(&self, listing_id: Uuid) -> DomainResult<RatingAggregate> {
        let ratings = self.bookings.ratings_for_listing(listing_id).await?;
        let aggregate = RatingAggregate::from_ratings(&ratings);
        if !self.listings.update_rating(listing_id, aggregate).await? {
            tracing::warn!(
                provider_listing_id = %listing_id,
                "Rated booking references a listing that no longer exists"
            );
        }
        Ok(aggregate)
    }

    async fn send_otp(&self, booking: &Booking, code: &OneTimeCode) -> NotificationOutcome {
        let customer_phone = self.contact_of(booking.customer_id).await;
        let link = self.config.booking.feedback_link(&booking.id.to_string());
        self.notifier
            .notify(
                customer_phone.as_deref(),
                &templates::completion_otp(code.as_str(), &link),
                "otp_issued",
            )
            .await
    }

    /// Phone number of a user; lookup failures count as missing contact
    async fn contact_of(&self, user_id: Uuid) -> Option<String> {
        match self.users.find_by_id(user_id).await {
            Ok(Some(user)) => user.contact().map(str::to_string),
            Ok(None) => None,
            Err(e) => {
                tracing::error!(user_id = %user_id, error = %e, "Failed to resolve notification recipient");
                None
            }
        }
    }
}

/// Non-blank proof reference that fits the stored column
fn proof_reference<'a>(field: &str, value: &'a str) -> DomainResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        }
        .into());
    }
    if trimmed.chars().count() > MAX_PROOF_REFERENCE_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_PROOF_REFERENCE_LENGTH,
        }
        .into());
    }
    Ok(trimmed)
}
