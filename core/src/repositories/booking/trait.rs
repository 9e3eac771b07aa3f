//! Booking repository trait.
//!
//! Every mutating method is a conditional write: it applies only when the
//! stored booking is still in the state the caller expects, and returns
//! `Ok(None)` when that precondition no longer holds (or the booking is
//! gone). Two racing requests can therefore never both move a booking along
//! the same edge.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingOtp, BookingStatus};
use crate::errors::DomainError;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Find a booking by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError>;

    /// Every booking, newest first
    async fn find_all(&self) -> Result<Vec<Booking>, DomainError>;

    /// Bookings made by a customer, newest first
    async fn find_by_customer(&self, customer_id: Uuid) -> Result<Vec<Booking>, DomainError>;

    /// Bookings referencing any of the given listings, newest first
    async fn find_by_listings(&self, listing_ids: &[Uuid]) -> Result<Vec<Booking>, DomainError>;

    /// Move `id` from `from` to `to`
    async fn transition_status(
        &self,
        id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<Option<Booking>, DomainError>;

    /// Confirmed → Completed, storing both proof references and the OTP
    async fn attach_proof(
        &self,
        id: Uuid,
        before_working: &str,
        after_working: &str,
        otp: BookingOtp,
    ) -> Result<Option<Booking>, DomainError>;

    /// Overwrite the OTP of a Completed booking
    async fn replace_otp(&self, id: Uuid, otp: BookingOtp) -> Result<Option<Booking>, DomainError>;

    /// Completed → Closed and clear the OTP, provided the stored digest is
    /// still `code_hash`
    async fn consume_otp(&self, id: Uuid, code_hash: &str) -> Result<Option<Booking>, DomainError>;

    /// Store a rating while the booking is Confirmed, Completed or Closed
    async fn set_rating(&self, id: Uuid, rating: f64) -> Result<Option<Booking>, DomainError>;

    /// Every rating submitted on bookings of a listing
    async fn ratings_for_listing(&self, listing_id: Uuid) -> Result<Vec<f64>, DomainError>;
}
