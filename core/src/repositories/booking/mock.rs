//! In-memory implementation of BookingRepository
//!
//! Conditional writes check their precondition under the write lock, so
//! the guarantees match the SQL implementation.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingOtp, BookingStatus};
use crate::errors::DomainError;

use super::trait_::BookingRepository;

/// Mock booking repository for tests and local runs
pub struct MockBookingRepository {
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
}

impl MockBookingRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Apply `update` when `guard` accepts the current booking
    async fn update_if<G, U>(&self, id: Uuid, guard: G, update: U) -> Option<Booking>
    where
        G: FnOnce(&Booking) -> bool,
        U: FnOnce(&mut Booking),
    {
        let mut bookings = self.bookings.write().await;
        let booking = bookings.get_mut(&id)?;
        if !guard(booking) {
            return None;
        }
        update(booking);
        booking.updated_at = Utc::now();
        Some(booking.clone())
    }
}

impl Default for MockBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn newest_first(mut bookings: Vec<Booking>) -> Vec<Booking> {
    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    bookings
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(newest_first(bookings.values().cloned().collect()))
    }

    async fn find_by_customer(&self, customer_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(newest_first(
            bookings
                .values()
                .filter(|b| b.customer_id == customer_id)
                .cloned()
                .collect(),
        ))
    }

    async fn find_by_listings(&self, listing_ids: &[Uuid]) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(newest_first(
            bookings
                .values()
                .filter(|b| listing_ids.contains(&b.provider_listing_id))
                .cloned()
                .collect(),
        ))
    }

    async fn transition_status(
        &self,
        id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<Option<Booking>, DomainError> {
        Ok(self
            .update_if(id, |b| b.status == from, |b| b.status = to)
            .await)
    }

    async fn attach_proof(
        &self,
        id: Uuid,
        before_working: &str,
        after_working: &str,
        otp: BookingOtp,
    ) -> Result<Option<Booking>, DomainError> {
        Ok(self
            .update_if(
                id,
                |b| b.status == BookingStatus::Confirmed,
                |b| {
                    b.before_working = Some(before_working.to_string());
                    b.after_working = Some(after_working.to_string());
                    b.otp = Some(otp);
                    b.status = BookingStatus::Completed;
                },
            )
            .await)
    }

    async fn replace_otp(&self, id: Uuid, otp: BookingOtp) -> Result<Option<Booking>, DomainError> {
        Ok(self
            .update_if(
                id,
                |b| b.status == BookingStatus::Completed,
                |b| b.otp = Some(otp),
            )
            .await)
    }

    async fn consume_otp(&self, id: Uuid, code_hash: &str) -> Result<Option<Booking>, DomainError> {
        Ok(self
            .update_if(
                id,
                |b| {
                    b.status == BookingStatus::Completed
                        && b.otp.as_ref().map(|o| o.code_hash.as_str()) == Some(code_hash)
                },
                |b| {
                    b.otp = None;
                    b.status = BookingStatus::Closed;
                },
            )
            .await)
    }

    async fn set_rating(&self, id: Uuid, rating: f64) -> Result<Option<Booking>, DomainError> {
        Ok(self
            .update_if(id, |b| b.status.is_ratable(), |b| b.rating = Some(rating))
            .await)
    }

    async fn ratings_for_listing(&self, listing_id: Uuid) -> Result<Vec<f64>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|b| b.provider_listing_id == listing_id)
            .filter_map(|b| b.rating)
            .collect())
    }
}
