//! MySQL implementation of the BookingRepository trait.
//!
//! Each conditional write is one `UPDATE ... WHERE id = ? AND <precondition>`.
//! `updated_at` is always rewritten so a matched row always counts as
//! affected.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use hs_core::domain::entities::booking::{Booking, BookingOtp, BookingStatus};
use hs_core::errors::DomainError;
use hs_core::repositories::BookingRepository;

use super::{placeholders, uuid_column};
use crate::InfrastructureError;

const BOOKING_COLUMNS: &str = "id, customer_id, provider_listing_id, booking_date, status, \
     before_working, after_working, otp_hash, otp_issued_at, otp_expires_at, rating, \
     created_at, updated_at";

/// MySQL implementation of BookingRepository
pub struct MySqlBookingRepository {
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_booking(row: &MySqlRow) -> Result<Booking, InfrastructureError> {
        let status: String = row.try_get("status")?;
        let otp_hash: Option<String> = row.try_get("otp_hash")?;
        let otp_issued_at: Option<DateTime<Utc>> = row.try_get("otp_issued_at")?;
        let otp_expires_at: Option<DateTime<Utc>> = row.try_get("otp_expires_at")?;

        let otp = match (otp_hash, otp_issued_at, otp_expires_at) {
            (Some(code_hash), Some(issued_at), Some(expires_at)) => Some(BookingOtp {
                code_hash,
                issued_at,
                expires_at,
            }),
            _ => None,
        };

        Ok(Booking {
            id: uuid_column(row, "id")?,
            customer_id: uuid_column(row, "customer_id")?,
            provider_listing_id: uuid_column(row, "provider_listing_id")?,
            booking_date: row.try_get("booking_date")?,
            status: status
                .parse::<BookingStatus>()
                .map_err(InfrastructureError::Corrupt)?,
            before_working: row.try_get("before_working")?,
            after_working: row.try_get("after_working")?,
            otp,
            rating: row.try_get("rating")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn rows_to_bookings(rows: &[MySqlRow]) -> Result<Vec<Booking>, InfrastructureError> {
        rows.iter().map(Self::row_to_booking).collect()
    }

    /// Re-read a booking after a conditional write touched it
    async fn updated(&self, id: Uuid, rows_affected: u64) -> Result<Option<Booking>, DomainError> {
        if rows_affected == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO bookings (
                id, customer_id, provider_listing_id, booking_date, status,
                before_working, after_working, otp_hash, otp_issued_at, otp_expires_at,
                rating, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(booking.id.to_string())
        .bind(booking.customer_id.to_string())
        .bind(booking.provider_listing_id.to_string())
        .bind(booking.booking_date)
        .bind(booking.status.as_str())
        .bind(&booking.before_working)
        .bind(&booking.after_working)
        .bind(booking.otp.as_ref().map(|o| o.code_hash.clone()))
        .bind(booking.otp.as_ref().map(|o| o.issued_at))
        .bind(booking.otp.as_ref().map(|o| o.expires_at))
        .bind(booking.rating)
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .execute(&self.pool)
        .await
        .map_err(InfrastructureError::from)?;

        tracing::debug!(booking_id = %booking.id, "Booking row inserted");
        Ok(booking)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let query = format!("SELECT {} FROM bookings WHERE id = ? LIMIT 1", BOOKING_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(row.as_ref().map(Self::row_to_booking).transpose()?)
    }

    async fn find_all(&self) -> Result<Vec<Booking>, DomainError> {
        let query = format!("SELECT {} FROM bookings ORDER BY created_at DESC", BOOKING_COLUMNS);
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(Self::rows_to_bookings(&rows)?)
    }

    async fn find_by_customer(&self, customer_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let query = format!(
            "SELECT {} FROM bookings WHERE customer_id = ? ORDER BY created_at DESC",
            BOOKING_COLUMNS
        );
        let rows = sqlx::query(&query)
            .bind(customer_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(Self::rows_to_bookings(&rows)?)
    }

    async fn find_by_listings(&self, listing_ids: &[Uuid]) -> Result<Vec<Booking>, DomainError> {
        if listing_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT {} FROM bookings WHERE provider_listing_id IN ({}) ORDER BY created_at DESC",
            BOOKING_COLUMNS,
            placeholders(listing_ids.len())
        );
        let mut q = sqlx::query(&query);
        for id in listing_ids {
            q = q.bind(id.to_string());
        }
        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(Self::rows_to_bookings(&rows)?)
    }

    async fn transition_status(
        &self,
        id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<Option<Booking>, DomainError> {
        let result = sqlx::query(
            "UPDATE bookings SET status = ?, updated_at = ? WHERE id = ? AND status = ?",
        )
        .bind(to.as_str())
        .bind(Utc::now())
        .bind(id.to_string())
        .bind(from.as_str())
        .execute(&self.pool)
        .await
        .map_err(InfrastructureError::from)?;

        self.updated(id, result.rows_affected()).await
    }

    async fn attach_proof(
        &self,
        id: Uuid,
        before_working: &str,
        after_working: &str,
        otp: BookingOtp,
    ) -> Result<Option<Booking>, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET before_working = ?, after_working = ?,
                otp_hash = ?, otp_issued_at = ?, otp_expires_at = ?,
                status = ?, updated_at = ?
            WHERE id = ? AND status = ?
            "#,
        )
        .bind(before_working)
        .bind(after_working)
        .bind(&otp.code_hash)
        .bind(otp.issued_at)
        .bind(otp.expires_at)
        .bind(BookingStatus::Completed.as_str())
        .bind(Utc::now())
        .bind(id.to_string())
        .bind(BookingStatus::Confirmed.as_str())
        .execute(&self.pool)
        .await
        .map_err(InfrastructureError::from)?;

        self.updated(id, result.rows_affected()).await
    }

    async fn replace_otp(&self, id: Uuid, otp: BookingOtp) -> Result<Option<Booking>, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET otp_hash = ?, otp_issued_at = ?, otp_expires_at = ?, updated_at = ?
            WHERE id = ? AND status = ?
            "#,
        )
        .bind(&otp.code_hash)
        .bind(otp.issued_at)
        .bind(otp.expires_at)
        .bind(Utc::now())
        .bind(id.to_string())
        .bind(BookingStatus::Completed.as_str())
        .execute(&self.pool)
        .await
        .map_err(InfrastructureError::from)?;

        self.updated(id, result.rows_affected()).await
    }

    async fn consume_otp(&self, id: Uuid, code_hash: &str) -> Result<Option<Booking>, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET otp_hash = NULL, otp_issued_at = NULL, otp_expires_at = NULL,
                status = ?, updated_at = ?
            WHERE id = ? AND status = ? AND otp_hash = ?
            "#,
        )
        .bind(BookingStatus::Closed.as_str())
        .bind(Utc::now())
        .bind(id.to_string())
        .bind(BookingStatus::Completed.as_str())
        .bind(code_hash)
        .execute(&self.pool)
        .await
        .map_err(InfrastructureError::from)?;

        self.updated(id, result.rows_affected()).await
    }

    async fn set_rating(&self, id: Uuid, rating: f64) -> Result<Option<Booking>, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE bookings SET rating = ?, updated_at = ?
            WHERE id = ? AND status IN (?, ?, ?)
            "#,
        )
        .bind(rating)
        .bind(Utc::now())
        .bind(id.to_string())
        .bind(BookingStatus::Confirmed.as_str())
        .bind(BookingStatus::Completed.as_str())
        .bind(BookingStatus::Closed.as_str())
        .execute(&self.pool)
        .await
        .map_err(InfrastructureError::from)?;

        self.updated(id, result.rows_affected()).await
    }

    async fn ratings_for_listing(&self, listing_id: Uuid) -> Result<Vec<f64>, DomainError> {
        let rows = sqlx::query(
            "SELECT rating FROM bookings WHERE provider_listing_id = ? AND rating IS NOT NULL",
        )
        .bind(listing_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(InfrastructureError::from)?;

        Ok(rows
            .iter()
            .map(|row| row.try_get::<f64, _>("rating"))
            .collect::<Result<Vec<_>, _>>()
            .map_err(InfrastructureError::from)?)
    }
}
