//! # Infrastructure Layer
//!
//! Concrete adapters behind the `hs_core` traits:
//! - **Database**: MySQL repositories for users, catalog services, provider
//!   listings and bookings using SQLx
//! - **Cache**: Redis-backed verification code store
//! - **SMS**: Twilio and mock SMS delivery, bridged to the core notification seam
//!
//! ## Features
//!
//! - `twilio-sms`: Enable the Twilio SMS service (default)

pub mod cache;
pub mod database;
pub mod sms;

use hs_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),

    /// A stored row could not be mapped to a domain value
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::internal(err.to_string())
    }
}
