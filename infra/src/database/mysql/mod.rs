//! MySQL repository implementations
//!
//! Identifiers are stored as `CHAR(36)` hyphenated UUIDs and timestamps as
//! `DATETIME(6)` in UTC.

mod booking_repository_impl;
mod catalog_repository_impl;
mod listing_repository_impl;
mod user_repository_impl;

pub use booking_repository_impl::MySqlBookingRepository;
pub use catalog_repository_impl::MySqlCatalogRepository;
pub use listing_repository_impl::MySqlProviderListingRepository;
pub use user_repository_impl::MySqlUserRepository;

use sqlx::mysql::MySqlRow;
use sqlx::Row;
use uuid::Uuid;

use crate::InfrastructureError;

/// Read a `CHAR(36)` column as a UUID
pub(crate) fn uuid_column(row: &MySqlRow, column: &str) -> Result<Uuid, InfrastructureError> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw)
        .map_err(|e| InfrastructureError::Corrupt(format!("{} is not a UUID: {}", column, e)))
}

/// `?, ?, ?` for an `IN (...)` list of `n` items
pub(crate) fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}
