//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management and migrations
//! - Repository implementations for the `hs_core` traits
//!
//! Every status change on a booking is a single conditional `UPDATE`; the
//! affected-row count tells whether the precondition held.

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{
    MySqlBookingRepository, MySqlCatalogRepository, MySqlProviderListingRepository,
    MySqlUserRepository,
};
