//! Repository interfaces and their in-memory implementations.

pub mod booking;
pub mod catalog;
pub mod listing;
pub mod user;

pub use booking::{BookingRepository, MockBookingRepository};
pub use catalog::{CatalogRepository, MockCatalogRepository};
pub use listing::{MockProviderListingRepository, ProviderListingRepository};
pub use user::{MockUserRepository, UserRepository};
