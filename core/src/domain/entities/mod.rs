//! Domain entities representing core business objects.

pub mod booking;
pub mod one_time_code;
pub mod provider_listing;
pub mod rating;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use booking::{Booking, BookingOtp, BookingStatus, ProviderDecision, MAX_PROOF_REFERENCE_LENGTH};
pub use one_time_code::{code_matches, hash_code, OneTimeCode, CODE_LENGTH};
pub use provider_listing::{CatalogService, ProviderListing};
pub use rating::{validate_rating, RatingAggregate, RATING_MAX, RATING_MIN};
pub use token::Claims;
pub use user::{User, UserRole};
