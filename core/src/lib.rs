//! # HomeServe Core
//!
//! Core business logic and domain layer for the HomeServe backend.
//! This crate contains domain entities, business services, repository
//! interfaces with in-memory implementations, and error types. The booking
//! lifecycle (state machine, completion OTPs, rating aggregation) lives in
//! [`services::booking`].

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Booking, BookingOtp, BookingStatus, CatalogService, Claims, OneTimeCode, ProviderDecision,
    ProviderListing, RatingAggregate, User, UserRole,
};
pub use domain::value_objects::{Actor, AuthResponse};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{
    BookingRepository, CatalogRepository, MockBookingRepository, MockCatalogRepository,
    MockProviderListingRepository, MockUserRepository, ProviderListingRepository, UserRepository,
};
pub use services::{
    AuthService, BookingService, BookingServiceConfig, CodeCheck, CodeStore, InMemoryCodeStore,
    ListingService, MockNotificationSender, NewListing, NotificationOutcome, NotificationSender,
    SendCodeResult, TokenService, TokenServiceConfig, VerificationService, VerificationServiceConfig,
};
