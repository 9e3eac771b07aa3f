//! Business services containing domain logic and use cases.

pub mod auth;
pub mod booking;
pub mod listing;
pub mod notification;
pub mod token;
pub mod verification;

// Re-export commonly used types
pub use auth::AuthService;
pub use booking::{BookingService, BookingServiceConfig};
pub use listing::{ListingService, NewListing};
pub use notification::{MockNotificationSender, NotificationOutcome, NotificationSender, Notifier};
pub use token::{TokenService, TokenServiceConfig};
pub use verification::{
    CodeCheck, CodeStore, InMemoryCodeStore, SendCodeResult, VerificationService,
    VerificationServiceConfig,
};
