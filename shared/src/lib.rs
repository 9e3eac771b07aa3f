//! Shared utilities and common types for the HomeServe server
//!
//! This crate provides functionality used across all server crates:
//! - Configuration types and layered loading
//! - The JSON error response shape returned by every endpoint
//! - Phone number helpers (normalisation, validation, masking for logs)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, BookingConfig, CacheConfig, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, LoggingConfig, NotificationConfig, ServerConfig, SmsProvider, TwilioConfig,
    VerificationConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::phone;
