//! Value objects representing immutable domain concepts.

pub mod actor;
pub mod auth_response;

pub use actor::Actor;
pub use auth_response::AuthResponse;
