//! Phone-number login
//!
//! A verified phone number either signs in an existing user or registers a
//! new one, and is exchanged for an access token. Admin-only user management
//! lives here too.

mod service;


pub use service::AuthService;
