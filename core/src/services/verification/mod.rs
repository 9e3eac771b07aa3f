//! Phone number verification
//!
//! Short-lived codes are hashed and kept in a [`CodeStore`] keyed by the
//! normalized phone number. Delivery goes through the shared notification seam.

mod config;
mod memory;
mod service;
mod traits;
mod types;


pub use config::VerificationServiceConfig;
pub use memory::InMemoryCodeStore;
pub use service::VerificationService;
pub use traits::{CodeCheck, CodeStore};
pub use types::SendCodeResult;
