//! Outbound notifications (SMS) for booking events and verification codes
//!
//! - `traits` - the [`NotificationSender`] seam implemented by infra adapters
//! - `notifier` - timeout-bounded dispatch that never fails the caller
//! - `templates` - message bodies
//! - `mock` - a recording sender for tests and local runs

mod mock;
mod notifier;
pub mod templates;
mod traits;
mod types;


pub use mock::{MockNotificationSender, SentMessage};
pub use notifier::Notifier;
pub use traits::NotificationSender;
pub use types::NotificationOutcome;
