//! `/api/v1/bookings` handlers
//!
//! - `lifecycle` - create, respond, attach proof, OTP resend and verification
//! - `rating` - submit and read a booking's rating
//! - `queries` - single booking and the per-role lists

pub mod lifecycle;
pub mod queries;
pub mod rating;

pub use lifecycle::{attach_proof, create_booking, respond_to_booking, resend_otp, verify_otp};
pub use queries::{get_booking, list_all_bookings, list_customer_bookings, list_worker_bookings};
pub use rating::{get_rating, submit_rating};
