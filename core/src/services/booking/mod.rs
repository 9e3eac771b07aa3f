//! Booking lifecycle service
//!
//! Owns the booking state machine, the completion OTP handed to the
//! customer when proof of work is attached, and the rating aggregate kept
//! on each provider listing.
//!
//! Every transition is persisted with a conditional write before any
//! notification goes out; notifications are bounded by a timeout and their
//! outcome is returned alongside the booking.

mod config;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::BookingServiceConfig;
pub use service::BookingService;
pub use types::{BookingNotice, OtpIssuance, ProofAttached, RatingSubmitted};
