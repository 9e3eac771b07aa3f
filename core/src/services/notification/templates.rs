//! Message bodies sent to customers and workers

use crate::domain::entities::booking::ProviderDecision;

/// To the worker owning the booked listing
pub fn new_booking_for_worker(booking_id: &str) -> String {
    format!("A new work has been assigned to you. Booking ID: {}", booking_id)
}

/// To the customer after the worker accepted or rejected
pub fn booking_decision(decision: ProviderDecision) -> String {
    format!("Your booking has been {} by the worker.", decision.as_str())
}

/// To the customer once proof of work is attached
pub fn completion_otp(code: &str, feedback_link: &str) -> String {
    format!(
        "Your OTP is {}. Please provide feedback using this link: {}",
        code, feedback_link
    )
}

/// Phone verification during sign-in
pub fn verification_code(code: &str, ttl_minutes: u64) -> String {
    format!(
        "Your HomeServe verification code is {}. It expires in {} minutes.",
        code, ttl_minutes
    )
}
