//! Common utility functions

pub mod phone;

pub use phone::{is_valid_e164, mask_phone_number, normalize_phone_number};
