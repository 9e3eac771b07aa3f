//! Route handlers, grouped by resource

pub mod auth;
pub mod bookings;
pub mod health;
pub mod listings;
pub mod users;
