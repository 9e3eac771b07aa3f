//! Request and response bodies; every field is camelCase on the wire

pub mod auth;
pub mod booking;
pub mod listing;
pub mod notification;
pub mod user;

pub use notification::NotificationDto;
