//! Provider listing management: workers publish their offerings under
//! catalog services, anyone can browse them.

mod service;

#[cfg(test)]
mod tests;

pub use service::{ListingService, NewListing};
