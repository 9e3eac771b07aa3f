//! JWT access tokens for authenticated sessions

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
