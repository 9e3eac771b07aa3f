//! HTTP layer of the HomeServe backend
//!
//! Routes translate JSON requests into calls on the `hs_core` services and
//! map every [`hs_core::errors::DomainError`] onto the shared
//! `ErrorResponse` shape. The application is generic over a [`Backend`] so
//! the same routes run against MySQL in production and in-memory stores in
//! tests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use state::{AppState, Backend};
