//! Redis-backed short-lived storage
//!
//! Verification codes live here when `cache.enabled` is set; otherwise the
//! in-process store from `hs_core` is used.

pub mod redis_client;
pub mod redis_code_store;


pub use redis_client::RedisClient;
pub use redis_code_store::RedisCodeStore;

pub use hs_shared::config::CacheConfig;
