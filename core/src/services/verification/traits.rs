//! Storage seam for verification codes

use async_trait::async_trait;

/// Outcome of presenting a code to a [`CodeStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeCheck {
    /// The code matched and has been cleared
    Matched,
    /// Wrong code; the attempt was counted
    Mismatch { remaining_attempts: u32 },
    /// No code is outstanding, or it has expired
    Missing,
    /// Too many wrong attempts; the code has been discarded
    AttemptsExhausted,
}

/// Short-lived keyed store for hashed verification codes
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Store a code digest for `key`, replacing any previous code and
    /// resetting its attempt counter
    async fn store_code(&self, key: &str, code_hash: &str, ttl_seconds: u64) -> Result<(), String>;

    /// Compare a digest against the stored one and track attempts
    async fn verify_code(&self, key: &str, code_hash: &str, max_attempts: u32) -> Result<CodeCheck, String>;

    /// Seconds until the stored code expires, `None` when there is none
    async fn code_ttl(&self, key: &str) -> Result<Option<i64>, String>;

    /// Drop the code and its attempt counter
    async fn clear(&self, key: &str) -> Result<(), String>;
}
