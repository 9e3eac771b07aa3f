//! In-process [`CodeStore`]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tokio::sync::RwLock;

use super::traits::{CodeCheck, CodeStore};

#[derive(Debug, Clone)]
struct StoredCode {
    code_hash: String,
    expires_at: DateTime<Utc>,
    attempts: u32,
}

/// Verification codes held in memory; used for local runs and tests
#[derive(Clone, Default)]
pub struct InMemoryCodeStore {
    codes: Arc<RwLock<HashMap<String, StoredCode>>>,
}

impl InMemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CodeStore for InMemoryCodeStore {
    async fn store_code(&self, key: &str, code_hash: &str, ttl_seconds: u64) -> Result<(), String> {
        let entry = StoredCode {
            code_hash: code_hash.to_string(),
            expires_at: Utc::now() + Duration::seconds(ttl_seconds as i64),
            attempts: 0,
        };
        self.codes.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn verify_code(&self, key: &str, code_hash: &str, max_attempts: u32) -> Result<CodeCheck, String> {
        let mut codes = self.codes.write().await;
        let Some(entry) = codes.get_mut(key) else {
            return Ok(CodeCheck::Missing);
        };

        if entry.expires_at <= Utc::now() {
            codes.remove(key);
            return Ok(CodeCheck::Missing);
        }

        if bool::from(code_hash.as_bytes().ct_eq(entry.code_hash.as_bytes())) {
            codes.remove(key);
            return Ok(CodeCheck::Matched);
        }

        entry.attempts += 1;
        if entry.attempts >= max_attempts {
            codes.remove(key);
            return Ok(CodeCheck::AttemptsExhausted);
        }
        Ok(CodeCheck::Mismatch {
            remaining_attempts: max_attempts - entry.attempts,
        })
    }

    async fn code_ttl(&self, key: &str) -> Result<Option<i64>, String> {
        let codes = self.codes.read().await;
        Ok(codes.get(key).and_then(|entry| {
            let remaining = (entry.expires_at - Utc::now()).num_seconds();
            (remaining > 0).then_some(remaining)
        }))
    }

    async fn clear(&self, key: &str) -> Result<(), String> {
        self.codes.write().await.remove(key);
        Ok(())
    }
}
