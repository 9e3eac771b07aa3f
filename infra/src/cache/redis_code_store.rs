//! Verification codes in Redis
//!
//! Keys: `verification:code:{phone}` holds the code digest with the code's
//! TTL, `verification:attempts:{phone}` counts wrong guesses and expires with it.

use async_trait::async_trait;
use subtle::ConstantTimeEq;

use hs_core::services::verification::{CodeCheck, CodeStore};
use hs_shared::utils::phone::mask_phone_number;

use super::redis_client::RedisClient;
use crate::InfrastructureError;

/// [`CodeStore`] backed by Redis
#[derive(Clone)]
pub struct RedisCodeStore {
    client: RedisClient,
}

impl RedisCodeStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn code_key(&self, phone: &str) -> String {
        self.client.key(&format!("verification:code:{}", phone))
    }

    fn attempts_key(&self, phone: &str) -> String {
        self.client.key(&format!("verification:attempts:{}", phone))
    }

    async fn clear_keys(&self, phone: &str) -> Result<(), InfrastructureError> {
        self.client
            .delete(&[self.code_key(phone), self.attempts_key(phone)])
            .await
            .map(|_| ())
    }

    async fn check(&self, phone: &str, code_hash: &str, max_attempts: u32) -> Result<CodeCheck, InfrastructureError> {
        let Some(stored) = self.client.get(&self.code_key(phone)).await? else {
            return Ok(CodeCheck::Missing);
        };

        if bool::from(stored.as_bytes().ct_eq(code_hash.as_bytes())) {
            self.clear_keys(phone).await?;
            return Ok(CodeCheck::Matched);
        }

        let ttl = self.client.ttl(&self.code_key(phone)).await?.unwrap_or(1).max(1) as u64;
        let attempts = self
            .client
            .increment(&self.attempts_key(phone), Some(ttl))
            .await?
            .max(0) as u32;

        if attempts >= max_attempts {
            tracing::warn!(phone = %mask_phone_number(phone), attempts = attempts, "Verification code discarded after too many attempts");
            self.clear_keys(phone).await?;
            return Ok(CodeCheck::AttemptsExhausted);
        }
        Ok(CodeCheck::Mismatch {
            remaining_attempts: max_attempts - attempts,
        })
    }
}

#[async_trait]
impl CodeStore for RedisCodeStore {
    async fn store_code(&self, key: &str, code_hash: &str, ttl_seconds: u64) -> Result<(), String> {
        self.client
            .set_with_expiry(&self.code_key(key), code_hash, ttl_seconds)
            .await
            .map_err(|e| e.to_string())?;
        self.client
            .delete(&[self.attempts_key(key)])
            .await
            .map_err(|e| e.to_string())?;

        tracing::debug!(phone = %mask_phone_number(key), ttl_seconds = ttl_seconds, "Verification code stored");
        Ok(())
    }

    async fn verify_code(&self, key: &str, code_hash: &str, max_attempts: u32) -> Result<CodeCheck, String> {
        self.check(key, code_hash, max_attempts)
            .await
            .map_err(|e| e.to_string())
    }

    async fn code_ttl(&self, key: &str) -> Result<Option<i64>, String> {
        self.client
            .ttl(&self.code_key(key))
            .await
            .map_err(|e| e.to_string())
    }

    async fn clear(&self, key: &str) -> Result<(), String> {
        self.clear_keys(key).await.map_err(|e| e.to_string())
    }
}
