//! Main verification service implementation

use chrono::{Duration, Utc};
use std::sync::Arc;

use hs_shared::utils::phone::{mask_phone_number, normalize_phone_number};

use crate::domain::entities::one_time_code::{hash_code, OneTimeCode, CODE_LENGTH};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::services::notification::{templates, NotificationOutcome, NotificationSender, Notifier};

use super::config::VerificationServiceConfig;
use super::traits::{CodeCheck, CodeStore};
use super::types::SendCodeResult;

/// Verification service for handling SMS verification codes
pub struct VerificationService<N: NotificationSender, C: CodeStore> {
    notifier: Notifier<N>,
    store: Arc<C>,
    config: VerificationServiceConfig,
}

impl<N: NotificationSender, C: CodeStore> VerificationService<N, C> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `sender` - SMS delivery
    /// * `store` - Keyed storage for hashed codes
    /// * `config` - Service configuration
    pub fn new(sender: Arc<N>, store: Arc<C>, config: VerificationServiceConfig) -> Self {
        let notifier = Notifier::new(sender, config.notification_timeout());
        Self {
            notifier,
            store,
            config,
        }
    }

    /// Normalize a phone number and reject anything the sender cannot deliver to
    pub fn normalize_phone(&self, phone: &str) -> DomainResult<String> {
        let normalized = normalize_phone_number(phone);
        if !self.notifier.sender().is_deliverable(&normalized) {
            return Err(AuthError::InvalidPhoneFormat {
                phone: mask_phone_number(&normalized),
            }
            .into());
        }
        Ok(normalized)
    }

    /// Send a verification code to a phone number
    ///
    /// # Errors
    ///
    /// * `InvalidPhoneFormat` - not a deliverable E.164 number
    /// * `RateLimitExceeded` - a code was sent less than the cooldown ago
    /// * `SmsServiceFailure` - the provider did not accept the message
    pub async fn send_verification_code(&self, phone: &str) -> DomainResult<SendCodeResult> {
        let phone = self.normalize_phone(phone)?;
        let masked = mask_phone_number(&phone);

        if let Some(wait) = self.cooldown_remaining(&phone).await? {
            tracing::warn!(phone = %masked, wait_seconds = wait, event = "verification_rate_limited", "Resend requested too early");
            return Err(AuthError::RateLimitExceeded { seconds: wait }.into());
        }

        let code = OneTimeCode::generate();
        self.store
            .store_code(&phone, &code.hash(), self.config.code_ttl_seconds)
            .await
            .map_err(DomainError::internal)?;

        let body = templates::verification_code(code.as_str(), self.config.code_ttl_minutes());
        let message_id = match self.notifier.notify(Some(&phone), &body, "verification_code_sent").await {
            NotificationOutcome::Sent { message_id } => message_id,
            _ => {
                // A code the user never received must not block the next request
                if let Err(e) = self.store.clear(&phone).await {
                    tracing::error!(phone = %masked, error = %e, "Failed to clear undelivered code");
                }
                return Err(AuthError::SmsServiceFailure.into());
            }
        };

        let now = Utc::now();
        Ok(SendCodeResult {
            phone,
            message_id,
            expires_at: now + Duration::seconds(self.config.code_ttl_seconds as i64),
            next_resend_at: now + Duration::seconds(self.config.resend_cooldown_seconds as i64),
        })
    }

    /// Verify a code previously sent to `phone`; the code is consumed on success
    ///
    /// # Errors
    ///
    /// * `InvalidVerificationCode` - malformed or wrong code
    /// * `VerificationCodeExpired` - no code outstanding or it expired
    /// * `MaxAttemptsExceeded` - too many wrong codes; a new one must be requested
    pub async fn verify_code(&self, phone: &str, code: &str) -> DomainResult<String> {
        let phone = self.normalize_phone(phone)?;
        let masked = mask_phone_number(&phone);

        let code = code.trim();
        if code.len() != CODE_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(AuthError::InvalidVerificationCode.into());
        }

        let check = self
            .store
            .verify_code(&phone, &hash_code(code), self.config.max_attempts)
            .await
            .map_err(DomainError::internal)?;

        match check {
            CodeCheck::Matched => {
                tracing::info!(phone = %masked, event = "verification_succeeded", "Phone number verified");
                Ok(phone)
            }
            CodeCheck::Mismatch { remaining_attempts } => {
                tracing::warn!(
                    phone = %masked,
                    remaining_attempts = remaining_attempts,
                    event = "verification_failed",
                    "Wrong verification code"
                );
                Err(AuthError::InvalidVerificationCode.into())
            }
            CodeCheck::Missing => Err(AuthError::VerificationCodeExpired.into()),
            CodeCheck::AttemptsExhausted => {
                tracing::warn!(phone = %masked, event = "verification_locked", "Verification attempts exhausted");
                Err(AuthError::MaxAttemptsExceeded.into())
            }
        }
    }

    /// Seconds left before another code may be sent, if any
    async fn cooldown_remaining(&self, phone: &str) -> DomainResult<Option<u64>> {
        let ttl = self
            .store
            .code_ttl(phone)
            .await
            .map_err(DomainError::internal)?;

        Ok(ttl.and_then(|remaining| {
            let elapsed = self.config.code_ttl_seconds as i64 - remaining;
            let wait = self.config.resend_cooldown_seconds as i64 - elapsed;
            (wait > 0).then_some(wait as u64)
        }))
    }
}
