//! Twilio SMS Service Implementation
//!
//! Numbers are normalized to E.164 with `phonenumber` before sending. Rate
//! limits and 5xx responses are retried with exponential backoff; other
//! errors fail immediately.

use async_trait::async_trait;
use phonenumber::{Mode, PhoneNumber};
use std::time::Duration;
use tracing::{debug, error, info, warn};
use twilio::{Client, OutboundMessage};

use hs_shared::config::TwilioConfig;
use hs_shared::utils::phone::mask_phone_number;

use super::sms_service::SmsService;
use crate::InfrastructureError;

/// Twilio's limit on a single message body
const MAX_MESSAGE_LENGTH: usize = 1600;

#[derive(Debug, Clone)]
pub struct TwilioSmsConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
}

impl TwilioSmsConfig {
    pub fn from_settings(twilio: &TwilioConfig, max_retries: u32) -> Self {
        Self {
            account_sid: twilio.account_sid.clone(),
            auth_token: twilio.auth_token.clone(),
            from_number: twilio.from_number.clone(),
            max_retries: max_retries.max(1),
            retry_delay_ms: 1000,
        }
    }
}

pub struct TwilioSmsService {
    client: Client,
    config: TwilioSmsConfig,
}

impl TwilioSmsService {
    pub fn new(config: TwilioSmsConfig) -> Result<Self, InfrastructureError> {
        if config.account_sid.is_empty() || config.auth_token.is_empty() {
            return Err(InfrastructureError::Config(
                "Twilio account SID and auth token are required".to_string(),
            ));
        }
        if !config.from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "Twilio from number must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        let client = Client::new(&config.account_sid, &config.auth_token);
        info!(from = %mask_phone_number(&config.from_number), "Twilio SMS service initialized");
        Ok(Self { client, config })
    }

    async fn send_with_retry(&self, to: &str, message: &str) -> Result<String, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;
            debug!(
                phone = %mask_phone_number(to),
                attempt = attempts,
                max_retries = self.config.max_retries,
                "Sending SMS via Twilio"
            );

            let msg = OutboundMessage::new(&self.config.from_number, to, message);
            match self.client.send_message(msg).await {
                Ok(response) => {
                    info!(phone = %mask_phone_number(to), sid = %response.sid, "SMS sent");
                    return Ok(response.sid);
                }
                Err(e) => {
                    let reason = e.to_string();
                    error!(attempt = attempts, error = %reason, "Twilio send failed");

                    if attempts >= self.config.max_retries {
                        return Err(InfrastructureError::Sms(format!(
                            "Failed to send SMS after {} attempts: {}",
                            attempts, reason
                        )));
                    }
                    if !is_retryable(&reason) {
                        return Err(InfrastructureError::Sms(format!("Invalid request: {}", reason)));
                    }

                    warn!(retry_in_ms = delay.as_millis() as u64, "Retrying Twilio send");
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }
}

/// E.164 form of `phone`, if it is a valid number
pub(crate) fn normalize_e164(phone: &str) -> Option<String> {
    let parsed = phone.parse::<PhoneNumber>().ok()?;
    phonenumber::is_valid(&parsed).then(|| parsed.format().mode(Mode::E164).to_string())
}

/// Rate limits, server errors and transport failures are worth another try
pub(crate) fn is_retryable(reason: &str) -> bool {
    let reason = reason.to_lowercase();
    if reason.contains("400") || reason.contains("invalid") {
        return false;
    }
    ["429", "rate", "500", "502", "503", "504", "timed out", "timeout", "connection"]
        .iter()
        .any(|marker| reason.contains(marker))
}

#[async_trait]
impl SmsService for TwilioSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let to = normalize_e164(phone_number).ok_or_else(|| {
            InfrastructureError::Sms(format!(
                "Invalid phone number format: {}",
                mask_phone_number(phone_number)
            ))
        })?;

        if message.len() > MAX_MESSAGE_LENGTH {
            return Err(InfrastructureError::Sms(format!(
                "Message exceeds maximum length of {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        self.send_with_retry(&to, message).await
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }

    fn is_valid_phone_number(&self, phone_number: &str) -> bool {
        normalize_e164(phone_number).is_some()
    }
}
