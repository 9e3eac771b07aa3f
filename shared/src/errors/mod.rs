//! Shared error response structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Create an error response with details
    pub fn with_details(
        error: impl Into<String>,
        message: impl Into<String>,
        details: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: Some(details),
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Error codes returned in the `error` field
pub mod error_codes {
    pub const VALIDATION_ERROR: &str = "validation_error";
    pub const NOT_FOUND: &str = "not_found";
    pub const INVALID_STATE: &str = "invalid_state";
    pub const INVALID_OTP: &str = "invalid_otp";
    pub const OTP_EXPIRED: &str = "otp_expired";
    pub const UNAUTHORIZED: &str = "unauthorized";
    pub const INSUFFICIENT_PERMISSIONS: &str = "insufficient_permissions";
    pub const INVALID_TOKEN: &str = "invalid_token";
    pub const TOKEN_EXPIRED: &str = "token_expired";
    pub const INVALID_PHONE: &str = "invalid_phone";
    pub const INVALID_VERIFICATION_CODE: &str = "invalid_verification_code";
    pub const VERIFICATION_CODE_EXPIRED: &str = "verification_code_expired";
    pub const MAX_ATTEMPTS_EXCEEDED: &str = "max_attempts_exceeded";
    pub const RATE_LIMIT_EXCEEDED: &str = "rate_limit_exceeded";
    pub const SMS_SERVICE_FAILURE: &str = "sms_service_failure";
    pub const INTERNAL_ERROR: &str = "internal_error";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_details() {
        let response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "bad rating")
            .add_detail("field", "rating")
            .add_detail("max", 5);

        assert_eq!(response.error, "validation_error");
        let details = response.details.unwrap();
        assert_eq!(details["field"], "rating");
        assert_eq!(details["max"], 5);
    }

    #[test]
    fn test_details_omitted_when_empty() {
        let json = serde_json::to_value(ErrorResponse::new("not_found", "Booking not found")).unwrap();
        assert!(json.get("details").is_none());
        assert_eq!(json["message"], "Booking not found");
    }
}
