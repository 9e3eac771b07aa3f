use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use hs_core::domain::entities::UserRole;
use hs_core::domain::value_objects::AuthResponse;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendCodeRequest {
    /// Full E.164 number, or the national part when `countryCode` is given
    #[validate(length(min = 4, max = 20))]
    pub phone: String,

    /// Calling code with or without '+', e.g. "61" or "+61"
    #[validate(length(min = 1, max = 5))]
    pub country_code: Option<String>,
}

impl SendCodeRequest {
    pub fn full_phone(&self) -> String {
        join_phone(&self.phone, self.country_code.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeRequest {
    #[validate(length(min = 4, max = 20))]
    pub phone: String,

    #[validate(length(min = 1, max = 5))]
    pub country_code: Option<String>,

    /// 6-digit verification code
    #[validate(length(equal = 6))]
    pub code: String,

    /// Role for a new account; `customer` when absent
    pub role: Option<UserRole>,
}

impl VerifyCodeRequest {
    pub fn full_phone(&self) -> String {
        join_phone(&self.phone, self.country_code.as_deref())
    }
}

fn join_phone(phone: &str, country_code: Option<&str>) -> String {
    let phone = phone.trim();
    match country_code {
        Some(code) if !phone.starts_with('+') => {
            format!("+{}{}", code.trim().trim_start_matches('+'), phone.trim_start_matches('0'))
        }
        _ => phone.to_string(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendCodeResponse {
    pub message: String,
    /// Seconds until another code may be requested
    pub resend_after: i64,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseDto {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user_id: Uuid,
    pub role: UserRole,
    pub is_new_user: bool,
}

impl From<AuthResponse> for AuthResponseDto {
    fn from(response: AuthResponse) -> Self {
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            expires_in: response.expires_in,
            user_id: response.user_id,
            role: response.role,
            is_new_user: response.is_new_user,
        }
    }
}
