//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::UserRole;

/// Returned after a phone number has been verified
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// Always "Bearer"
    pub token_type: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,

    pub user_id: Uuid,

    pub role: UserRole,

    /// Whether the account was created by this verification
    pub is_new_user: bool,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        expires_in: i64,
        user_id: Uuid,
        role: UserRole,
        is_new_user: bool,
    ) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user_id,
            role,
            is_new_user,
        }
    }
}
