//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Books services; `user` is accepted as a legacy alias
    #[serde(alias = "user")]
    Customer,
    /// Offers services through provider listings
    Worker,
    /// Manages users and sees every booking
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Worker => "worker",
            UserRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "customer" | "user" => Ok(UserRole::Customer),
            "worker" => Ok(UserRole::Worker),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: Option<String>,

    /// Contact email
    pub email: Option<String>,

    /// Phone number in E.164 format; unique when present
    pub phone: Option<String>,

    /// Account role
    pub role: UserRole,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user
    pub fn new(name: Option<String>, phone: Option<String>, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email: None,
            phone,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates an account registered through phone verification
    pub fn from_phone(phone: impl Into<String>, role: UserRole) -> Self {
        Self::new(None, Some(phone.into()), role)
    }

    pub fn is_worker(&self) -> bool {
        self.role == UserRole::Worker
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Phone number to notify, if any
    pub fn contact(&self) -> Option<&str> {
        self.phone.as_deref().filter(|p| !p.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_phone() {
        let user = User::from_phone("+14155552671", UserRole::Customer);
        assert_eq!(user.phone.as_deref(), Some("+14155552671"));
        assert_eq!(user.role, UserRole::Customer);
        assert!(user.name.is_none());
        assert!(!user.is_worker());
    }

    #[test]
    fn test_contact_ignores_blank_phone() {
        let user = User::new(Some("Asha".to_string()), Some("  ".to_string()), UserRole::Customer);
        assert!(user.contact().is_none());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&UserRole::Worker).unwrap(), "\"worker\"");
        let legacy: UserRole = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(legacy, UserRole::Customer);
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("guest".parse::<UserRole>().is_err());
    }
}
