//! The authenticated caller of a service operation.

use uuid::Uuid;

use crate::domain::entities::user::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl Actor {
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_worker(&self) -> bool {
        self.role == UserRole::Worker
    }

    /// The caller is `user_id` or an admin
    pub fn can_act_for(&self, user_id: Uuid) -> bool {
        self.is_admin() || self.user_id == user_id
    }
}
