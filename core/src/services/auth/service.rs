//! Main authentication service implementation

use std::sync::Arc;
use uuid::Uuid;

use hs_shared::utils::phone::mask_phone_number;

use crate::domain::entities::user::{User, UserRole};
use crate::domain::value_objects::{Actor, AuthResponse};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::notification::NotificationSender;
use crate::services::token::TokenService;
use crate::services::verification::{CodeStore, SendCodeResult, VerificationService};

/// Authentication service for the phone verification flow
pub struct AuthService<U, N, C>
where
    U: UserRepository,
    N: NotificationSender,
    C: CodeStore,
{
    users: Arc<U>,
    verification: Arc<VerificationService<N, C>>,
    tokens: Arc<TokenService>,
}

impl<U, N, C> AuthService<U, N, C>
where
    U: UserRepository,
    N: NotificationSender,
    C: CodeStore,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `users` - User repository
    /// * `verification` - Code delivery and checking
    /// * `tokens` - Access token issuer
    pub fn new(users: Arc<U>, verification: Arc<VerificationService<N, C>>, tokens: Arc<TokenService>) -> Self {
        Self {
            users,
            verification,
            tokens,
        }
    }

    /// Send a login code to `phone`
    pub async fn send_code(&self, phone: &str) -> DomainResult<SendCodeResult> {
        self.verification.send_verification_code(phone).await
    }

    /// Verify a login code, registering the phone number on first use
    ///
    /// New accounts take `requested_role` (customer when absent). Existing
    /// accounts keep their role. Admin accounts are never created here.
    pub async fn verify_code(
        &self,
        phone: &str,
        code: &str,
        requested_role: Option<UserRole>,
    ) -> DomainResult<AuthResponse> {
        if requested_role == Some(UserRole::Admin) {
            return Err(ValidationError::InvalidFormat {
                field: "role".to_string(),
            }
            .into());
        }

        let phone = self.verification.verify_code(phone, code).await?;
        let (user, is_new_user) = self
            .find_or_register(&phone, requested_role.unwrap_or(UserRole::Customer))
            .await?;

        let access_token = self.tokens.generate_access_token(user.id, user.role)?;

        tracing::info!(
            user_id = %user.id,
            role = %user.role,
            is_new_user = is_new_user,
            event = "login_succeeded",
            "User signed in"
        );

        Ok(AuthResponse::new(
            access_token,
            self.tokens.access_token_expiry(),
            user.id,
            user.role,
            is_new_user,
        ))
    }

    /// Every registered user; admin only
    pub async fn list_users(&self, actor: Actor) -> DomainResult<Vec<User>> {
        if !actor.is_admin() {
            return Err(DomainError::forbidden());
        }
        self.users.list().await
    }

    /// Remove a user; admin only
    pub async fn delete_user(&self, actor: Actor, user_id: Uuid) -> DomainResult<()> {
        if !actor.is_admin() {
            return Err(DomainError::forbidden());
        }
        if !self.users.delete(user_id).await? {
            return Err(DomainError::not_found("User"));
        }
        tracing::info!(user_id = %user_id, admin_id = %actor.user_id, event = "user_deleted", "User deleted");
        Ok(())
    }

    async fn find_or_register(&self, phone: &str, role: UserRole) -> DomainResult<(User, bool)> {
        if let Some(user) = self.users.find_by_phone(phone).await? {
            return Ok((user, false));
        }

        match self.users.create(User::from_phone(phone, role)).await {
            Ok(user) => {
                tracing::info!(
                    user_id = %user.id,
                    phone = %mask_phone_number(phone),
                    role = %role,
                    event = "user_registered",
                    "New user registered"
                );
                Ok((user, true))
            }
            // Lost a registration race for the same phone number
            Err(e) => match self.users.find_by_phone(phone).await? {
                Some(user) => Ok((user, false)),
                None => Err(e),
            },
        }
    }
}
