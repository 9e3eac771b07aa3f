//! Admin user management

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::booking::MessageResponse;
use crate::dto::user::{UserDto, UserListResponse};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::state::{AppState, Backend};

/// GET /api/v1/users
pub async fn list_users<P: Backend>(auth: AuthContext, state: web::Data<AppState<P>>) -> HttpResponse {
    match state.auth_service.list_users(auth.actor()).await {
        Ok(users) => HttpResponse::Ok().json(UserListResponse {
            users: users.iter().map(UserDto::from).collect(),
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// DELETE /api/v1/users/{id}
pub async fn delete_user<P: Backend>(
    auth: AuthContext,
    state: web::Data<AppState<P>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = path.into_inner();
    match state.auth_service.delete_user(auth.actor(), user_id).await {
        Ok(()) => {
            log::info!("User {} deleted by admin {}", user_id, auth.user_id);
            HttpResponse::Ok().json(MessageResponse {
                message: "User deleted successfully".to_string(),
            })
        }
        Err(error) => handle_domain_error(error),
    }
}
