use actix_web::{web, HttpResponse};
use validator::Validate;

use hs_shared::utils::phone::mask_phone_number;

use crate::dto::auth::{AuthResponseDto, VerifyCodeRequest};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::state::{AppState, Backend};

/// Handler for POST /api/v1/auth/verify-code
///
/// Verifies the SMS code and signs the user in, registering the phone
/// number on first use with the requested role (`customer` or `worker`).
///
/// # Request Body
///
/// ```json
/// { "phone": "+61412345678", "code": "123456", "role": "worker" }
/// ```
///
/// # Errors
/// - 400 wrong or expired code, or `admin` requested
/// - 429 attempts exhausted; a new code must be requested
pub async fn verify_code<P: Backend>(
    state: web::Data<AppState<P>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let phone = request.full_phone();
    match state
        .auth_service
        .verify_code(&phone, &request.code, request.role)
        .await
    {
        Ok(response) => {
            log::info!(
                "User {} signed in from {} (new: {})",
                response.user_id,
                mask_phone_number(&phone),
                response.is_new_user
            );
            HttpResponse::Ok().json(AuthResponseDto::from(response))
        }
        Err(error) => handle_domain_error(error),
    }
}
