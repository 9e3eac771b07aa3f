use actix_web::{web, HttpResponse};
use chrono::Utc;
use validator::Validate;

use hs_shared::utils::phone::mask_phone_number;

use crate::dto::auth::{SendCodeRequest, SendCodeResponse};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::state::{AppState, Backend};

/// Handler for POST /api/v1/auth/send-code
///
/// # Request Body
///
/// ```json
/// { "phone": "412345678", "countryCode": "+61" }
/// ```
///
/// # Errors
/// - 400 invalid phone number
/// - 429 a code was sent less than the cooldown ago (`Retry-After` is set)
/// - 503 the SMS provider did not accept the message
pub async fn send_code<P: Backend>(
    state: web::Data<AppState<P>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let phone = request.full_phone();
    log::info!("Processing send_code request for phone: {}", mask_phone_number(&phone));

    match state.auth_service.send_code(&phone).await {
        Ok(result) => {
            let resend_after = result
                .next_resend_at
                .signed_duration_since(Utc::now())
                .num_seconds()
                .max(0);

            log::info!(
                "Verification code sent to {}, message_id: {}",
                mask_phone_number(&result.phone),
                result.message_id
            );

            HttpResponse::Ok().json(SendCodeResponse {
                message: "Verification code sent successfully. Please check your SMS.".to_string(),
                resend_after,
                expires_at: result.expires_at,
            })
        }
        Err(error) => handle_domain_error(error),
    }
}
