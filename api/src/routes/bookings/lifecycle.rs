use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use hs_core::domain::entities::UserRole;
use hs_core::errors::DomainError;

use crate::dto::booking::{
    BookingDto, BookingNoticeResponse, CreateBookingRequest, MessageResponse, NotifyRequest,
    OtpResultDto, ProofRequest, ProofResponse, ResendOtpResponse, VerifyOtpRequest,
};
use crate::dto::NotificationDto;
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::middleware::AuthContext;
use crate::state::{AppState, Backend};

/// Handler for POST /api/v1/bookings
///
/// Customers book for themselves; admins may book on behalf of any customer.
pub async fn create_booking<P: Backend>(
    auth: AuthContext,
    state: web::Data<AppState<P>>,
    request: web::Json<CreateBookingRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    let actor = auth.actor();
    let allowed = actor.is_admin()
        || (actor.role == UserRole::Customer && actor.user_id == request.customer_id);
    if !allowed {
        log::warn!(
            "User {} ({}) may not book for customer {}",
            actor.user_id,
            actor.role,
            request.customer_id
        );
        return handle_domain_error(DomainError::forbidden());
    }

    match state
        .booking_service
        .create_booking(request.customer_id, request.provider_listing_id, request.booking_date)
        .await
    {
        Ok(notice) => {
            log::info!("Booking {} created by {}", notice.booking.id, actor.user_id);
            HttpResponse::Ok().json(BookingNoticeResponse {
                message: "Booking created successfully".to_string(),
                booking: BookingDto::from(&notice.booking),
                notification: NotificationDto::from(&notice.notification),
            })
        }
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/bookings/notify
///
/// The worker's answer (`Accepted` or `Rejected`) to a pending booking.
pub async fn respond_to_booking<P: Backend>(
    state: web::Data<AppState<P>>,
    request: web::Json<NotifyRequest>,
) -> HttpResponse {
    let NotifyRequest { booking_id, message } = request.into_inner();

    match state.booking_service.respond_to_booking(booking_id, message).await {
        Ok(notice) => HttpResponse::Ok().json(BookingNoticeResponse {
            message: format!("Booking {}", message.as_str().to_lowercase()),
            booking: BookingDto::from(&notice.booking),
            notification: NotificationDto::from(&notice.notification),
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/bookings/{id}/proof
pub async fn attach_proof<P: Backend>(
    state: web::Data<AppState<P>>,
    path: web::Path<Uuid>,
    request: web::Json<ProofRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }
    let booking_id = path.into_inner();

    match state
        .booking_service
        .attach_proof(booking_id, &request.before_working, &request.after_working)
        .await
    {
        Ok(attached) => {
            log::info!("Proof attached to booking {}", booking_id);
            HttpResponse::Ok().json(ProofResponse {
                message: "Proof uploaded, OTP sent to the customer".to_string(),
                booking: BookingDto::from(&attached.booking),
                otp_result: OtpResultDto::from(&attached.otp),
            })
        }
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/bookings/{id}/resend-otp
pub async fn resend_otp<P: Backend>(state: web::Data<AppState<P>>, path: web::Path<Uuid>) -> HttpResponse {
    match state.booking_service.resend_otp(path.into_inner()).await {
        Ok(issuance) => HttpResponse::Ok().json(ResendOtpResponse {
            message: "A new OTP has been sent to the customer".to_string(),
            otp_result: OtpResultDto::from(&issuance),
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/bookings/{id}/verify-otp
pub async fn verify_otp<P: Backend>(
    state: web::Data<AppState<P>>,
    path: web::Path<Uuid>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }
    let booking_id = path.into_inner();

    match state.booking_service.verify_otp(booking_id, &request.otp).await {
        Ok(_) => {
            log::info!("Booking {} closed after OTP verification", booking_id);
            HttpResponse::Ok().json(MessageResponse {
                message: "OTP verified successfully".to_string(),
            })
        }
        Err(error) => handle_domain_error(error),
    }
}
