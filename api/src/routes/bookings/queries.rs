use actix_web::{web, HttpResponse};
use uuid::Uuid;

use hs_core::domain::entities::UserRole;
use hs_core::errors::DomainError;

use crate::dto::booking::{BookingDto, BookingListResponse, BookingResponse};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::state::{AppState, Backend};

/// Handler for GET /api/v1/bookings/{id}; any signed-in user
pub async fn get_booking<P: Backend>(
    _auth: AuthContext,
    state: web::Data<AppState<P>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state.booking_service.get_booking(path.into_inner()).await {
        Ok(booking) => HttpResponse::Ok().json(BookingResponse {
            booking: BookingDto::from(&booking),
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/bookings; admin only
pub async fn list_all_bookings<P: Backend>(auth: AuthContext, state: web::Data<AppState<P>>) -> HttpResponse {
    if !auth.actor().is_admin() {
        return handle_domain_error(DomainError::forbidden());
    }

    match state.booking_service.list_all().await {
        Ok(bookings) => HttpResponse::Ok().json(BookingListResponse::from_bookings(&bookings)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/bookings/mybooking/{customerId}
pub async fn list_customer_bookings<P: Backend>(
    auth: AuthContext,
    state: web::Data<AppState<P>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let customer_id = path.into_inner();
    if !is_self_or_admin(&auth, customer_id, UserRole::Customer) {
        return handle_domain_error(DomainError::forbidden());
    }

    match state.booking_service.list_for_customer(customer_id).await {
        Ok(bookings) => HttpResponse::Ok().json(BookingListResponse::from_bookings(&bookings)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/bookings/requestedbooking/{workerId}
pub async fn list_worker_bookings<P: Backend>(
    auth: AuthContext,
    state: web::Data<AppState<P>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let worker_id = path.into_inner();
    if !is_self_or_admin(&auth, worker_id, UserRole::Worker) {
        return handle_domain_error(DomainError::forbidden());
    }

    match state.booking_service.list_for_provider_owner(worker_id).await {
        Ok(bookings) => HttpResponse::Ok().json(BookingListResponse::from_bookings(&bookings)),
        Err(error) => handle_domain_error(error),
    }
}

fn is_self_or_admin(auth: &AuthContext, subject: Uuid, role: UserRole) -> bool {
    let actor = auth.actor();
    actor.is_admin() || (actor.role == role && actor.user_id == subject)
}
