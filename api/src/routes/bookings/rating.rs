use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::booking::{BookingDto, RateRequest, RateResponse, RatingValueResponse};
use crate::dto::listing::RatingDto;
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::state::{AppState, Backend};

/// Handler for POST /api/v1/bookings/{id}/rate
pub async fn submit_rating<P: Backend>(
    state: web::Data<AppState<P>>,
    path: web::Path<Uuid>,
    request: web::Json<RateRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.booking_service.submit_rating(path.into_inner(), request.rating).await {
        Ok(submitted) => HttpResponse::Ok().json(RateResponse {
            message: "Rating submitted successfully".to_string(),
            booking: BookingDto::from(&submitted.booking),
            listing_rating: RatingDto::from(&submitted.listing_rating),
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/bookings/{id}/rate
pub async fn get_rating<P: Backend>(state: web::Data<AppState<P>>, path: web::Path<Uuid>) -> HttpResponse {
    match state.booking_service.get_rating(path.into_inner()).await {
        Ok(rating) => HttpResponse::Ok().json(RatingValueResponse { rating }),
        Err(error) => handle_domain_error(error),
    }
}
