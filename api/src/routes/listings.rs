//! Provider listings under `/api/v1/services/{serviceId}/providers`

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::listing::{
    CreateListingRequest, ListingDto, ListingListResponse, ListingRatingResponse, ListingResponse,
    RatingDto,
};
use crate::dto::booking::MessageResponse;
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::middleware::AuthContext;
use crate::state::{AppState, Backend};

/// GET /services/{serviceId}/providers
pub async fn list_listings<P: Backend>(state: web::Data<AppState<P>>, path: web::Path<Uuid>) -> HttpResponse {
    match state.listing_service.list_for_service(path.into_inner()).await {
        Ok(listings) => HttpResponse::Ok().json(ListingListResponse {
            providers: listings.iter().map(ListingDto::from).collect(),
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /services/{serviceId}/providers/{listingId}
pub async fn get_listing<P: Backend>(
    state: web::Data<AppState<P>>,
    path: web::Path<(Uuid, Uuid)>,
) -> HttpResponse {
    let (service_id, listing_id) = path.into_inner();
    match state.listing_service.get_listing(service_id, listing_id).await {
        Ok(listing) => HttpResponse::Ok().json(ListingResponse {
            provider: ListingDto::from(&listing),
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// POST /services/{serviceId}/providers; workers only
pub async fn create_listing<P: Backend>(
    auth: AuthContext,
    state: web::Data<AppState<P>>,
    path: web::Path<Uuid>,
    request: web::Json<CreateListingRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .listing_service
        .create_listing(auth.actor(), path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(listing) => {
            log::info!("Listing {} created by worker {}", listing.id, auth.user_id);
            HttpResponse::Created().json(ListingResponse {
                provider: ListingDto::from(&listing),
            })
        }
        Err(error) => handle_domain_error(error),
    }
}

/// DELETE /services/{serviceId}/providers/{listingId}; owning worker only
pub async fn delete_listing<P: Backend>(
    auth: AuthContext,
    state: web::Data<AppState<P>>,
    path: web::Path<(Uuid, Uuid)>,
) -> HttpResponse {
    let (service_id, listing_id) = path.into_inner();
    match state
        .listing_service
        .delete_listing(auth.actor(), service_id, listing_id)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Service provider deleted successfully".to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /providers/{listingId}/rating
pub async fn get_listing_rating<P: Backend>(
    state: web::Data<AppState<P>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let listing_id = path.into_inner();
    match state.listing_service.get_listing_rating(listing_id).await {
        Ok(rating) => HttpResponse::Ok().json(ListingRatingResponse {
            provider_listing_id: listing_id,
            rating: RatingDto::from(&rating),
        }),
        Err(error) => handle_domain_error(error),
    }
}
