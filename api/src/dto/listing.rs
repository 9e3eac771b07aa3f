use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use hs_core::domain::entities::{ProviderListing, RatingAggregate};
use hs_core::services::NewListing;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateListingRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Free text, e.g. "$80/hour"
    #[validate(length(max = 64))]
    pub price: Option<String>,

    #[validate(length(min = 1, max = 4000))]
    pub description: String,
}

impl From<CreateListingRequest> for NewListing {
    fn from(request: CreateListingRequest) -> Self {
        Self {
            name: request.name,
            price: request.price,
            description: request.description,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingDto {
    pub total_score: f64,
    pub count: u32,
    pub average: f64,
}

impl From<&RatingAggregate> for RatingDto {
    fn from(rating: &RatingAggregate) -> Self {
        Self {
            total_score: rating.total_score,
            count: rating.count,
            average: rating.average,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDto {
    pub id: Uuid,
    pub service_id: Uuid,
    pub worker_id: Uuid,
    pub name: String,
    pub price: Option<String>,
    pub description: String,
    pub rating: RatingDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&ProviderListing> for ListingDto {
    fn from(listing: &ProviderListing) -> Self {
        Self {
            id: listing.id,
            service_id: listing.service_id,
            worker_id: listing.worker_id,
            name: listing.name.clone(),
            price: listing.price.clone(),
            description: listing.description.clone(),
            rating: RatingDto::from(&listing.rating),
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResponse {
    pub provider: ListingDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingListResponse {
    pub providers: Vec<ListingDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRatingResponse {
    pub provider_listing_id: Uuid,
    pub rating: RatingDto,
}
