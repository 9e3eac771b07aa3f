//! Listing service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::provider_listing::ProviderListing;
use crate::domain::entities::rating::RatingAggregate;
use crate::domain::value_objects::Actor;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{CatalogRepository, ProviderListingRepository};

/// Fields a worker supplies when publishing a listing
#[derive(Debug, Clone)]
pub struct NewListing {
    pub name: String,
    pub price: Option<String>,
    pub description: String,
}

pub struct ListingService<L: ProviderListingRepository, C: CatalogRepository> {
    listings: Arc<L>,
    catalog: Arc<C>,
}

impl<L: ProviderListingRepository, C: CatalogRepository> ListingService<L, C> {
    pub fn new(listings: Arc<L>, catalog: Arc<C>) -> Self {
        Self { listings, catalog }
    }

    /// Publish a listing owned by the calling worker
    pub async fn create_listing(
        &self,
        actor: Actor,
        service_id: Uuid,
        input: NewListing,
    ) -> DomainResult<ProviderListing> {
        if !actor.is_worker() {
            return Err(DomainError::forbidden());
        }

        let name = non_blank("name", &input.name)?;
        let description = non_blank("description", &input.description)?;
        let price = input
            .price
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        if self.catalog.find_service(service_id).await?.is_none() {
            return Err(DomainError::not_found("Service"));
        }

        let listing = self
            .listings
            .create(ProviderListing::new(
                service_id,
                actor.user_id,
                name,
                price,
                description,
            ))
            .await?;

        tracing::info!(
            provider_listing_id = %listing.id,
            service_id = %service_id,
            worker_id = %actor.user_id,
            "Provider listing created"
        );
        Ok(listing)
    }

    /// Listings offered under a catalog service
    pub async fn list_for_service(&self, service_id: Uuid) -> DomainResult<Vec<ProviderListing>> {
        self.listings.find_by_service(service_id).await
    }

    /// A listing, which must belong to `service_id`
    pub async fn get_listing(&self, service_id: Uuid, listing_id: Uuid) -> DomainResult<ProviderListing> {
        self.listings
            .find_by_id(listing_id)
            .await?
            .filter(|l| l.service_id == service_id)
            .ok_or_else(|| DomainError::not_found("Service provider"))
    }

    /// Remove a listing; only its owning worker may do so
    pub async fn delete_listing(&self, actor: Actor, service_id: Uuid, listing_id: Uuid) -> DomainResult<()> {
        let listing = self.get_listing(service_id, listing_id).await?;
        if !actor.is_worker() || !listing.is_owned_by(actor.user_id) {
            tracing::warn!(
                provider_listing_id = %listing_id,
                user_id = %actor.user_id,
                "Rejected listing deletion by non-owner"
            );
            return Err(DomainError::forbidden());
        }

        if !self.listings.delete(listing_id).await? {
            return Err(DomainError::not_found("Service provider"));
        }
        tracing::info!(provider_listing_id = %listing_id, "Provider listing deleted");
        Ok(())
    }

    /// Rating aggregate of a listing
    pub async fn get_listing_rating(&self, listing_id: Uuid) -> DomainResult<RatingAggregate> {
        self.listings
            .find_by_id(listing_id)
            .await?
            .map(|l| l.rating)
            .ok_or_else(|| DomainError::not_found("Service provider"))
    }
}

fn non_blank(field: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        }
        .into());
    }
    Ok(trimmed.to_string())
}
