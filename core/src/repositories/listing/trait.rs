//! Provider listing repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::provider_listing::ProviderListing;
use crate::domain::entities::rating::RatingAggregate;
use crate::errors::DomainError;

#[async_trait]
pub trait ProviderListingRepository: Send + Sync {
    /// Persist a new listing
    async fn create(&self, listing: ProviderListing) -> Result<ProviderListing, DomainError>;

    /// Find a listing by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProviderListing>, DomainError>;

    /// Listings offered under a catalog service
    async fn find_by_service(&self, service_id: Uuid) -> Result<Vec<ProviderListing>, DomainError>;

    /// Listings owned by a worker
    async fn find_by_worker(&self, worker_id: Uuid) -> Result<Vec<ProviderListing>, DomainError>;

    /// Delete a listing
    ///
    /// # Returns
    /// * `Ok(true)` - Listing was deleted
    /// * `Ok(false)` - Listing not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Overwrite the rating aggregate; `Ok(false)` when the listing is gone
    async fn update_rating(&self, id: Uuid, rating: RatingAggregate) -> Result<bool, DomainError>;
}
