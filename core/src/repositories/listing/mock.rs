//! In-memory implementation of ProviderListingRepository

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::provider_listing::ProviderListing;
use crate::domain::entities::rating::RatingAggregate;
use crate::errors::DomainError;

use super::trait_::ProviderListingRepository;

/// Mock listing repository for tests and local runs
pub struct MockProviderListingRepository {
    listings: Arc<RwLock<HashMap<Uuid, ProviderListing>>>,
}

impl MockProviderListingRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            listings: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockProviderListingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderListingRepository for MockProviderListingRepository {
    async fn create(&self, listing: ProviderListing) -> Result<ProviderListing, DomainError> {
        let mut listings = self.listings.write().await;
        listings.insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProviderListing>, DomainError> {
        let listings = self.listings.read().await;
        Ok(listings.get(&id).cloned())
    }

    async fn find_by_service(&self, service_id: Uuid) -> Result<Vec<ProviderListing>, DomainError> {
        let listings = self.listings.read().await;
        let mut found: Vec<ProviderListing> = listings
            .values()
            .filter(|l| l.service_id == service_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(found)
    }

    async fn find_by_worker(&self, worker_id: Uuid) -> Result<Vec<ProviderListing>, DomainError> {
        let listings = self.listings.read().await;
        Ok(listings
            .values()
            .filter(|l| l.worker_id == worker_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut listings = self.listings.write().await;
        Ok(listings.remove(&id).is_some())
    }

    async fn update_rating(&self, id: Uuid, rating: RatingAggregate) -> Result<bool, DomainError> {
        let mut listings = self.listings.write().await;
        match listings.get_mut(&id) {
            Some(listing) => {
                listing.rating = rating;
                listing.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
