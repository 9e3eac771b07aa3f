//! Read-only access to the service catalog.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::provider_listing::CatalogService;
use crate::errors::DomainError;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Resolve a catalog service by id
    async fn find_service(&self, id: Uuid) -> Result<Option<CatalogService>, DomainError>;
}
