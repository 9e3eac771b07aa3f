//! In-memory catalog seeded by the caller

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::provider_listing::CatalogService;
use crate::errors::DomainError;

use super::trait_::CatalogRepository;

pub struct MockCatalogRepository {
    services: Arc<RwLock<HashMap<Uuid, CatalogService>>>,
}

impl MockCatalogRepository {
    pub fn new() -> Self {
        Self {
            services: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add a catalog service
    pub async fn add_service(&self, service: CatalogService) {
        self.services.write().await.insert(service.id, service);
    }
}

impl Default for MockCatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepository for MockCatalogRepository {
    async fn find_service(&self, id: Uuid) -> Result<Option<CatalogService>, DomainError> {
        Ok(self.services.read().await.get(&id).cloned())
    }
}
