//! Provider listings and the catalog services they belong to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::rating::RatingAggregate;

/// Catalog entry a listing is offered under; read-only here
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogService {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
}

/// A worker's offering of one catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderListing {
    pub id: Uuid,
    pub service_id: Uuid,
    /// Owning worker
    pub worker_id: Uuid,
    pub name: String,
    /// Free-text price as entered by the worker
    pub price: Option<String>,
    pub description: String,
    pub rating: RatingAggregate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProviderListing {
    pub fn new(
        service_id: Uuid,
        worker_id: Uuid,
        name: String,
        price: Option<String>,
        description: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            service_id,
            worker_id,
            name,
            price,
            description,
            rating: RatingAggregate::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.worker_id == user_id
    }
}
