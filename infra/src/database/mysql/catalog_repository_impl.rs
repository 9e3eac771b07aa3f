//! MySQL implementation of the CatalogRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use hs_core::domain::entities::provider_listing::CatalogService;
use hs_core::errors::DomainError;
use hs_core::repositories::CatalogRepository;

use super::uuid_column;
use crate::InfrastructureError;

/// Read access to the `services` table
pub struct MySqlCatalogRepository {
    pool: MySqlPool,
}

impl MySqlCatalogRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for MySqlCatalogRepository {
    async fn find_service(&self, id: Uuid) -> Result<Option<CatalogService>, DomainError> {
        let row = sqlx::query("SELECT id, category_id, name, description FROM services WHERE id = ? LIMIT 1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(CatalogService {
            id: uuid_column(&row, "id")?,
            category_id: uuid_column(&row, "category_id")?,
            name: row.try_get("name").map_err(InfrastructureError::from)?,
            description: row.try_get("description").map_err(InfrastructureError::from)?,
        }))
    }
}
