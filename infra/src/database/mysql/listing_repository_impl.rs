//! MySQL implementation of the ProviderListingRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use hs_core::domain::entities::provider_listing::ProviderListing;
use hs_core::domain::entities::rating::RatingAggregate;
use hs_core::errors::DomainError;
use hs_core::repositories::ProviderListingRepository;

use super::uuid_column;
use crate::InfrastructureError;

const LISTING_COLUMNS: &str = "id, service_id, worker_id, name, price, description, \
     rating_total, rating_count, rating_average, created_at, updated_at";

/// MySQL implementation of ProviderListingRepository
pub struct MySqlProviderListingRepository {
    pool: MySqlPool,
}

impl MySqlProviderListingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_listing(row: &MySqlRow) -> Result<ProviderListing, InfrastructureError> {
        Ok(ProviderListing {
            id: uuid_column(row, "id")?,
            service_id: uuid_column(row, "service_id")?,
            worker_id: uuid_column(row, "worker_id")?,
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            description: row.try_get("description")?,
            rating: RatingAggregate {
                total_score: row.try_get("rating_total")?,
                count: row.try_get("rating_count")?,
                average: row.try_get("rating_average")?,
            },
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
        })
    }

    async fn fetch_where(&self, column: &str, value: Uuid) -> Result<Vec<ProviderListing>, DomainError> {
        let query = format!(
            "SELECT {} FROM provider_listings WHERE {} = ? ORDER BY created_at ASC",
            LISTING_COLUMNS, column
        );
        let rows = sqlx::query(&query)
            .bind(value.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(rows
            .iter()
            .map(Self::row_to_listing)
            .collect::<Result<Vec<_>, _>>()?)
    }
}

#[async_trait]
impl ProviderListingRepository for MySqlProviderListingRepository {
    async fn create(&self, listing: ProviderListing) -> Result<ProviderListing, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO provider_listings (
                id, service_id, worker_id, name, price, description,
                rating_total, rating_count, rating_average, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(listing.id.to_string())
        .bind(listing.service_id.to_string())
        .bind(listing.worker_id.to_string())
        .bind(&listing.name)
        .bind(&listing.price)
        .bind(&listing.description)
        .bind(listing.rating.total_score)
        .bind(listing.rating.count)
        .bind(listing.rating.average)
        .bind(listing.created_at)
        .bind(listing.updated_at)
        .execute(&self.pool)
        .await
        .map_err(InfrastructureError::from)?;

        Ok(listing)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProviderListing>, DomainError> {
        let query = format!("SELECT {} FROM provider_listings WHERE id = ? LIMIT 1", LISTING_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(row.as_ref().map(Self::row_to_listing).transpose()?)
    }

    async fn find_by_service(&self, service_id: Uuid) -> Result<Vec<ProviderListing>, DomainError> {
        self.fetch_where("service_id", service_id).await
    }

    async fn find_by_worker(&self, worker_id: Uuid) -> Result<Vec<ProviderListing>, DomainError> {
        self.fetch_where("worker_id", worker_id).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM provider_listings WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_rating(&self, id: Uuid, rating: RatingAggregate) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE provider_listings
            SET rating_total = ?, rating_count = ?, rating_average = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(rating.total_score)
        .bind(rating.count)
        .bind(rating.average)
        .bind(Utc::now())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(InfrastructureError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
