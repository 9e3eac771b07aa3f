//! Unit tests for the listing service

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::provider_listing::CatalogService;
use crate::domain::entities::user::UserRole;
use crate::domain::value_objects::Actor;
use crate::errors::{AuthError, DomainError};
use crate::repositories::{MockCatalogRepository, MockProviderListingRepository};
use crate::services::listing::{ListingService, NewListing};

async fn setup() -> (ListingService<MockProviderListingRepository, MockCatalogRepository>, Uuid) {
    let catalog = Arc::new(MockCatalogRepository::new());
    let service_id = Uuid::new_v4();
    catalog
        .add_service(CatalogService {
            id: service_id,
            category_id: Uuid::new_v4(),
            name: "Plumbing".to_string(),
            description: "Pipes, taps and drains".to_string(),
        })
        .await;
    let service = ListingService::new(Arc::new(MockProviderListingRepository::new()), catalog);
    (service, service_id)
}

fn input() -> NewListing {
    NewListing {
        name: " Ravi Plumbing ".to_string(),
        price: Some("499".to_string()),
        description: "Leak repairs".to_string(),
    }
}

#[tokio::test]
async fn test_worker_creates_listing() {
    let (service, service_id) = setup().await;
    let worker = Actor::new(Uuid::new_v4(), UserRole::Worker);

    let listing = service.create_listing(worker, service_id, input()).await.unwrap();

    assert_eq!(listing.name, "Ravi Plumbing");
    assert_eq!(listing.worker_id, worker.user_id);
    assert_eq!(listing.rating.count, 0);
    assert_eq!(service.list_for_service(service_id).await.unwrap().len(), 1);
    assert_eq!(
        service.get_listing(service_id, listing.id).await.unwrap().id,
        listing.id
    );
}

#[tokio::test]
async fn test_customer_cannot_create_listing() {
    let (service, service_id) = setup().await;
    let customer = Actor::new(Uuid::new_v4(), UserRole::Customer);

    let result = service.create_listing(customer, service_id, input()).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));
}

#[tokio::test]
async fn test_unknown_service_is_not_found() {
    let (service, _) = setup().await;
    let worker = Actor::new(Uuid::new_v4(), UserRole::Worker);

    let result = service.create_listing(worker, Uuid::new_v4(), input()).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_blank_fields_are_rejected() {
    let (service, service_id) = setup().await;
    let worker = Actor::new(Uuid::new_v4(), UserRole::Worker);

    let mut blank = input();
    blank.description = "  ".to_string();
    let result = service.create_listing(worker, service_id, blank).await;
    assert!(matches!(result, Err(DomainError::ValidationErr(_))));
}

#[tokio::test]
async fn test_only_owner_deletes() {
    let (service, service_id) = setup().await;
    let owner = Actor::new(Uuid::new_v4(), UserRole::Worker);
    let other = Actor::new(Uuid::new_v4(), UserRole::Worker);
    let listing = service.create_listing(owner, service_id, input()).await.unwrap();

    let denied = service.delete_listing(other, service_id, listing.id).await;
    assert!(matches!(
        denied,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));

    service.delete_listing(owner, service_id, listing.id).await.unwrap();
    let gone = service.get_listing(service_id, listing.id).await;
    assert!(matches!(gone, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_listing_under_wrong_service_is_not_found() {
    let (service, service_id) = setup().await;
    let owner = Actor::new(Uuid::new_v4(), UserRole::Worker);
    let listing = service.create_listing(owner, service_id, input()).await.unwrap();

    let result = service.get_listing(Uuid::new_v4(), listing.id).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));

    let rating = service.get_listing_rating(listing.id).await.unwrap();
    assert_eq!(rating.average, 0.0);
}
