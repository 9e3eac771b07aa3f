//! In-memory application used by the route tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{http::header, web};
use chrono::Utc;
use uuid::Uuid;

use hs_api::{AppState, Backend};
use hs_core::domain::entities::{CatalogService, ProviderListing, User, UserRole};
use hs_core::repositories::{
    BookingRepository, MockBookingRepository, MockCatalogRepository, MockProviderListingRepository,
    MockUserRepository, ProviderListingRepository, UserRepository,
};
use hs_core::services::{
    AuthService, BookingService, BookingServiceConfig, InMemoryCodeStore, ListingService,
    MockNotificationSender, TokenService, TokenServiceConfig, VerificationService,
    VerificationServiceConfig,
};

pub const CUSTOMER_PHONE: &str = "+14155550101";
pub const WORKER_PHONE: &str = "+14155550202";

pub struct InMemory;

impl Backend for InMemory {
    type Users = MockUserRepository;
    type Bookings = MockBookingRepository;
    type Listings = MockProviderListingRepository;
    type Catalog = MockCatalogRepository;
    type Sender = MockNotificationSender;
    type Codes = InMemoryCodeStore;
}

pub struct TestContext {
    pub state: web::Data<AppState<InMemory>>,
    pub users: Arc<MockUserRepository>,
    pub bookings: Arc<MockBookingRepository>,
    pub listings: Arc<MockProviderListingRepository>,
    pub catalog: Arc<MockCatalogRepository>,
    pub sender: Arc<MockNotificationSender>,
    pub tokens: Arc<TokenService>,
}

impl TestContext {
    pub fn new() -> Self {
        let users = Arc::new(MockUserRepository::new());
        let bookings = Arc::new(MockBookingRepository::new());
        let listings = Arc::new(MockProviderListingRepository::new());
        let catalog = Arc::new(MockCatalogRepository::new());
        let sender = Arc::new(MockNotificationSender::new());
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::default()));

        let verification = Arc::new(VerificationService::new(
            sender.clone(),
            Arc::new(InMemoryCodeStore::new()),
            VerificationServiceConfig::default(),
        ));
        let auth_service = Arc::new(AuthService::new(users.clone(), verification, tokens.clone()));
        let booking_service = Arc::new(BookingService::new(
            bookings.clone(),
            listings.clone(),
            users.clone(),
            sender.clone(),
            BookingServiceConfig::default(),
        ));
        let listing_service = Arc::new(ListingService::new(listings.clone(), catalog.clone()));

        let state = web::Data::new(AppState::new(
            auth_service,
            booking_service,
            listing_service,
            tokens.clone(),
        ));

        Self {
            state,
            users,
            bookings,
            listings,
            catalog,
            sender,
            tokens,
        }
    }

    pub async fn add_user(&self, phone: Option<&str>, role: UserRole) -> User {
        let user = User::new(None, phone.map(str::to_string), role);
        self.users.create(user).await.unwrap()
    }

    /// Catalog service plus a listing owned by `worker`
    pub async fn add_listing(&self, worker: &User) -> ProviderListing {
        let service_id = self.add_service().await;
        let listing = ProviderListing::new(
            service_id,
            worker.id,
            "Leak repair".to_string(),
            Some("$80/hour".to_string()),
            "Taps, pipes and drains".to_string(),
        );
        self.listings.create(listing).await.unwrap()
    }

    pub async fn add_service(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.catalog
            .add_service(CatalogService {
                id,
                category_id: Uuid::new_v4(),
                name: "Plumbing".to_string(),
                description: "Leaks and pipes".to_string(),
            })
            .await;
        id
    }

    pub async fn booking_count(&self) -> usize {
        self.bookings.find_all().await.unwrap().len()
    }

    pub fn bearer(&self, user: &User) -> (header::HeaderName, String) {
        let token = self.tokens.generate_access_token(user.id, user.role).unwrap();
        (header::AUTHORIZATION, format!("Bearer {}", token))
    }

    /// The six-digit code in the latest SMS to `phone`
    pub async fn last_code_to(&self, phone: &str) -> String {
        let message = self.sender.last_message_to(phone).await.expect("message was sent");
        message
            .body
            .split(|c: char| !c.is_ascii_digit())
            .find(|part| part.len() == 6)
            .expect("message carries a code")
            .to_string()
    }
}

pub fn booking_body(customer_id: Uuid, listing_id: Uuid) -> serde_json::Value {
    serde_json::json!({
        "customerId": customer_id,
        "providerListingId": listing_id,
        "bookingDate": (Utc::now() + chrono::Duration::days(3)).to_rfc3339(),
    })
}

/// A wrong code guaranteed to differ from `code`
pub fn wrong_code(code: &str) -> &'static str {
    if code == "000000" {
        "111111"
    } else {
        "000000"
    }
}
