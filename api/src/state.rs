//! Application state shared by every handler

use std::sync::Arc;

use hs_core::repositories::{
    BookingRepository, CatalogRepository, ProviderListingRepository, UserRepository,
};
use hs_core::services::{
    AuthService, BookingService, CodeStore, ListingService, NotificationSender, TokenService,
};

/// Concrete adapters the services run on
pub trait Backend: 'static {
    type Users: UserRepository + 'static;
    type Bookings: BookingRepository + 'static;
    type Listings: ProviderListingRepository + 'static;
    type Catalog: CatalogRepository + 'static;
    type Sender: NotificationSender + 'static;
    type Codes: CodeStore + 'static;
}

pub type AuthServiceOf<P> =
    AuthService<<P as Backend>::Users, <P as Backend>::Sender, <P as Backend>::Codes>;

pub type BookingServiceOf<P> = BookingService<
    <P as Backend>::Bookings,
    <P as Backend>::Listings,
    <P as Backend>::Users,
    <P as Backend>::Sender,
>;

pub type ListingServiceOf<P> = ListingService<<P as Backend>::Listings, <P as Backend>::Catalog>;

/// Application state that holds shared services
pub struct AppState<P: Backend> {
    pub auth_service: Arc<AuthServiceOf<P>>,
    pub booking_service: Arc<BookingServiceOf<P>>,
    pub listing_service: Arc<ListingServiceOf<P>>,
    pub token_service: Arc<TokenService>,
}

impl<P: Backend> AppState<P> {
    pub fn new(
        auth_service: Arc<AuthServiceOf<P>>,
        booking_service: Arc<BookingServiceOf<P>>,
        listing_service: Arc<ListingServiceOf<P>>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            auth_service,
            booking_service,
            listing_service,
            token_service,
        }
    }
}
