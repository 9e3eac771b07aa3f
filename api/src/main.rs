use std::marker::PhantomData;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use hs_api::{create_app, AppState, Backend};
use hs_core::services::{
    AuthService, BookingService, BookingServiceConfig, CodeStore, InMemoryCodeStore, ListingService,
    TokenService, TokenServiceConfig, VerificationService, VerificationServiceConfig,
};
use hs_infra::cache::{RedisClient, RedisCodeStore};
use hs_infra::database::{
    DatabasePool, MySqlBookingRepository, MySqlCatalogRepository, MySqlProviderListingRepository,
    MySqlUserRepository,
};
use hs_infra::sms::{create_sms_service, SmsNotificationSender, SmsService};
use hs_shared::config::{AppConfig, LogFormat, LoggingConfig};

/// MySQL repositories, SMS delivery and a verification code store `C`
struct Production<C>(PhantomData<C>);

impl<C: CodeStore + 'static> Backend for Production<C> {
    type Users = MySqlUserRepository;
    type Bookings = MySqlBookingRepository;
    type Listings = MySqlProviderListingRepository;
    type Catalog = MySqlCatalogRepository;
    type Sender = SmsNotificationSender<dyn SmsService>;
    type Codes = C;
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    log::info!("Starting HomeServe API Server ({})", config.environment);
    if config.auth.jwt.is_using_default_secret() {
        log::warn!("Using the default JWT secret; set HOMESERVE__AUTH__JWT__SECRET");
    }

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the database")?;
    pool.run_migrations().await.context("Failed to run migrations")?;

    let sms = create_sms_service(&config.notification).context("Failed to configure SMS")?;
    log::info!("SMS provider: {}", sms.provider_name());
    let sender = Arc::new(SmsNotificationSender::new(sms));

    let result = if config.cache.enabled {
        let redis = RedisClient::new(config.cache.clone())
            .await
            .context("Failed to connect to Redis")?;
        serve(&config, &pool, sender, Arc::new(RedisCodeStore::new(redis))).await
    } else {
        log::warn!("Redis disabled; verification codes are kept in process memory");
        serve(&config, &pool, sender, Arc::new(InMemoryCodeStore::new())).await
    };

    pool.close().await;
    result
}

async fn serve<C: CodeStore + 'static>(
    config: &AppConfig,
    pool: &DatabasePool,
    sender: Arc<SmsNotificationSender<dyn SmsService>>,
    codes: Arc<C>,
) -> anyhow::Result<()> {
    let db = pool.get_pool().clone();
    let users = Arc::new(MySqlUserRepository::new(db.clone()));
    let bookings = Arc::new(MySqlBookingRepository::new(db.clone()));
    let listings = Arc::new(MySqlProviderListingRepository::new(db.clone()));
    let catalog = Arc::new(MySqlCatalogRepository::new(db));

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
    let verification_service = Arc::new(VerificationService::new(
        sender.clone(),
        codes,
        VerificationServiceConfig::from_settings(&config.auth.verification, &config.notification),
    ));
    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        verification_service,
        token_service.clone(),
    ));
    let booking_service = Arc::new(BookingService::new(
        bookings,
        listings.clone(),
        users,
        sender,
        BookingServiceConfig::from_settings(&config.booking, &config.notification),
    ));
    let listing_service = Arc::new(ListingService::new(listings, catalog));

    let state = web::Data::new(AppState::<Production<C>>::new(
        auth_service,
        booking_service,
        listing_service,
        token_service,
    ));

    let bind_address = config.server.bind_address();
    log::info!("Server will bind to: {}", bind_address);

    let cors = config.cors.clone();
    let json_limit = config.server.max_payload_size;
    let mut server = HttpServer::new(move || create_app(state.clone(), &cors, json_limit))
        .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;
    log::info!("Server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    if let Err(e) = result {
        eprintln!("Failed to install log subscriber: {}", e);
    }
}
