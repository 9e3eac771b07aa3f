//! Application factory
//!
//! Wires every route onto the shared [`AppState`]. Routes that need a
//! signed-in caller are wrapped in [`JwtAuth`]; the rest are open.

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};

use hs_shared::config::CorsConfig;

use crate::handlers::error::{json_error_handler, path_error_handler};
use crate::middleware::{create_cors, JwtAuth};
use crate::routes::{auth, bookings, health, listings, users};
use crate::state::{AppState, Backend};

/// Default limit on JSON request bodies
pub const DEFAULT_JSON_LIMIT: usize = 256 * 1024;

/// Create and configure the application with all dependencies
pub fn create_app<P: Backend>(
    app_state: web::Data<AppState<P>>,
    cors: &CorsConfig,
    json_limit: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let token_service = web::Data::from(app_state.token_service.clone());

    App::new()
        .app_data(app_state)
        .app_data(token_service)
        .app_data(
            web::JsonConfig::default()
                .limit(json_limit)
                .error_handler(json_error_handler),
        )
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .wrap(create_cors(cors))
        .wrap(Logger::default())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/send-code", web::post().to(auth::send_code::<P>))
                        .route("/verify-code", web::post().to(auth::verify_code::<P>)),
                )
                .service(booking_scope::<P>())
                .service(
                    web::scope("/services/{service_id}/providers")
                        .route("", web::get().to(listings::list_listings::<P>))
                        .route(
                            "",
                            web::post()
                                .to(listings::create_listing::<P>)
                                .wrap(JwtAuth::new()),
                        )
                        .route("/{listing_id}", web::get().to(listings::get_listing::<P>))
                        .route(
                            "/{listing_id}",
                            web::delete()
                                .to(listings::delete_listing::<P>)
                                .wrap(JwtAuth::new()),
                        ),
                )
                .route(
                    "/providers/{listing_id}/rating",
                    web::get().to(listings::get_listing_rating::<P>),
                )
                .service(
                    web::scope("/users")
                        .wrap(JwtAuth::new())
                        .route("", web::get().to(users::list_users::<P>))
                        .route("/{user_id}", web::delete().to(users::delete_user::<P>)),
                ),
        )
        .default_service(web::route().to(health::not_found))
}

/// `/api/v1/bookings`; fixed paths are registered before `/{id}`
fn booking_scope<P: Backend>() -> actix_web::Scope {
    web::scope("/bookings")
        .route("", web::post().to(bookings::create_booking::<P>).wrap(JwtAuth::new()))
        .route("", web::get().to(bookings::list_all_bookings::<P>).wrap(JwtAuth::new()))
        .route("/notify", web::post().to(bookings::respond_to_booking::<P>))
        .route(
            "/mybooking/{customer_id}",
            web::get()
                .to(bookings::list_customer_bookings::<P>)
                .wrap(JwtAuth::new()),
        )
        .route(
            "/requestedbooking/{worker_id}",
            web::get()
                .to(bookings::list_worker_bookings::<P>)
                .wrap(JwtAuth::new()),
        )
        .route("/{id}/proof", web::post().to(bookings::attach_proof::<P>))
        .route("/{id}/resend-otp", web::post().to(bookings::resend_otp::<P>))
        .route("/{id}/verify-otp", web::post().to(bookings::verify_otp::<P>))
        .route("/{id}/rate", web::post().to(bookings::submit_rating::<P>))
        .route("/{id}/rate", web::get().to(bookings::get_rating::<P>))
        .route("/{id}", web::get().to(bookings::get_booking::<P>).wrap(JwtAuth::new()))
}
