//! Provider listings and user administration over HTTP

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};
use uuid::Uuid;

use common::{TestContext, CUSTOMER_PHONE, WORKER_PHONE};
use hs_api::app::DEFAULT_JSON_LIMIT;
use hs_api::create_app;
use hs_core::domain::entities::UserRole;
use hs_shared::config::CorsConfig;

macro_rules! app {
    ($ctx:expr) => {
        test::init_service(create_app($ctx.state.clone(), &CorsConfig::default(), DEFAULT_JSON_LIMIT)).await
    };
}

fn listing_body() -> Value {
    json!({
        "name": "Emergency plumbing",
        "price": "$95/hour",
        "description": "Burst pipes and blocked drains, seven days a week"
    })
}

#[actix_web::test]
async fn test_worker_publishes_and_removes_listing() {
    let ctx = TestContext::new();
    let app = app!(ctx);
    let worker = ctx.add_user(Some(WORKER_PHONE), UserRole::Worker).await;
    let service_id = ctx.add_service().await;
    let providers_uri = format!("/api/v1/services/{}/providers", service_id);

    let req = test::TestRequest::post()
        .uri(&providers_uri)
        .insert_header(ctx.bearer(&worker))
        .set_json(listing_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["provider"]["workerId"], worker.id.to_string());
    assert_eq!(body["provider"]["rating"]["count"], 0);
    let listing_id = body["provider"]["id"].as_str().unwrap().to_string();

    // Browsing needs no token
    let req = test::TestRequest::get().uri(&providers_uri).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["providers"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri(&format!("{}/{}", providers_uri, listing_id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["provider"]["name"], "Emergency plumbing");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/providers/{}/rating", listing_id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["providerListingId"], listing_id);
    assert_eq!(body["rating"]["average"], 0.0);

    let req = test::TestRequest::delete()
        .uri(&format!("{}/{}", providers_uri, listing_id))
        .insert_header(ctx.bearer(&worker))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri(&providers_uri).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["providers"], json!([]));
}

#[actix_web::test]
async fn test_only_workers_publish_listings() {
    let ctx = TestContext::new();
    let app = app!(ctx);
    let customer = ctx.add_user(Some(CUSTOMER_PHONE), UserRole::Customer).await;
    let service_id = ctx.add_service().await;
    let providers_uri = format!("/api/v1/services/{}/providers", service_id);

    let req = test::TestRequest::post()
        .uri(&providers_uri)
        .set_json(listing_body())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri(&providers_uri)
        .insert_header(ctx.bearer(&customer))
        .set_json(listing_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "insufficient_permissions");
}

#[actix_web::test]
async fn test_listing_requires_known_service_and_fields() {
    let ctx = TestContext::new();
    let app = app!(ctx);
    let worker = ctx.add_user(Some(WORKER_PHONE), UserRole::Worker).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/services/{}/providers", Uuid::new_v4()))
        .insert_header(ctx.bearer(&worker))
        .set_json(listing_body())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let service_id = ctx.add_service().await;
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/services/{}/providers", service_id))
        .insert_header(ctx.bearer(&worker))
        .set_json(json!({ "name": "", "description": "Anything" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["details"]["fields"]["name"].is_array());
}

#[actix_web::test]
async fn test_other_worker_cannot_delete_listing() {
    let ctx = TestContext::new();
    let app = app!(ctx);
    let owner = ctx.add_user(Some(WORKER_PHONE), UserRole::Worker).await;
    let rival = ctx.add_user(Some("+14155550404"), UserRole::Worker).await;
    let listing = ctx.add_listing(&owner).await;
    let uri = format!("/api/v1/services/{}/providers/{}", listing.service_id, listing.id);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(ctx.bearer(&rival))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    // Wrong service in the path
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/services/{}/providers/{}", Uuid::new_v4(), listing.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri(&uri).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_users_are_admin_only() {
    let ctx = TestContext::new();
    let app = app!(ctx);
    let customer = ctx.add_user(Some(CUSTOMER_PHONE), UserRole::Customer).await;
    let admin = ctx.add_user(None, UserRole::Admin).await;

    let req = test::TestRequest::get().uri("/api/v1/users").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/v1/users")
        .insert_header(ctx.bearer(&customer))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get()
        .uri("/api/v1/users")
        .insert_header(ctx.bearer(&admin))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["users"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/users/{}", customer.id))
        .insert_header(ctx.bearer(&admin))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/users/{}", customer.id))
        .insert_header(ctx.bearer(&admin))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_health_and_unknown_paths() {
    let ctx = TestContext::new();
    let app = app!(ctx);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");

    let req = test::TestRequest::get().uri("/api/v1/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}
