//! Phone sign-in over HTTP

mod common;

use actix_web::{http::header, http::StatusCode, test};
use serde_json::{json, Value};

use common::{wrong_code, TestContext, CUSTOMER_PHONE, WORKER_PHONE};
use hs_api::app::DEFAULT_JSON_LIMIT;
use hs_api::create_app;
use hs_core::domain::entities::UserRole;
use hs_core::repositories::UserRepository;
use hs_shared::config::CorsConfig;

macro_rules! app {
    ($ctx:expr) => {
        test::init_service(create_app($ctx.state.clone(), &CorsConfig::default(), DEFAULT_JSON_LIMIT)).await
    };
}

#[actix_web::test]
async fn test_send_and_verify_registers_new_worker() {
    let ctx = TestContext::new();
    let app = app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-code")
        .set_json(json!({ "phone": WORKER_PHONE }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["resendAfter"].as_i64().unwrap() > 0);
    assert!(body["expiresAt"].is_string());

    let code = ctx.last_code_to(WORKER_PHONE).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-code")
        .set_json(json!({ "phone": WORKER_PHONE, "code": code, "role": "worker" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["tokenType"], "Bearer");
    assert_eq!(body["role"], "worker");
    assert_eq!(body["isNewUser"], true);
    let token = body["accessToken"].as_str().unwrap().to_string();

    let user = ctx.users.find_by_phone(WORKER_PHONE).await.unwrap().unwrap();
    assert_eq!(user.role, UserRole::Worker);

    // The issued token opens authenticated routes
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/bookings/requestedbooking/{}", user.id))
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_existing_account_keeps_its_role() {
    let ctx = TestContext::new();
    let app = app!(ctx);
    let customer = ctx.add_user(Some(CUSTOMER_PHONE), UserRole::Customer).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-code")
        .set_json(json!({ "phone": "4155550101", "countryCode": "+1" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let code = ctx.last_code_to(CUSTOMER_PHONE).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-code")
        .set_json(json!({ "phone": CUSTOMER_PHONE, "code": code, "role": "worker" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["userId"], customer.id.to_string());
    assert_eq!(body["role"], "customer");
    assert_eq!(body["isNewUser"], false);
}

#[actix_web::test]
async fn test_resend_within_cooldown_is_limited() {
    let ctx = TestContext::new();
    let app = app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-code")
        .set_json(json!({ "phone": CUSTOMER_PHONE }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-code")
        .set_json(json!({ "phone": CUSTOMER_PHONE }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(resp.headers().contains_key(header::RETRY_AFTER));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "rate_limit_exceeded");
    assert!(body["details"]["retryAfter"].as_u64().unwrap() > 0);
}

#[actix_web::test]
async fn test_invalid_phone_is_rejected() {
    let ctx = TestContext::new();
    let app = app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-code")
        .set_json(json!({ "phone": "12345" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_phone");
}

#[actix_web::test]
async fn test_admin_role_cannot_be_requested() {
    let ctx = TestContext::new();
    let app = app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-code")
        .set_json(json!({ "phone": CUSTOMER_PHONE, "code": "123456", "role": "admin" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"]["field"], "role");
}

#[actix_web::test]
async fn test_wrong_codes_exhaust_attempts() {
    let ctx = TestContext::new();
    let app = app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-code")
        .set_json(json!({ "phone": CUSTOMER_PHONE }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    let code = ctx.last_code_to(CUSTOMER_PHONE).await;
    let wrong = wrong_code(&code);

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/verify-code")
            .set_json(json!({ "phone": CUSTOMER_PHONE, "code": wrong }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_verification_code");
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-code")
        .set_json(json!({ "phone": CUSTOMER_PHONE, "code": wrong }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

    // The code is gone, even the right one no longer works
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-code")
        .set_json(json!({ "phone": CUSTOMER_PHONE, "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "verification_code_expired");
}

#[actix_web::test]
async fn test_malformed_code_fails_validation() {
    let ctx = TestContext::new();
    let app = app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify-code")
        .set_json(json!({ "phone": CUSTOMER_PHONE, "code": "12" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
    assert!(body["details"]["fields"]["code"].is_array());
}
