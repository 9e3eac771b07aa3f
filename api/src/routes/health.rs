use actix_web::HttpResponse;

/// Liveness probe
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "homeserve-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Fallback for unknown paths
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(hs_shared::ErrorResponse::new(
        hs_shared::error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
