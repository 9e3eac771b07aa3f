//! Conversion of domain errors into HTTP responses
//!
//! Every failure leaves the API as an [`ErrorResponse`] body. Internal
//! errors are logged in full but only a generic message is returned.

use actix_web::{
    error::{InternalError, JsonPayloadError, PathError},
    http::{header, StatusCode},
    HttpRequest, HttpResponse,
};
use serde_json::json;
use std::collections::HashMap;
use validator::ValidationErrors;

use hs_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use hs_shared::errors::{error_codes, ErrorResponse};

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. }
        | DomainError::ValidationErr(_)
        | DomainError::InvalidState { .. }
        | DomainError::InvalidOtp
        | DomainError::OtpExpired => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Auth(auth) => match auth {
            AuthError::InvalidPhoneFormat { .. }
            | AuthError::InvalidVerificationCode
            | AuthError::VerificationCodeExpired => StatusCode::BAD_REQUEST,
            AuthError::MaxAttemptsExceeded | AuthError::RateLimitExceeded { .. } => {
                StatusCode::TOO_MANY_REQUESTS
            }
            AuthError::SmsServiceFailure => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::InsufficientPermissions => StatusCode::FORBIDDEN,
        },
        DomainError::Token(TokenError::TokenGenerationFailed) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
    }
}

/// Error code placed in the `error` field
pub fn code_for(error: &DomainError) -> &'static str {
    match error {
        DomainError::Validation { .. } | DomainError::ValidationErr(_) => error_codes::VALIDATION_ERROR,
        DomainError::NotFound { .. } => error_codes::NOT_FOUND,
        DomainError::InvalidState { .. } => error_codes::INVALID_STATE,
        DomainError::InvalidOtp => error_codes::INVALID_OTP,
        DomainError::OtpExpired => error_codes::OTP_EXPIRED,
        DomainError::Unauthorized => error_codes::UNAUTHORIZED,
        DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
        DomainError::Auth(auth) => match auth {
            AuthError::InvalidPhoneFormat { .. } => error_codes::INVALID_PHONE,
            AuthError::InvalidVerificationCode => error_codes::INVALID_VERIFICATION_CODE,
            AuthError::VerificationCodeExpired => error_codes::VERIFICATION_CODE_EXPIRED,
            AuthError::MaxAttemptsExceeded => error_codes::MAX_ATTEMPTS_EXCEEDED,
            AuthError::RateLimitExceeded { .. } => error_codes::RATE_LIMIT_EXCEEDED,
            AuthError::SmsServiceFailure => error_codes::SMS_SERVICE_FAILURE,
            AuthError::UserNotFound => error_codes::NOT_FOUND,
            AuthError::InsufficientPermissions => error_codes::INSUFFICIENT_PERMISSIONS,
        },
        DomainError::Token(TokenError::TokenExpired) => error_codes::TOKEN_EXPIRED,
        DomainError::Token(TokenError::TokenGenerationFailed) => error_codes::INTERNAL_ERROR,
        DomainError::Token(_) => error_codes::INVALID_TOKEN,
    }
}

/// Build the error response for a domain error
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = status_for(&error);
    if status.is_server_error() {
        log::error!("Domain error: {:?}", error);
    } else {
        log::warn!("Request rejected: {}", error);
    }

    let message = match &error {
        DomainError::Internal { .. } | DomainError::Token(TokenError::TokenGenerationFailed) => {
            "An internal error occurred".to_string()
        }
        other => other.to_string(),
    };
    let mut body = ErrorResponse::new(code_for(&error), message);
    let mut builder = HttpResponse::build(status);

    match &error {
        DomainError::Auth(AuthError::RateLimitExceeded { seconds }) => {
            builder.insert_header((header::RETRY_AFTER, seconds.to_string()));
            body = body.add_detail("retryAfter", seconds);
        }
        DomainError::ValidationErr(ValidationError::OutOfRange { field, min, max }) => {
            body = body
                .add_detail("field", field)
                .add_detail("min", min)
                .add_detail("max", max);
        }
        DomainError::ValidationErr(ValidationError::TooLong { field, max }) => {
            body = body.add_detail("field", field).add_detail("max", max);
        }
        DomainError::ValidationErr(
            ValidationError::RequiredField { field } | ValidationError::InvalidFormat { field },
        ) => {
            body = body.add_detail("field", field);
        }
        _ => {}
    }

    builder.json(body)
}

/// 400 response listing the fields that failed `validator` checks
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let fields: HashMap<String, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    log::warn!("Request validation failed: {:?}", fields);

    let mut details = HashMap::new();
    details.insert("fields".to_string(), json!(fields));
    HttpResponse::BadRequest().json(ErrorResponse::with_details(
        error_codes::VALIDATION_ERROR,
        "Invalid request data",
        details,
    ))
}

/// Malformed or undecodable JSON bodies
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON body on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request body")
            .add_detail("reason", err.to_string()),
    );
    InternalError::from_response(err, response).into()
}

/// Path segments that fail to parse, such as a malformed id
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected path {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid id in request path")
            .add_detail("path", req.path()),
    );
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_booking_errors_map_to_client_statuses() {
        assert_eq!(status_for(&DomainError::not_found("Booking")), StatusCode::NOT_FOUND);
        assert_eq!(status_for(&DomainError::invalid_state("closed")), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&DomainError::InvalidOtp), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&DomainError::OtpExpired), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&DomainError::forbidden()), StatusCode::FORBIDDEN);
        assert_eq!(code_for(&DomainError::OtpExpired), "otp_expired");
    }

    #[test]
    fn test_auth_errors_map_to_statuses() {
        let cases = [
            (DomainError::from(AuthError::MaxAttemptsExceeded), StatusCode::TOO_MANY_REQUESTS),
            (DomainError::from(AuthError::SmsServiceFailure), StatusCode::SERVICE_UNAVAILABLE),
            (DomainError::from(AuthError::VerificationCodeExpired), StatusCode::BAD_REQUEST),
            (DomainError::from(TokenError::TokenExpired), StatusCode::UNAUTHORIZED),
            (DomainError::from(TokenError::InvalidClaims), StatusCode::UNAUTHORIZED),
        ];
        for (error, status) in cases {
            assert_eq!(status_for(&error), status, "{:?}", error);
        }
        assert_eq!(code_for(&DomainError::from(TokenError::TokenExpired)), "token_expired");
        assert_eq!(code_for(&DomainError::from(TokenError::InvalidClaims)), "invalid_token");
    }

    #[actix_web::test]
    async fn test_internal_message_is_not_echoed() {
        let response = handle_domain_error(DomainError::internal("pool timed out on 10.0.0.5"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body["error"], "internal_error");
        assert!(!body["message"].as_str().unwrap().contains("10.0.0.5"));
    }

    #[actix_web::test]
    async fn test_rate_limit_sets_retry_after() {
        let response = handle_domain_error(AuthError::RateLimitExceeded { seconds: 42 }.into());
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers().get(header::RETRY_AFTER).unwrap(), "42");

        let body = body_of(response).await;
        assert_eq!(body["details"]["retryAfter"], 42);
    }

    #[actix_web::test]
    async fn test_out_of_range_rating_details() {
        let error = ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: "0".to_string(),
            max: "5".to_string(),
        };
        let body = body_of(handle_domain_error(error.into())).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["details"]["field"], "rating");
        assert_eq!(body["details"]["max"], "5");
    }
}
