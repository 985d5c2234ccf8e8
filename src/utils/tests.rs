use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::Level;

use super::error::RelayError;
use super::logging;

#[test]
fn logging_init_accepts_levels() {
    // Should not panic
    logging::init("info");
    logging::init("debug");
    logging::init("warn");
}

#[test]
fn parse_level_maps_names() {
    assert_eq!(logging::parse_level("error"), Level::ERROR);
    assert_eq!(logging::parse_level("Warning"), Level::WARN);
    assert_eq!(logging::parse_level(" DEBUG "), Level::DEBUG);
    assert_eq!(logging::parse_level("trace"), Level::TRACE);
    assert_eq!(logging::parse_level("loud"), Level::INFO);
}

#[test]
fn malformed_body_keeps_client_status() {
    let err = RelayError::MalformedBody {
        status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
        reason: "Expected request with `Content-Type: application/json`".to_string(),
    };
    assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(err.into_response().status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[test]
fn io_error_is_internal() {
    let err = RelayError::from(std::io::Error::other("bind failed"));
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.to_string().contains("bind failed"));
}
