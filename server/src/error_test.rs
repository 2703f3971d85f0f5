use super::*;

#[test]
fn internal_error_hides_detail_outside_debug() {
    let body = InternalError::new("db exploded", false);
    assert_eq!(body.error, "Internal server error");
    assert_eq!(body.message, GENERIC_ERROR_MESSAGE);
}

#[test]
fn internal_error_exposes_detail_in_debug() {
    let body = InternalError::new("db exploded", true);
    assert_eq!(body.message, "db exploded");
}

#[test]
fn internal_error_serializes_error_and_message() {
    let json = serde_json::to_value(InternalError::new("x", false)).unwrap();
    assert_eq!(json, serde_json::json!({ "error": "Internal server error", "message": GENERIC_ERROR_MESSAGE }));
}

#[test]
fn internal_error_response_is_500() {
    let response = InternalError::new("x", false).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn api_error_hides_detail_outside_debug() {
    let response = ApiError::internal("pool exhausted", false).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["message"], GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn api_error_exposes_detail_in_debug() {
    let body = body_json(ApiError::internal("pool exhausted", true).into_response()).await;
    assert_eq!(body["message"], "pool exhausted");
}

#[test]
fn api_error_display_keeps_detail() {
    assert_eq!(ApiError::internal("pool exhausted", false).to_string(), "internal error: pool exhausted");
}

#[tokio::test]
async fn panic_response_uses_api_error_body() {
    let panic: Box<dyn Any + Send> = Box::new("kaboom");
    let response = panic_response(panic, false);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["message"], GENERIC_ERROR_MESSAGE);
}

#[test]
fn panic_message_reads_str_and_string_payloads() {
    let s: Box<dyn Any + Send> = Box::new("static boom");
    assert_eq!(panic_message(s.as_ref()), "static boom");

    let owned: Box<dyn Any + Send> = Box::new(String::from("owned boom"));
    assert_eq!(panic_message(owned.as_ref()), "owned boom");

    let other: Box<dyn Any + Send> = Box::new(42_u8);
    assert_eq!(panic_message(other.as_ref()), "unknown panic");
}

#[test]
fn startup_error_wraps_settings_error() {
    let err: StartupError = SettingsError::Missing("OPENAI_API_KEY").into();
    assert_eq!(err.to_string(), "missing required setting OPENAI_API_KEY");
}
