use axum::http::StatusCode;
use greetcard::error::GreetError;
use http_body_util::BodyExt;

#[test]
fn status_codes_are_correct() {
    assert_eq!(GreetError::InvalidInput.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(GreetError::NotFound.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(GreetError::EmptyGeneration.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        GreetError::Upstream("timeout".into()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    assert_eq!(
        GreetError::Internal("oops".into()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR,
    );
}

#[test]
fn display_keeps_detail_for_logs() {
    assert!(GreetError::Upstream("connection reset".into()).to_string().contains("connection reset"));
    assert!(GreetError::Config("OPENAI_API_KEY".into()).to_string().contains("OPENAI_API_KEY"));
}

#[test]
fn public_message_hides_detail() {
    let e = GreetError::Upstream("sk-123 rejected".into());
    assert_eq!(e.public_message(), "An error occurred while generating the greeting.");
}

#[tokio::test]
async fn into_response_has_json_error_body() {
    use axum::response::IntoResponse;
    let resp = GreetError::Upstream("secret detail".into()).into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let j: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(j, serde_json::json!({"error": "An error occurred while generating the greeting."}));
}
