//! Greeting generation and retrieval handlers.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::error::GreetError;
use crate::{format, prompts, util, AppState};

#[derive(Deserialize)]
struct GreetingRequest {
    #[serde(default)]
    input: Option<String>,
}

/// Pull `input` out of the body. Bad JSON, wrong type and short text all count
/// as invalid input.
fn parse_input(body: &[u8]) -> Result<String, GreetError> {
    let req: GreetingRequest =
        serde_json::from_slice(body).map_err(|_| GreetError::InvalidInput)?;
    match req.input {
        Some(input) if input.trim().chars().count() >= 2 => Ok(input),
        _ => Err(GreetError::InvalidInput),
    }
}

/// POST /generate-greeting
///
/// A body over the router's size limit is rejected like any other invalid input.
pub(super) async fn generate_greeting(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<serde_json::Value>, GreetError> {
    let body = body.map_err(|e| {
        warn!(error = %e, "unreadable request body");
        GreetError::InvalidInput
    })?;
    let input = parse_input(&body).inspect_err(|_| {
        warn!("invalid input in generate request");
    })?;
    info!(input = %util::preview(&input, 80), "generating greeting");

    let user = prompts::build_user_prompt(&input);
    let raw = state
        .completion
        .complete(&prompts::SYSTEM_RULES, &user)
        .await
        .inspect_err(|e| error!(error = %e, "greeting generation failed"))?;
    let cleaned = format::clean_markup(&raw);
    debug!(response = %cleaned, "model response");

    if format::is_blank_generation(&cleaned) {
        error!("model returned an empty response");
        return Err(GreetError::EmptyGeneration);
    }

    let greeting = format::format_greeting(&cleaned);
    state.last_greeting.set(greeting.clone());
    info!(len = greeting.len(), "greeting formatted and stored");

    Ok(Json(serde_json::json!({
        "message": "Greeting generated successfully",
        "greeting": greeting,
    })))
}

/// GET /retrieve-greeting
pub(super) async fn retrieve_greeting(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, GreetError> {
    let Some(greeting) = state.last_greeting.get() else {
        warn!("no greeting available to retrieve");
        return Err(GreetError::NotFound);
    };
    info!("returning last generated greeting");
    Ok(Json(serde_json::json!({
        "message": "Greeting retrieved successfully",
        "greeting": greeting,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_chars() {
        assert_eq!(parse_input(br#"{"input": "hi"}"#).unwrap(), "hi");
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        assert_eq!(parse_input(br#"{"input": " ok "}"#).unwrap(), " ok ");
    }

    #[test]
    fn rejects_short_after_trim() {
        assert!(matches!(parse_input(br#"{"input": "  a  "}"#), Err(GreetError::InvalidInput)));
    }

    #[test]
    fn rejects_missing_and_null() {
        assert!(parse_input(br#"{}"#).is_err());
        assert!(parse_input(br#"{"input": null}"#).is_err());
    }

    #[test]
    fn rejects_non_string_and_garbage() {
        assert!(parse_input(br#"{"input": 42}"#).is_err());
        assert!(parse_input(b"not json").is_err());
        assert!(parse_input(b"").is_err());
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert!(parse_input(r#"{"input": "é"}"#.as_bytes()).is_err());
        assert!(parse_input(r#"{"input": "猫猫"}"#.as_bytes()).is_ok());
    }
}
