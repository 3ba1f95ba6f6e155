//! Talks to an OpenAI-compatible chat completions API.
//! The handlers only see the `Completion` trait; `OpenAiCompletion` is the real one.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::GreetError;

/// Model and sampling temperature are fixed, not runtime parameters.
pub const MODEL: &str = "gpt-4o";
pub const TEMPERATURE: f64 = 1.0;

const DEFAULT_LLM_URL: &str = "https://api.openai.com/v1/chat/completions";

fn upstream_err(msg: impl Into<String>) -> GreetError {
    GreetError::Upstream(msg.into())
}

/// Text in, text out, fails sometimes.
#[async_trait::async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, system: &[&str], user: &str) -> Result<String, GreetError>;
}

#[derive(Clone)]
pub struct AiConfig {
    pub llm_url: String,
    pub api_key: String,
    /// No client-side timeout unless `GREETCARD_LLM_TIMEOUT_SECS` is set.
    pub timeout: Option<Duration>,
}

impl AiConfig {
    /// Fails if `OPENAI_API_KEY` is missing or blank.
    pub fn from_env() -> Result<Self, GreetError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| GreetError::Config("OPENAI_API_KEY environment variable is not set".into()))?;
        let llm_url = std::env::var("GREETCARD_LLM_URL").unwrap_or_else(|_| DEFAULT_LLM_URL.into());
        let timeout = std::env::var("GREETCARD_LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs);

        Ok(Self { llm_url, api_key, timeout })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

fn build_chat_request<'a>(system: &[&'a str], user: &'a str) -> ChatRequest<'a> {
    let mut messages: Vec<ChatMessage> = system
        .iter()
        .map(|s| ChatMessage { role: "system", content: *s })
        .collect();
    messages.push(ChatMessage { role: "user", content: user });
    ChatRequest { model: MODEL, messages, temperature: TEMPERATURE }
}

/// Request body as JSON: one system message per rule, then the user message.
pub fn chat_request(system: &[&str], user: &str) -> Result<serde_json::Value, GreetError> {
    serde_json::to_value(build_chat_request(system, user))
        .map_err(|e| GreetError::Internal(format!("chat request encode failed: {e}")))
}

pub struct OpenAiCompletion {
    cfg: AiConfig,
    client: reqwest::Client,
}

impl OpenAiCompletion {
    pub fn new(cfg: AiConfig) -> Result<Self, GreetError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GreetError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { cfg, client })
    }
}

#[async_trait::async_trait]
impl Completion for OpenAiCompletion {
    async fn complete(&self, system: &[&str], user: &str) -> Result<String, GreetError> {
        let req = build_chat_request(system, user);
        let start = std::time::Instant::now();

        let resp = self
            .client
            .post(&self.cfg.llm_url)
            .bearer_auth(&self.cfg.api_key)
            .json(&req)
            .send()
            .await
            .map_err(|e| upstream_err(format!("LLM request failed: {e}")))?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(upstream_err(format!("LLM returned {status}: {body}")));
        }

        let chat: ChatResponse = resp
            .json()
            .await
            .map_err(|e| upstream_err(format!("LLM response parse failed: {e}")))?;
        let choice = chat
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| upstream_err("LLM response had no choices"))?;

        debug!(model = MODEL, duration_ms = start.elapsed().as_millis() as u64, "completion done");
        Ok(choice.message.content.unwrap_or_default())
    }
}
