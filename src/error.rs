use axum::http::StatusCode;
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum GreetError {
    #[error("input missing or shorter than 2 characters")]
    InvalidInput,

    #[error("model returned an empty greeting")]
    EmptyGeneration,

    #[error("completion backend error: {0}")]
    Upstream(String),

    #[error("no greeting generated yet")]
    NotFound,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl GreetError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text returned to HTTP callers. Upstream and internal details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input. Please enter a longer message.",
            Self::EmptyGeneration => {
                "Failed to generate a greeting. Please try again with a clearer message."
            }
            Self::NotFound => "No greeting available. Generate a greeting first.",
            Self::Upstream(_) | Self::Config(_) | Self::Internal(_) => {
                "An error occurred while generating the greeting."
            }
        }
    }
}

impl axum::response::IntoResponse for GreetError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.public_message() }));
        (status, body).into_response()
    }
}
