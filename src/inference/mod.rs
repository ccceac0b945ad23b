pub mod gemini;

use async_trait::async_trait;
use reqwest::StatusCode;

pub use gemini::GeminiClient;

/// Produces a reply for a fully built prompt.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError>;
}

/// Errors that can occur when calling the upstream model API
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("api key is not a valid header value")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("failed to parse upstream response: {0}")]
    Parse(#[from] serde_json::Error),
}
