use std::time::Instant;

use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use tracing::{debug, info, warn};

use super::{ReplyGenerator, UpstreamError};
use crate::prompt::NO_ANSWER_REPLY;
use crate::types::{GenerateReq, GenerateResp};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    url: String,
    api_key: HeaderValue,
}

impl GeminiClient {
    /// Fails when the key cannot be sent as a header value.
    pub fn new(
        client: Client,
        base_url: &str,
        model: &str,
        api_key: &str,
    ) -> Result<Self, UpstreamError> {
        let mut api_key = HeaderValue::from_str(api_key)?;
        api_key.set_sensitive(true);
        let base = base_url.trim_end_matches('/');
        Ok(Self {
            client,
            url: format!("{}/v1beta/models/{}:generateContent", base, model),
            api_key,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, self.api_key.clone());
        headers
    }
}

#[async_trait]
impl ReplyGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        let body = serde_json::to_vec(&GenerateReq::from_prompt(prompt))?;

        debug!("Forwarding request to URL: {}", self.url);
        let start = Instant::now();

        let resp = self
            .client
            .post(&self.url)
            .headers(self.headers())
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let bytes = resp.bytes().await?;

        info!(
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis(),
            body_bytes = bytes.len(),
            "upstream responded"
        );

        if status != StatusCode::OK {
            return Err(UpstreamError::Status {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        let parsed: GenerateResp = serde_json::from_slice(&bytes)?;
        match parsed.first_text() {
            Some(text) => Ok(text),
            None => {
                warn!("upstream returned no candidate text");
                Ok(NO_ANSWER_REPLY.to_string())
            }
        }
    }
}
