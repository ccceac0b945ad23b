use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{HeaderValue, StatusCode, header},
    routing::post,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{error, info, warn};

use crate::appstate::AppState;
use crate::inference::ReplyGenerator;
use crate::prompt::{FALLBACK_REPLY, build_prompt};
use crate::topic::{REFUSAL_REPLY, is_waste_related};
use crate::types::{ChatReq, ChatResp};

pub const BAD_JSON_BODY: &str = "Format JSON tidak valid\n";
pub const METHOD_NOT_ALLOWED_BODY: &str = "Method tidak diizinkan\n";

/// `/chat` with CORS headers on every response, including 400 and 405.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/chat",
            post(chat_handler)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}

pub async fn chat_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResp>, (StatusCode, &'static str)> {
    // Decoded by hand: the request content type is not checked. `null` is a
    // valid body and reads as an empty message.
    let req: Option<ChatReq> = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "rejecting malformed chat body");
        (StatusCode::BAD_REQUEST, BAD_JSON_BODY)
    })?;
    let message = req.map(|r| r.message).unwrap_or_default();

    info!(message = %message, "chat message received");
    let reply = answer(state.generator.as_ref(), &message).await;
    Ok(Json(ChatResp { reply }))
}

/// Resolves a user message to a reply. Never fails: off-topic messages get the
/// refusal and upstream errors get the fallback.
pub async fn answer(generator: &dyn ReplyGenerator, message: &str) -> String {
    if !is_waste_related(message) {
        info!("message is off-topic, sending refusal");
        return REFUSAL_REPLY.to_string();
    }

    let prompt = build_prompt(message);
    match generator.generate(&prompt).await {
        Ok(reply) => {
            info!(reply_bytes = reply.len(), "upstream reply received");
            reply
        }
        Err(e) => {
            error!(error = %e, "upstream call failed, sending fallback");
            FALLBACK_REPLY.to_string()
        }
    }
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::UpstreamError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Scripted {
        reply: Result<&'static str, StatusCode>,
        prompts: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(reply: Result<&'static str, StatusCode>) -> Self {
            Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ReplyGenerator for Scripted {
        async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match self.reply {
                Ok(text) => Ok(text.to_string()),
                Err(status) => Err(UpstreamError::Status {
                    status,
                    body: "boom".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn on_topic_message_is_sent_as_prompt() {
        let upstream = Scripted::new(Ok("Kompos itu keren! 🌱"));
        let reply = answer(&upstream, "apa itu sampah organik?").await;

        assert_eq!(reply, "Kompos itu keren! 🌱");
        let prompts = upstream.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], build_prompt("apa itu sampah organik?"));
    }

    #[tokio::test]
    async fn off_topic_message_never_reaches_upstream() {
        let upstream = Scripted::new(Ok("unused"));
        let reply = answer(&upstream, "siapa presiden Indonesia?").await;

        assert_eq!(reply, REFUSAL_REPLY);
        assert!(upstream.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn upstream_error_becomes_fallback() {
        let upstream = Scripted::new(Err(StatusCode::SERVICE_UNAVAILABLE));
        let reply = answer(&upstream, "cara daur ulang plastik").await;
        assert_eq!(reply, FALLBACK_REPLY);
    }
}
