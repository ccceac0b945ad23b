pub mod assets;
pub mod chat;

use axum::{Router, http::StatusCode};
use tower_http::trace::TraceLayer;

use crate::appstate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(assets::router(&state.static_dir))
        .merge(chat::router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found\n")
}
