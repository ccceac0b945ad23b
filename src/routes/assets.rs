use std::path::Path;

use axum::{
    Router,
    extract::Request,
    http::Method,
    middleware::map_request,
};
use tower_http::services::ServeFile;

use crate::appstate::AppState;

pub const PAGE_FILE: &str = "frontend.html";
pub const STYLESHEET_FILE: &str = "frontend.css";

/// `/` and `/frontend.css`, read from disk on every request and served for
/// any method.
pub fn router(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join(PAGE_FILE)))
        .route_service(
            "/frontend.css",
            ServeFile::new(static_dir.join(STYLESHEET_FILE)),
        )
        .layer(map_request(serve_as_get))
}

// ServeFile answers 405 to anything but GET and HEAD.
async fn serve_as_get(mut req: Request) -> Request {
    if req.method() != Method::HEAD {
        *req.method_mut() = Method::GET;
    }
    req
}
