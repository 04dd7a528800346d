use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::endpoints;
use super::types::AppState;

/// Build the application router.
pub fn app_router(state: AppState) -> Router {
    // Leave headroom above the file limit for multipart framing.
    let body_limit = state.config.max_file_size_bytes() + 64 * 1024;

    Router::new()
        .route("/", get(endpoints::root))
        .route("/health", get(endpoints::health))
        .route("/supported-formats", get(endpoints::supported_formats))
        .route("/upload", post(endpoints::upload))
        .route("/export-to-sheets", post(endpoints::export_to_sheets))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
}
