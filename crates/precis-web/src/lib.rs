use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use tower_http::cors::CorsLayer;

pub mod errors;
pub mod handlers;
pub mod state;
pub mod template;
pub mod upload;

pub use state::AppState;

/// Build the application router over the injected state.
pub fn router(state: Arc<AppState>) -> Router {
    // Allow large file uploads (50MB)
    let body_limit = DefaultBodyLimit::max(50 * 1024 * 1024);

    Router::new()
        .route("/", get(handlers::index::index))
        .route("/upload", post(handlers::upload::upload))
        .route(
            "/summaries",
            get(handlers::summaries::list).delete(handlers::summaries::delete_all),
        )
        .route("/summaries/{id}", delete(handlers::summaries::delete_one))
        .layer(body_limit)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
