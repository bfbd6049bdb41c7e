pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

/// Upload ceiling for resume documents.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload = post(handlers::handle_score).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/score", upload.clone())
        // path used by earlier clients
        .route("/api/v1/matching/score", upload)
        .route(
            "/api/v1/score/structured",
            post(handlers::handle_score_structured),
        )
        .with_state(state)
}
