pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/layout/analyze",
            post(handlers::handle_analyze_layout),
        )
        .route(
            "/api/v1/scores/composite",
            post(handlers::handle_composite_score),
        )
        .with_state(state)
}
