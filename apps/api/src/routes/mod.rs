pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::shell;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Browser front end
        .route("/", get(shell::handle_index))
        .route("/analyze", post(shell::handle_analyze_form))
        // Analysis API
        .route("/api/v1/roles", get(handlers::handle_list_roles))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/report", post(handlers::handle_report))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
