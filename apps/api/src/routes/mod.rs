pub mod health;
pub mod resumes;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/format", post(resumes::handle_format))
        .route("/api/v1/resumes/preview", post(resumes::handle_preview))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
