use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub const WORK_ENTRIES_PATH: &str = "/api/work_entries";
pub const WORK_SUMMARY_PATH: &str = "/api/work_summary";

/// Builds the page, API and `/pkg` asset routes.
pub fn router(state: AppState, assets_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(WORK_ENTRIES_PATH, post(handlers::create_entry))
        .route(WORK_SUMMARY_PATH, get(handlers::get_summary))
        .nest_service("/pkg", ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
