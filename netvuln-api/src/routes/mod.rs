// ---------------------------------------------------------------------------
// Route registration
// ---------------------------------------------------------------------------

mod system;
mod vuln;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/system/health", get(system::health_check))
        .route("/api/v1/vuln/check", post(vuln::check_vuln))
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(1024 * 1024)) // 1 MB (target lists are small)
        .with_state(state)
}
