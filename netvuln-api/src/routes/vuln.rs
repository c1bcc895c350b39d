// ---------------------------------------------------------------------------
// Vulnerability routes
// ---------------------------------------------------------------------------

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use netvuln_types::{CheckVulnRequest, CheckVulnResponse};
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /api/v1/vuln/check: scan targets and report known vulnerabilities
// ---------------------------------------------------------------------------

pub async fn check_vuln(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckVulnRequest>,
) -> Result<Json<CheckVulnResponse>, ApiError> {
    if req.targets.is_empty() {
        return Err(ApiError::BadRequest("at least one target is required".into()));
    }

    // If the client goes away, axum drops this future and the guard cancels
    // the scan, which kills the engine process.
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let response = state
        .service
        .check_vulnerabilities(&req, &cancel)
        .await
        .map_err(|e| {
            warn!(stage = e.stage(), error = %e, targets = ?req.targets, "vulnerability check failed");
            ApiError::from(e)
        })?;

    Ok(Json(response))
}
