// ---------------------------------------------------------------------------
// API error types
// ---------------------------------------------------------------------------

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use netvuln_core::CoreError;
use netvuln_scan::{EngineError, InvocationError};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input.
    BadRequest(String),
    /// 422 Unprocessable Entity: request cannot be turned into a scan.
    InvalidInvocation(String),
    /// 503 Service Unavailable: scan engine binary is missing.
    EngineUnavailable(String),
    /// 502 Bad Gateway: scan engine failed.
    EngineFailed(String),
    /// 504 Gateway Timeout: scan timed out or was cancelled.
    ScanTimeout(String),
    /// 502 Bad Gateway: scan engine output violates the script format.
    MalformedOutput(String),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::Invocation(InvocationError::BinaryNotFound(_)) => {
                ApiError::EngineUnavailable(message)
            }
            CoreError::Invocation(_) => ApiError::InvalidInvocation(message),
            CoreError::Engine(EngineError::Timeout(_) | EngineError::Cancelled) => {
                ApiError::ScanTimeout(message)
            }
            CoreError::Engine(_) => ApiError::EngineFailed(message),
            CoreError::MalformedOutput(_) => ApiError::MalformedOutput(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_key, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::InvalidInvocation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_invocation", msg)
            }
            ApiError::EngineUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "engine_unavailable", msg)
            }
            ApiError::EngineFailed(msg) => (StatusCode::BAD_GATEWAY, "engine_failed", msg),
            ApiError::ScanTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, "scan_timeout", msg),
            ApiError::MalformedOutput(msg) => {
                (StatusCode::BAD_GATEWAY, "malformed_script_output", msg)
            }
        };

        (
            status,
            Json(ApiErrorBody {
                error: error_key.into(),
                message,
            }),
        )
            .into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "bad request: {msg}"),
            ApiError::InvalidInvocation(msg) => write!(f, "invalid invocation: {msg}"),
            ApiError::EngineUnavailable(msg) => write!(f, "engine unavailable: {msg}"),
            ApiError::EngineFailed(msg) => write!(f, "engine failed: {msg}"),
            ApiError::ScanTimeout(msg) => write!(f, "scan timeout: {msg}"),
            ApiError::MalformedOutput(msg) => write!(f, "malformed script output: {msg}"),
        }
    }
}
