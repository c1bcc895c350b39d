use std::time::Duration;

use async_trait::async_trait;
use netvuln_types::NmapRun;
use tokio_util::sync::CancellationToken;

use crate::invocation::ScanInvocation;

/// The external scan engine.
///
/// Implementations execute one invocation and report the structured run
/// result. Warnings are returned alongside the outcome, also when the run
/// failed, so callers can surface them before reporting the failure.
#[async_trait]
pub trait ScanEngine: Send + Sync {
    async fn run(&self, invocation: &ScanInvocation, cancel: &CancellationToken) -> EngineReport;
}

/// Outcome of one engine run.
#[derive(Debug)]
pub struct EngineReport {
    pub result: Result<NmapRun, EngineError>,
    /// Non-fatal diagnostics (nmap's stderr lines).
    pub warnings: Vec<String>,
}

impl EngineReport {
    pub fn success(run: NmapRun, warnings: Vec<String>) -> Self {
        Self {
            result: Ok(run),
            warnings,
        }
    }

    pub fn failure(error: EngineError, warnings: Vec<String>) -> Self {
        Self {
            result: Err(error),
            warnings,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start scan engine: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("io error while waiting for scan engine: {0}")]
    Io(#[source] std::io::Error),
    #[error("scan engine exited with status {code:?}: {stderr}")]
    ExitStatus { code: Option<i32>, stderr: String },
    #[error("scan engine produced unreadable output: {0}")]
    InvalidOutput(String),
    #[error("scan engine reported an error: {0}")]
    Reported(String),
    #[error("scan timed out after {0:?}")]
    Timeout(Duration),
    #[error("scan cancelled")]
    Cancelled,
}
