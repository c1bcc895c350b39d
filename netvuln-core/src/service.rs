use std::path::{Path, PathBuf};
use std::sync::Arc;

use netvuln_scan::{EngineError, InvocationError, ScanEngine, ScanInvocation};
use netvuln_types::{CheckVulnRequest, CheckVulnResponse};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::aggregate::{OutputError, build_response};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("failed to create scan invocation: {0}")]
    Invocation(#[from] InvocationError),
    #[error("failed to run scan: {0}")]
    Engine(#[from] EngineError),
    #[error("failed to get vulnerabilities: {0}")]
    MalformedOutput(#[from] OutputError),
}

impl CoreError {
    /// Short name of the stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Invocation(_) => "invocation",
            Self::Engine(_) => "engine",
            Self::MalformedOutput(_) => "output",
        }
    }
}

/// The vulnerability check operation: build the invocation, run the engine,
/// aggregate its result.
///
/// Holds no per-call state; one instance serves concurrent calls.
pub struct VulnService {
    binary: PathBuf,
    engine: Arc<dyn ScanEngine>,
}

impl VulnService {
    /// `binary` is the engine executable, resolved once by the caller.
    pub fn new(binary: impl Into<PathBuf>, engine: Arc<dyn ScanEngine>) -> Self {
        Self {
            binary: binary.into(),
            engine,
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Run one check. Cancelling `cancel` aborts the engine run.
    pub async fn check_vulnerabilities(
        &self,
        request: &CheckVulnRequest,
        cancel: &CancellationToken,
    ) -> Result<CheckVulnResponse, CoreError> {
        let invocation =
            ScanInvocation::vulners(&self.binary, &request.targets, &request.tcp_ports)?;

        info!(
            targets = ?request.targets,
            ports = ?request.tcp_ports,
            "starting vulnerability scan"
        );

        let report = self.engine.run(&invocation, cancel).await;
        if !report.warnings.is_empty() {
            warn!(
                targets = ?request.targets,
                warnings = ?report.warnings,
                "scan finished with warnings"
            );
        }
        let run = report.result?;

        let response = build_response(&run)?;
        info!(
            hosts = run.hosts.len(),
            targets = response.results.len(),
            "vulnerability scan complete"
        );
        Ok(response)
    }
}
