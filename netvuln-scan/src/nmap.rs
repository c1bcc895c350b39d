use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::invocation::ScanInvocation;
use crate::traits::{EngineError, EngineReport, ScanEngine};
use crate::xml::parse_run_xml;

/// Runs nmap as a subprocess and parses its XML report from stdout.
///
/// The child is killed when the run is cancelled, times out, or the future
/// is dropped.
#[derive(Debug, Clone, Default)]
pub struct NmapEngine {
    timeout: Option<Duration>,
}

impl NmapEngine {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    async fn execute(
        &self,
        invocation: &ScanInvocation,
        cancel: &CancellationToken,
    ) -> Result<std::process::Output, EngineError> {
        let args = invocation.to_args();
        debug!(binary = %invocation.binary().display(), args = ?args, "starting nmap");

        let child = Command::new(invocation.binary())
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(EngineError::Spawn)?;

        let wait = async {
            match self.timeout {
                Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                    .await
                    .map_err(|_| EngineError::Timeout(limit))?
                    .map_err(EngineError::Io),
                None => child.wait_with_output().await.map_err(EngineError::Io),
            }
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(EngineError::Cancelled),
            output = wait => output,
        }
    }
}

#[async_trait]
impl ScanEngine for NmapEngine {
    async fn run(&self, invocation: &ScanInvocation, cancel: &CancellationToken) -> EngineReport {
        let output = match self.execute(invocation, cancel).await {
            Ok(output) => output,
            Err(e) => return EngineReport::failure(e, Vec::new()),
        };

        let stderr = String::from_utf8_lossy(&output.stderr);
        let warnings = collect_warnings(&stderr);

        if !output.status.success() {
            let error = EngineError::ExitStatus {
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            };
            return EngineReport::failure(error, warnings);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let run = match parse_run_xml(&stdout) {
            Ok(run) => run,
            Err(e) => return EngineReport::failure(e, warnings),
        };

        if let Some(msg) = run.error_message() {
            let error = EngineError::Reported(msg.to_string());
            return EngineReport::failure(error, warnings);
        }

        debug!(hosts = run.hosts.len(), "nmap finished");
        EngineReport::success(run, warnings)
    }
}

/// Every non-blank stderr line is a warning.
fn collect_warnings(stderr: &str) -> Vec<String> {
    stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
