use crate::host::HostRecord;
use serde::Deserialize;

/// Root `<nmaprun>` element: the full result of one scan engine run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NmapRun {
    #[serde(rename = "@scanner", default)]
    pub scanner: String,
    /// Command line the engine was started with.
    #[serde(rename = "@args", default)]
    pub args: String,
    #[serde(rename = "@version", default)]
    pub version: String,
    #[serde(rename = "host", default)]
    pub hosts: Vec<HostRecord>,
    #[serde(rename = "runstats", default)]
    pub run_stats: RunStats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RunStats {
    #[serde(default)]
    pub finished: Finished,
}

/// `<finished>`: how the run ended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Finished {
    #[serde(rename = "@elapsed", default)]
    pub elapsed: String,
    #[serde(rename = "@summary", default)]
    pub summary: String,
    /// "success" or "error".
    #[serde(rename = "@exit", default)]
    pub exit: String,
    #[serde(rename = "@errormsg", default)]
    pub error_msg: String,
}

impl NmapRun {
    pub fn with_hosts(hosts: Vec<HostRecord>) -> Self {
        Self {
            scanner: "nmap".into(),
            hosts,
            ..Self::default()
        }
    }

    /// The engine's own error message when it reported a failed run.
    pub fn error_message(&self) -> Option<&str> {
        let finished = &self.run_stats.finished;
        if finished.exit != "error" {
            return None;
        }
        if finished.error_msg.is_empty() {
            Some("scan engine exited with an error")
        } else {
            Some(&finished.error_msg)
        }
    }
}
