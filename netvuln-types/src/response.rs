use serde::{Deserialize, Serialize};

/// Input of the `CheckVulnerabilities` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckVulnRequest {
    /// Hostnames or addresses to scan.
    pub targets: Vec<String>,
    /// TCP ports to scan; empty means the engine's default port selection.
    #[serde(default)]
    pub tcp_ports: Vec<i32>,
}

/// A known vulnerability reported for a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub identifier: String,
    pub cvss_score: f32,
}

/// A service detected on a scanned port, with its vulnerabilities in the
/// order the lookup script reported them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub version: String,
    pub tcp_port: i32,
    #[serde(default)]
    pub vulns: Vec<Vulnerability>,
}

/// Scan result for one host, keyed by the host's first address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetResult {
    pub target: String,
    #[serde(default)]
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckVulnResponse {
    #[serde(default)]
    pub results: Vec<TargetResult>,
}
