use netvuln_types::{
    CheckVulnResponse, NmapRun, PortRecord, ScriptOutput, Service, TargetResult,
    VULNERS_SCRIPT_ID, Vulnerability,
};
use tracing::debug;

use crate::vulners::{ParseError, parse_vulners_element};

/// A `vulners` row that could not be parsed, with its location in the run.
#[derive(Debug, thiserror::Error)]
#[error("malformed vulners output for {target} port {port}, row {row}: {source}")]
pub struct OutputError {
    pub target: String,
    pub port: u16,
    /// Index of the row within the script's first table.
    pub row: usize,
    #[source]
    pub source: ParseError,
}

/// Build the response for a finished run.
///
/// Hosts without an address or without any port are left out. Order of
/// hosts, ports and script rows is preserved. Any malformed row fails the
/// whole response.
pub fn build_response(run: &NmapRun) -> Result<CheckVulnResponse, OutputError> {
    let mut response = CheckVulnResponse::default();

    for host in &run.hosts {
        let Some(address) = host.addresses.first() else {
            debug!(ports = host.ports.len(), "skipping host without address");
            continue;
        };
        if host.ports.is_empty() {
            debug!(target = %address, "skipping host without ports");
            continue;
        }

        let target = address.to_string();
        let mut services = Vec::with_capacity(host.ports.len());
        for port in &host.ports {
            services.push(build_service(&target, port)?);
        }

        response.results.push(TargetResult { target, services });
    }

    Ok(response)
}

fn build_service(target: &str, port: &PortRecord) -> Result<Service, OutputError> {
    let vulns = collect_vulnerabilities(port.script(VULNERS_SCRIPT_ID)).map_err(|(row, source)| {
        OutputError {
            target: target.to_string(),
            port: port.id,
            row,
            source,
        }
    })?;

    Ok(Service {
        name: port.service.name.clone(),
        version: port.service.version.clone(),
        tcp_port: i32::from(port.id),
        vulns,
    })
}

/// Exploit rows of the script's first table, in row order.
///
/// A missing script or a script without tables means nothing was found.
fn collect_vulnerabilities(
    script: Option<&ScriptOutput>,
) -> Result<Vec<Vulnerability>, (usize, ParseError)> {
    let Some(outer) = script.and_then(|s| s.tables.first()) else {
        return Ok(Vec::new());
    };

    let mut vulns = Vec::new();
    for (idx, row) in outer.tables.iter().enumerate() {
        let element = parse_vulners_element(&row.elements).map_err(|e| (idx, e))?;
        if let Some(vuln) = element.into_vulnerability() {
            vulns.push(vuln);
        }
    }
    Ok(vulns)
}
