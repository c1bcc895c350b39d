// ---------------------------------------------------------------------------
// End-to-end: nmap XML fixture -> CheckVulnResponse
// ---------------------------------------------------------------------------

use netvuln_core::build_response;
use netvuln_scan::parse_run_xml;
use netvuln_types::CheckVulnResponse;

const RUN_XML: &str = include_str!("../../netvuln-scan/tests/data/nmap_run.xml");
const EXPECTED_JSON: &str = include_str!("data/check_vuln_response.json");

#[test]
fn fixture_run_builds_expected_response() {
    let run = parse_run_xml(RUN_XML).expect("fixture should parse");
    let expected: CheckVulnResponse =
        serde_json::from_str(EXPECTED_JSON).expect("expected response should parse");

    let response = build_response(&run).expect("fixture has no malformed rows");

    // Round-trip through JSON so both sides went through the same f32 path.
    let json = serde_json::to_string(&response).unwrap();
    let response: CheckVulnResponse = serde_json::from_str(&json).unwrap();

    assert_eq!(response, expected);
}

#[test]
fn host_without_ports_is_not_reported() {
    let run = parse_run_xml(RUN_XML).unwrap();
    assert_eq!(run.hosts.len(), 3);

    let response = build_response(&run).unwrap();
    assert!(response.results.iter().all(|r| r.target != "10.0.0.5"));
}

#[test]
fn target_is_first_address() {
    let run = parse_run_xml(RUN_XML).unwrap();
    // The second host lists its IPv4 address before its MAC address.
    assert_eq!(run.hosts[1].addresses.len(), 2);

    let response = build_response(&run).unwrap();
    assert_eq!(response.results[1].target, "192.168.1.10");
}
