use netvuln_types::NmapRun;

use crate::traits::EngineError;

/// Parse nmap's `-oX` document into the run model.
pub fn parse_run_xml(xml: &str) -> Result<NmapRun, EngineError> {
    quick_xml::de::from_str(xml).map_err(|e| EngineError::InvalidOutput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUN_XML: &str = include_str!("../tests/data/nmap_run.xml");

    #[test]
    fn parses_fixture_run() {
        let run = parse_run_xml(RUN_XML).unwrap();
        assert_eq!(run.scanner, "nmap");
        assert_eq!(run.hosts.len(), 3);
        assert_eq!(run.run_stats.finished.exit, "success");
        assert!(run.error_message().is_none());

        let host = &run.hosts[0];
        assert_eq!(host.status.state, "up");
        assert_eq!(host.addresses[0].addr, "45.33.32.156");
        assert_eq!(host.hostnames[0].name, "scanme.nmap.org");
        assert_eq!(host.ports.len(), 2);

        let http = &host.ports[1];
        assert_eq!(http.id, 80);
        assert_eq!(http.service.name, "http");
        assert_eq!(http.service.product, "Apache httpd");
        assert_eq!(http.service.version, "2.4.7");
        assert_eq!(http.service.cpes, vec!["cpe:/a:apache:http_server:2.4.7"]);
    }

    #[test]
    fn parses_script_tables() {
        let run = parse_run_xml(RUN_XML).unwrap();
        let http = &run.hosts[0].ports[1];
        let vulners = http.script("vulners").unwrap();
        assert_eq!(vulners.tables.len(), 1);

        let outer = &vulners.tables[0];
        assert_eq!(outer.key.as_deref(), Some("cpe:/a:apache:http_server:2.4.7"));
        assert_eq!(outer.tables.len(), 3);

        let row = &outer.tables[0];
        assert!(row.key.is_none());
        let keys: Vec<&str> = row.elements.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["is_exploit", "cvss", "id", "type"]);
        assert_eq!(row.elements[1].value, "7.5");
    }

    #[test]
    fn host_without_ports_parses_empty() {
        let run = parse_run_xml(RUN_XML).unwrap();
        assert!(run.hosts[2].ports.is_empty());
        assert_eq!(run.hosts[2].addresses.len(), 1);
    }

    #[test]
    fn error_run_is_reported() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<nmaprun scanner="nmap" args="nmap -oX - nohost" version="7.94">
<runstats><finished time="1" timestr="" summary="" elapsed="0.01" exit="error" errormsg="Failed to resolve &quot;nohost&quot;."/>
<hosts up="0" down="0" total="0"/></runstats>
</nmaprun>"#;
        let run = parse_run_xml(xml).unwrap();
        assert!(run.hosts.is_empty());
        assert_eq!(run.error_message(), Some("Failed to resolve \"nohost\"."));
    }

    #[test]
    fn garbage_is_invalid_output() {
        let err = parse_run_xml("Starting Nmap 7.94").unwrap_err();
        assert!(matches!(err, EngineError::InvalidOutput(_)));
    }
}
