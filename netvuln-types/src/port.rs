use crate::script::ScriptOutput;
use crate::service::ServiceDescriptor;
use serde::Deserialize;

/// The `<state>` element of a scanned port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PortState {
    /// "open", "closed", "filtered", "open|filtered", ...
    #[serde(rename = "@state", default)]
    pub state: String,
    /// Reason for the port state (e.g., "syn-ack", "conn-refused").
    #[serde(rename = "@reason", default)]
    pub reason: String,
}

/// A single port result as reported by the scan engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PortRecord {
    #[serde(rename = "@protocol", default)]
    pub protocol: String,
    #[serde(rename = "@portid")]
    pub id: u16,
    #[serde(default)]
    pub state: PortState,
    /// Detected service; name and version are empty when detection failed.
    #[serde(default)]
    pub service: ServiceDescriptor,
    /// Results from scripts run against this port.
    #[serde(rename = "script", default)]
    pub scripts: Vec<ScriptOutput>,
}

impl PortRecord {
    pub fn new(id: u16, service: ServiceDescriptor) -> Self {
        Self {
            protocol: "tcp".into(),
            id,
            state: PortState {
                state: "open".into(),
                reason: String::new(),
            },
            service,
            scripts: Vec::new(),
        }
    }

    /// The first script result with the given id, if any.
    pub fn script(&self, id: &str) -> Option<&ScriptOutput> {
        self.scripts.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_port_is_open_tcp() {
        let port = PortRecord::new(80, ServiceDescriptor::new("http", "2.0"));
        assert_eq!(port.id, 80);
        assert_eq!(port.protocol, "tcp");
        assert_eq!(port.state.state, "open");
        assert!(port.scripts.is_empty());
    }

    #[test]
    fn script_lookup_first_match_wins() {
        let mut port = PortRecord::new(443, ServiceDescriptor::default());
        port.scripts = vec![
            ScriptOutput {
                id: "ssl-cert".into(),
                ..ScriptOutput::default()
            },
            ScriptOutput {
                id: "vulners".into(),
                output: "first".into(),
                ..ScriptOutput::default()
            },
            ScriptOutput {
                id: "vulners".into(),
                output: "second".into(),
                ..ScriptOutput::default()
            },
        ];
        assert_eq!(port.script("vulners").map(|s| s.output.as_str()), Some("first"));
        assert!(port.script("http-title").is_none());
    }
}
