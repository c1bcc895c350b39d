use serde::Deserialize;

/// Service/version detection info for a port (the `<service>` element, -sV).
///
/// Every attribute may be missing: nmap omits what it could not detect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceDescriptor {
    /// Service name (e.g., "ssh", "http").
    #[serde(rename = "@name", default)]
    pub name: String,
    /// Product name (e.g., "OpenSSH", "Apache httpd").
    #[serde(rename = "@product", default)]
    pub product: String,
    /// Version string (e.g., "8.9p1", "2.4.52").
    #[serde(rename = "@version", default)]
    pub version: String,
    /// Extra info (e.g., "Ubuntu Linux; protocol 2.0").
    #[serde(rename = "@extrainfo", default)]
    pub extra_info: String,
    /// How the service was detected ("probed" or "table").
    #[serde(rename = "@method", default)]
    pub method: String,
    #[serde(rename = "cpe", default)]
    pub cpes: Vec<String>,
}

impl ServiceDescriptor {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Self::default()
        }
    }
}
