use crate::port::PortRecord;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// An `<address>` of a scanned host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Address {
    #[serde(rename = "@addr")]
    pub addr: String,
    /// "ipv4", "ipv6" or "mac".
    #[serde(rename = "@addrtype", default)]
    pub addr_type: String,
    #[serde(rename = "@vendor", default)]
    pub vendor: String,
}

impl Address {
    pub fn ipv4(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            addr_type: "ipv4".into(),
            vendor: String::new(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.addr)
    }
}

/// The `<status>` element of a host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HostState {
    /// "up", "down", "unknown" or "skipped".
    #[serde(rename = "@state", default)]
    pub state: String,
    #[serde(rename = "@reason", default)]
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Hostname {
    #[serde(rename = "@name")]
    pub name: String,
    /// "user" (given on the command line) or "PTR".
    #[serde(rename = "@type", default)]
    pub kind: String,
}

/// One `<host>` record of a run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HostRecord {
    #[serde(default)]
    pub status: HostState,
    #[serde(rename = "address", default)]
    pub addresses: Vec<Address>,
    #[serde(default, deserialize_with = "hostname_list")]
    pub hostnames: Vec<Hostname>,
    #[serde(default, deserialize_with = "port_list")]
    pub ports: Vec<PortRecord>,
}

impl HostRecord {
    pub fn new(addresses: Vec<Address>, ports: Vec<PortRecord>) -> Self {
        Self {
            status: HostState {
                state: "up".into(),
                reason: String::new(),
            },
            addresses,
            hostnames: Vec::new(),
            ports,
        }
    }
}

/// Flattens `<ports><port/>...</ports>` into the list of ports.
fn port_list<'de, D>(deserializer: D) -> Result<Vec<PortRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Ports {
        #[serde(rename = "port", default)]
        port: Vec<PortRecord>,
    }
    Ok(Ports::deserialize(deserializer)?.port)
}

/// Flattens `<hostnames><hostname/>...</hostnames>`.
fn hostname_list<'de, D>(deserializer: D) -> Result<Vec<Hostname>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Hostnames {
        #[serde(rename = "hostname", default)]
        hostname: Vec<Hostname>,
    }
    Ok(Hostnames::deserialize(deserializer)?.hostname)
}
