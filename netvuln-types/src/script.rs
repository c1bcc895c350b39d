use serde::Deserialize;

/// Identifier of the NSE script that looks up known vulnerabilities for a
/// detected service (`nmap --script vulners`).
pub const VULNERS_SCRIPT_ID: &str = "vulners";

/// Output of one NSE script run against a port, as written in nmap's XML.
///
/// Structured output is a recursive table of tables whose leaves are
/// key/value string pairs. Key order is whatever the script produced and is
/// not guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScriptOutput {
    /// Script identifier (e.g. "vulners", "http-title").
    #[serde(rename = "@id")]
    pub id: String,
    /// Human-readable output text.
    #[serde(rename = "@output", default)]
    pub output: String,
    #[serde(rename = "table", default)]
    pub tables: Vec<ScriptTable>,
    #[serde(rename = "elem", default)]
    pub elements: Vec<ScriptElement>,
}

/// A `<table>` node of structured script output.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScriptTable {
    /// Table key; absent for list-style tables.
    #[serde(rename = "@key", default)]
    pub key: Option<String>,
    #[serde(rename = "table", default)]
    pub tables: Vec<ScriptTable>,
    #[serde(rename = "elem", default)]
    pub elements: Vec<ScriptElement>,
}

/// A single `<elem key="...">value</elem>` leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScriptElement {
    #[serde(rename = "@key", default)]
    pub key: String,
    #[serde(rename = "$text", default)]
    pub value: String,
}

impl ScriptElement {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl ScriptTable {
    /// A keyless table holding only leaf elements.
    pub fn from_elements(elements: Vec<ScriptElement>) -> Self {
        Self {
            key: None,
            tables: Vec::new(),
            elements,
        }
    }

    /// A table holding only nested tables.
    pub fn from_tables(key: Option<String>, tables: Vec<ScriptTable>) -> Self {
        Self {
            key,
            tables,
            elements: Vec::new(),
        }
    }
}
