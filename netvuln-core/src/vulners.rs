//! Parsing of a single `vulners` script row.
//!
//! The script reports one nested table per candidate finding, each a bag of
//! `<elem key="...">value</elem>` pairs in no particular order:
//!
//! ```text
//! id          CVE-2017-7679
//! type        cve
//! is_exploit  false
//! cvss        7.5
//! ```
//!
//! All stringly-typed key lookups on script output happen in this module.

use netvuln_types::{ScriptElement, Vulnerability};

/// Key of the flag that marks a row as a reportable finding.
pub const IS_EXPLOIT_KEY: &str = "is_exploit";
pub const ID_KEY: &str = "id";
pub const CVSS_KEY: &str = "cvss";

const TRUE_LITERAL: &str = "true";

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("row has no `is_exploit` field")]
    MalformedRow,
    #[error("failed to parse cvss {value:?}: {reason}")]
    MalformedCvss { value: String, reason: String },
}

/// One parsed candidate row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VulnersElement {
    pub is_exploit: bool,
    pub id: String,
    pub cvss: f32,
}

impl VulnersElement {
    /// Promote an exploit row to a reportable vulnerability.
    pub fn into_vulnerability(self) -> Option<Vulnerability> {
        self.is_exploit.then_some(Vulnerability {
            identifier: self.id,
            cvss_score: self.cvss,
        })
    }
}

/// Classify and parse one candidate row.
///
/// * no `is_exploit` key: [`ParseError::MalformedRow`];
/// * any `is_exploit` other than `"true"`: a non-exploit element, nothing
///   else is read from the row;
/// * otherwise `id` and `cvss` are extracted. A missing `id` yields an empty
///   identifier; a missing, non-numeric or non-finite `cvss` is
///   [`ParseError::MalformedCvss`].
///
/// A repeated `id` or `cvss` resolves to its last occurrence in row order.
pub fn parse_vulners_element(elements: &[ScriptElement]) -> Result<VulnersElement, ParseError> {
    let mut flags = elements
        .iter()
        .filter(|el| el.key == IS_EXPLOIT_KEY)
        .map(|el| el.value.as_str())
        .peekable();
    if flags.peek().is_none() {
        return Err(ParseError::MalformedRow);
    }
    if !flags.all(|flag| flag == TRUE_LITERAL) {
        return Ok(VulnersElement::default());
    }

    let id = last_value(elements, ID_KEY).unwrap_or_default();
    let raw_cvss = last_value(elements, CVSS_KEY).unwrap_or_default();

    Ok(VulnersElement {
        is_exploit: true,
        id: id.to_string(),
        cvss: parse_cvss(raw_cvss)?,
    })
}

fn last_value<'a>(elements: &'a [ScriptElement], key: &str) -> Option<&'a str> {
    elements
        .iter()
        .rev()
        .find(|el| el.key == key)
        .map(|el| el.value.as_str())
}

fn parse_cvss(raw: &str) -> Result<f32, ParseError> {
    let malformed = |reason: String| ParseError::MalformedCvss {
        value: raw.to_string(),
        reason,
    };
    let cvss: f32 = raw.parse().map_err(|e: std::num::ParseFloatError| malformed(e.to_string()))?;
    if !cvss.is_finite() {
        return Err(malformed("not a finite number".into()));
    }
    Ok(cvss)
}
