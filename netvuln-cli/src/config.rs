use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Map a logrus-style level name onto a tracing filter directive.
pub fn parse_log_level(value: &str) -> Option<&'static str> {
    match value.trim().to_ascii_lowercase().as_str() {
        "panic" | "fatal" | "error" => Some("error"),
        "warn" | "warning" => Some("warn"),
        "info" => Some("info"),
        "debug" => Some("debug"),
        "trace" => Some("trace"),
        _ => None,
    }
}

/// Initialize tracing. `RUST_LOG` wins; otherwise the configured level, or
/// `info` when it is missing or invalid.
pub fn init_tracing(log_level: Option<&str>) {
    let parsed = log_level.map(|value| (value, parse_log_level(value)));
    let level = parsed.and_then(|(_, level)| level).unwrap_or("info");

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    if let Some((value, None)) = parsed {
        tracing::warn!(value, "invalid log level; default `info` level is used");
    }
}

/// Parse the listen address. A bare ":PORT" binds all interfaces.
pub fn parse_listen_addr(value: &str) -> Result<SocketAddr> {
    let full = if value.starts_with(':') {
        format!("0.0.0.0{value}")
    } else {
        value.to_string()
    };
    full.parse()
        .with_context(|| format!("invalid listen address: {value}"))
}
