use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

/// Default listen address (all interfaces, port 9000).
pub const DEFAULT_LISTEN: &str = ":9000";

/// netvuln command line
#[derive(Parser, Debug)]
#[command(name = "netvuln", version, about = "Vulnerability check service backed by nmap and the vulners script")]
pub struct Args {
    /// Address to serve the API on; a bare ":PORT" listens on all interfaces
    #[arg(long, env = "SRV_ADDR", default_value = DEFAULT_LISTEN, value_name = "ADDR", global = true)]
    pub listen: String,

    /// Log level: panic, fatal, error, warn, info, debug or trace (RUST_LOG takes precedence)
    #[arg(long = "log-level", env = "LOG_LVL", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Path to the nmap binary (default: look up `nmap` on PATH)
    #[arg(long = "nmap-path", env = "NMAP_PATH", value_name = "PATH", global = true)]
    pub nmap_path: Option<PathBuf>,

    /// Abort a scan that runs longer than this many seconds
    #[arg(long = "scan-timeout", env = "SCAN_TIMEOUT_SECS", value_name = "SECS", global = true)]
    pub scan_timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Serve the HTTP API (default)
    Serve,
    /// Run a single check and print the response as JSON
    Check {
        /// Target host(s): IP, CIDR, range, or hostname
        #[arg(value_name = "TARGET", required = true, num_args = 1..)]
        targets: Vec<String>,

        /// TCP ports, comma separated (e.g., 53,80). Defaults to nmap's port selection.
        #[arg(short = 'p', long = "ports", value_name = "PORTS", value_delimiter = ',', allow_negative_numbers = true)]
        ports: Vec<i32>,
    },
}

impl Args {
    pub fn scan_timeout(&self) -> Option<Duration> {
        self.scan_timeout_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
    }
}
