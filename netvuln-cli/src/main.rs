mod args;
mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use args::{Args, Command};
use netvuln_core::{CancellationToken, VulnService};
use netvuln_scan::{NmapEngine, locate_nmap};
use netvuln_types::CheckVulnRequest;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    config::init_tracing(args.log_level.as_deref());

    // Resolved once; every call reuses the same path.
    let binary = locate_nmap(args.nmap_path.as_deref()).context("failed to init scan engine")?;

    let engine = Arc::new(NmapEngine::new(args.scan_timeout()));
    let timeout_secs = engine.timeout().map(|t| t.as_secs());
    let service = VulnService::new(binary, engine);
    info!(path = %service.binary().display(), timeout_secs = ?timeout_secs, "using nmap");

    match args.command {
        None | Some(Command::Serve) => {
            let listen_addr = config::parse_listen_addr(&args.listen)?;
            netvuln_api::start_server(netvuln_api::ApiConfig {
                listen_addr,
                service,
            })
            .await
            .context("server is broken")
        }
        Some(Command::Check { targets, ports }) => run_check(&service, targets, ports).await,
    }
}

/// Run one check locally and print the response.
async fn run_check(service: &VulnService, targets: Vec<String>, tcp_ports: Vec<i32>) -> Result<()> {
    let request = CheckVulnRequest { targets, tcp_ports };

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let response = service
        .check_vulnerabilities(&request, &cancel)
        .await
        .context("vulnerability check failed")?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
