//! Router control agent.
//!
//! An authenticated HTTP API for reading and writing network interface
//! credentials and bringing interfaces up/down, backed by the platform's
//! configuration utilities.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                 ROUTER AGENT                  │
//!                     │                                               │
//!   Client Request    │  ┌─────────┐   ┌─────────┐   ┌────────────┐  │
//!   ──────────────────┼─▶│  http   │──▶│  auth   │──▶│  routing   │  │
//!                     │  │ server  │   │ (token) │   │  (table)   │  │
//!                     │  └─────────┘   └─────────┘   └─────┬──────┘  │
//!                     │                                     │         │
//!                     │                                     ▼         │
//!                     │                              ┌────────────┐  │
//!                     │                              │    ops     │  │
//!                     │                              └─────┬──────┘  │
//!                     │                                     │         │
//!   Client Response   │  ┌──────────┐   ┌──────────┐  ┌────▼─────┐  │
//!   ◀─────────────────┼──│ envelope │◀──│  system  │◀─│   exec   │◀─┼── uci / ifstatus
//!                     │  │  (JSON)  │   │ wrappers │  │ (argv)   │  │    ifdown / ifup
//!                     │  └──────────┘   └──────────┘  └──────────┘  │
//!                     └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use router_agent::config::{load_config, AgentConfig};
use router_agent::http::HttpServer;
use router_agent::lifecycle::Shutdown;
use router_agent::observability::logging;

#[derive(Parser)]
#[command(name = "router-agent")]
#[command(about = "Authenticated HTTP control API for router network interfaces", long_about = None)]
struct Args {
    /// Path to a TOML configuration file; built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AgentConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        config_tool = %config.tools.config_tool.join(" "),
        "configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
