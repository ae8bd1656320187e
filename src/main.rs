//! deen-gateway
//!
//! A thin JSON gateway in front of three public APIs, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                  GATEWAY                      │
//!     Client Request     │  ┌─────────┐    ┌─────────┐    ┌─────────┐   │
//!     ───────────────────┼─▶│  http   │───▶│   api   │───▶│  relay  │───┼──▶ alquran.cloud
//!                        │  │ server  │    │handlers │    │ client  │───┼──▶ hadith.gading.dev
//!                        │  └─────────┘    └─────────┘    └─────────┘───┼──▶ aladhan.com
//!                        │                                              │
//!                        │  config · observability · lifecycle ·        │
//!                        │  diagnostics                                 │
//!                        └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use deen_gateway::config::load_config;
use deen_gateway::lifecycle;
use deen_gateway::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "deen-gateway")]
#[command(about = "JSON gateway for Quran, Hadith and prayer-time APIs", long_about = None)]
struct Cli {
    /// Optional TOML configuration file. Environment variables override it.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    init_logging(&config.observability)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "deen-gateway starting");
    tracing::info!(
        bind_address = %config.bind_address(),
        quran = %config.upstreams.quran_base_url,
        hadith = %config.upstreams.hadith_base_url,
        aladhan = %config.upstreams.aladhan_base_url,
        upstream_timeout_secs = config.timeouts.upstream_secs,
        database_configured = config.database.url.is_some(),
        "Configuration loaded"
    );

    lifecycle::start(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
