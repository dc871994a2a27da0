//! tourid daemon: entry point for running the digital-ID ledger service.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use tourid_node::{LedgerService, ServiceConfig};
use tourid_types::{BlockHash, NetworkId};

#[derive(Parser)]
#[command(name = "tourid-daemon", about = "Visitor digital-ID ledger daemon")]
struct Cli {
    /// Port for the HTTP surface.
    #[arg(long, env = "TOURID_PORT")]
    port: Option<u16>,

    /// Proof-of-work difficulty (leading zero hex digits).
    #[arg(long, env = "TOURID_DIFFICULTY")]
    difficulty: Option<u32>,

    /// Genesis previous-hash (64 hex digits).
    #[arg(long, env = "TOURID_GENESIS_HASH")]
    genesis_hash: Option<String>,

    /// Network identifier reported in statistics.
    #[arg(long, env = "TOURID_NETWORK")]
    network: Option<String>,

    /// Pool size at which blocks are mined automatically.
    #[arg(long, env = "TOURID_AUTO_MINE_THRESHOLD")]
    auto_mine_threshold: Option<usize>,

    /// Hard cap on proof-of-work iterations per block.
    #[arg(long, env = "TOURID_MAX_MINE_ITERATIONS")]
    max_mine_iterations: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "TOURID_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (file_config, file_warning) = match cli.config {
        Some(ref path) => match ServiceConfig::from_toml_file(path) {
            Ok(cfg) => (Some(cfg), None),
            Err(e) => (None, Some(format!("{e}, using CLI defaults"))),
        },
        None => (None, None),
    };

    let mut config = file_config.unwrap_or_default();
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(difficulty) = cli.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(ref hash) = cli.genesis_hash {
        config.genesis_previous_hash =
            BlockHash::parse_hex(hash).context("invalid genesis hash")?;
    }
    if let Some(network) = cli.network {
        config.network = NetworkId::new(network);
    }
    if let Some(threshold) = cli.auto_mine_threshold {
        config.auto_mine_threshold = threshold;
    }
    if let Some(cap) = cli.max_mine_iterations {
        config.max_mine_iterations = Some(cap);
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    tourid_utils::init_tracing(&config.log_level);
    if let Some(warning) = file_warning {
        tracing::warn!("failed to load config file: {warning}");
    }

    tracing::info!(
        "Starting tourid service on {} (port {}, difficulty {}, auto-mine at {})",
        config.network,
        config.port,
        config.difficulty,
        config.auto_mine_threshold,
    );

    let service = Arc::new(LedgerService::new(config.params())?);
    tourid_rpc::run(service, config.port).await?;

    tracing::info!("tourid daemon exited cleanly");
    Ok(())
}
