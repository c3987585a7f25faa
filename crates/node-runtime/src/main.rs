//! # Quantum-Chain Genesis Inspector
//!
//! Prints the genesis block of the configured network.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging
//! 2. Load configuration (from env)
//! 3. Resolve and hash the network's genesis block
//! 4. Emit it as JSON on stdout

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use node_runtime::{genesis, NodeConfig};

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = NodeConfig::from_env();
    let entry = genesis(config.network);
    info!(
        network = %entry.network,
        hash = %entry.hash,
        timestamp = entry.block.header.timestamp,
        "Genesis block ready"
    );

    let json = serde_json::to_string_pretty(entry).context("Failed to encode genesis block")?;
    println!("{json}");

    Ok(())
}
