//! # Hello World Client
//!
//! Builds the unsigned `initialize` instruction for a Hello World deployment
//! and prints it as JSON. Nothing is signed or submitted.
//!
//! ## Environment Setup
//! Copy values into `.env` or export them:
//! ```bash
//! HELLO_WORLD_PROGRAM_ID=<program id>
//! PAYER=<owner public key>
//! SOLANA_CLUSTER=devnet            # optional
//! WORMHOLE_PROGRAM_ID=<core bridge> # optional, devnet core bridge by default
//! ```
//!
//! ## Running
//! ```bash
//! cargo run
//! ```

use anyhow::{Context, Result};
use hello_world_client::{
    config::Config,
    create_initialize_instruction,
    state_structs::InstructionSummary,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false) // Don't show module targets for cleaner output
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    tracing::info!("Package: {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Config::from_env().context("Failed to load configuration from environment")?;
    tracing::info!("Cluster: {}", config.cluster.url());
    tracing::info!("Program: {}", config.program_id);
    tracing::info!("Wormhole: {}", config.wormhole_program_id);

    let ix = create_initialize_instruction(
        config.cluster.clone(),
        config.program_id,
        config.payer,
        config.wormhole_program_id,
    )
    .await
    .context("Failed to build initialize instruction")?;

    tracing::info!("Built initialize instruction with {} accounts", ix.accounts.len());

    let summary = InstructionSummary::from(&ix);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
