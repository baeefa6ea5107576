//! Configuration module for environment variables and application settings

use std::env;
use std::str::FromStr;

use anchor_client::Cluster;
use anyhow::{Context, Result, anyhow};
use solana_sdk::pubkey::Pubkey;

use crate::address::AddressLike;
use crate::wormhole::DEVNET_CORE_BRIDGE_ID;

#[derive(Debug, Clone)]
pub struct Config {
    /// Cluster name (`devnet`, `mainnet`, `localnet`, ...) or RPC URL
    pub cluster: Cluster,

    /// Deployed Hello World program
    pub program_id: Pubkey,

    /// Wormhole core bridge program
    pub wormhole_program_id: Pubkey,

    /// Owner paying for `initialize`
    pub payer: Pubkey,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let cluster = lookup("SOLANA_CLUSTER").unwrap_or_else(|| "devnet".to_string());

        Ok(Self {
            cluster: Cluster::from_str(&cluster)
                .map_err(|e| anyhow!("Invalid SOLANA_CLUSTER '{}': {}", cluster, e))?,

            program_id: lookup("HELLO_WORLD_PROGRAM_ID")
                .ok_or_else(|| anyhow!("HELLO_WORLD_PROGRAM_ID environment variable is required"))?
                .to_pubkey()
                .context("Invalid HELLO_WORLD_PROGRAM_ID")?,

            wormhole_program_id: match lookup("WORMHOLE_PROGRAM_ID") {
                Some(id) => id.to_pubkey().context("Invalid WORMHOLE_PROGRAM_ID")?,
                None => DEVNET_CORE_BRIDGE_ID,
            },

            payer: lookup("PAYER")
                .ok_or_else(|| anyhow!("PAYER environment variable is required"))?
                .to_pubkey()
                .context("Invalid PAYER")?,
        })
    }
}
