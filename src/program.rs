//! # Hello World Program Interface
//!
//! Typed handle over the Hello World program, built on the Anchor client.
//! Account layouts, instruction args and account lists are generated from
//! `idls/hello_world.json`.
//!
//! ## Features
//! - Instruction encoding (Anchor discriminator + Borsh args)
//! - Config account reads over RPC

use std::sync::Arc;

use anchor_client::{Client, Cluster, Program};
use anchor_lang::{declare_program, InstructionData, ToAccountMetas};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signer::null_signer::NullSigner,
};

use crate::accounts::derive_config_key;
use crate::address::AddressLike;
use crate::error::{HelloWorldError, Result};
use crate::state::Config;

declare_program!(hello_world);

pub use hello_world::client::{accounts, args};

/// Client handle for one deployment of the Hello World program
pub struct HelloWorldProgram {
    program: Program<Arc<NullSigner>>,
}

/// Create the program interface for `program_id` on `cluster`.
///
/// Nothing is signed through this handle, so the client is given a
/// `NullSigner` for the default payer.
pub fn create_hello_world_program_interface(
    cluster: Cluster,
    program_id: impl AddressLike,
) -> Result<HelloWorldProgram> {
    let program_id = program_id.to_pubkey()?;
    let payer = Arc::new(NullSigner::new(&Pubkey::default()));
    let client = Client::new_with_options(cluster, payer, CommitmentConfig::confirmed());
    let program = client.program(program_id)?;

    tracing::debug!("Created Hello World program interface for {}", program_id);
    Ok(HelloWorldProgram { program })
}

impl HelloWorldProgram {
    pub fn id(&self) -> Pubkey {
        self.program.id()
    }

    /// Encode a call to this program against `accounts`.
    pub fn encode<A, D>(&self, accounts: A, args: D) -> Result<Instruction>
    where
        A: ToAccountMetas,
        D: InstructionData,
    {
        // Same bytes as `args.data()`, which panics instead of returning the error
        let mut data = D::DISCRIMINATOR.to_vec();
        args.serialize(&mut data)
            .map_err(|e| HelloWorldError::Encoding(e.to_string()))?;

        Ok(Instruction {
            program_id: self.id(),
            accounts: accounts.to_account_metas(None),
            data,
        })
    }

    /// Fetch and decode the program's config account.
    pub async fn fetch_config(&self) -> Result<Config> {
        let address = derive_config_key(&self.id());
        tracing::debug!("Fetching Hello World config account {}", address);

        self.program.account::<Config>(address).await.map_err(|e| {
            tracing::warn!("Failed to fetch config account {}: {}", address, e);
            HelloWorldError::from(e)
        })
    }
}
