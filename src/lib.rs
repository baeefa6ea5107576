//! # Hello World Client
//!
//! Client-side helpers for the Wormhole "Hello World" Solana program.
//!
//! ## Architecture
//! - `address`: address inputs (`Pubkey`, base58 strings, raw bytes)
//! - `accounts`: PDAs owned by the Hello World program
//! - `wormhole`: accounts owned by or derived for the Wormhole core bridge
//! - `program`: typed program interface built on the Anchor client
//! - `instructions`: unsigned instruction builders
//! - `state`: on-chain account layouts
//! - `config`: environment configuration for the binary
//!
//! ## Example
//! ```no_run
//! use anchor_client::Cluster;
//! use hello_world_client::{create_initialize_instruction, wormhole::DEVNET_CORE_BRIDGE_ID};
//!
//! # async fn run() -> hello_world_client::error::Result<()> {
//! let ix = create_initialize_instruction(
//!     Cluster::Devnet,
//!     "11111111111111111111111111111111",
//!     "11111111111111111111111111111111",
//!     DEVNET_CORE_BRIDGE_ID,
//! )
//! .await?;
//! assert_eq!(ix.accounts.len(), 11);
//! # Ok(())
//! # }
//! ```

pub mod accounts;
pub mod address;
pub mod config;
pub mod error;
pub mod instructions;
pub mod program;
pub mod state;
pub mod state_structs;
pub mod wormhole;

pub use address::AddressLike;
pub use error::{HelloWorldError, Result};
pub use instructions::create_initialize_instruction;
pub use program::{create_hello_world_program_interface, HelloWorldProgram};
