//! PDAs owned by the Hello World program.

use solana_sdk::pubkey::Pubkey;

use crate::state::{Config, Received};

pub const SEED_PREFIX_SENT: &[u8] = b"sent";

/// First sequence number the core bridge hands to a new emitter.
pub const INITIAL_SEQUENCE: u64 = 1;

pub fn derive_config_key(program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[Config::SEED_PREFIX], program_id).0
}

/// Message account the program posts its `sequence`-th Wormhole message into.
pub fn derive_wormhole_message_key(program_id: &Pubkey, sequence: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[SEED_PREFIX_SENT, &sequence.to_le_bytes()[..]],
        program_id,
    )
    .0
}

/// Account recording a message received from `chain` at `sequence`.
pub fn derive_received_key(program_id: &Pubkey, chain: u16, sequence: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[
            Received::SEED_PREFIX,
            &chain.to_le_bytes()[..],
            &sequence.to_le_bytes()[..],
        ],
        program_id,
    )
    .0
}
