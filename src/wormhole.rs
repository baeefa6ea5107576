//! # Wormhole Accounts
//!
//! Addresses the Wormhole core bridge expects from an integrating program.
//! The bridge data, fee collector and sequence tracker live under the
//! Wormhole program; the emitter is owned by the integrating program.

use solana_sdk::pubkey::Pubkey;

pub const SEED_PREFIX_BRIDGE: &[u8] = b"Bridge";
pub const SEED_PREFIX_FEE_COLLECTOR: &[u8] = b"fee_collector";
pub const SEED_PREFIX_EMITTER: &[u8] = b"emitter";
pub const SEED_PREFIX_SEQUENCE: &[u8] = b"Sequence";

/// Core bridge program id on Solana mainnet.
pub const MAINNET_CORE_BRIDGE_ID: Pubkey =
    solana_sdk::pubkey!("worm2ZoG2kUd4vFXhvjh93UUH596ayRfgQ2MgjNMTth");

/// Core bridge program id on Solana devnet.
pub const DEVNET_CORE_BRIDGE_ID: Pubkey =
    solana_sdk::pubkey!("3u8hJUVTA4jH1wYAyUur7FFZVQ8H635K3tSHHF4ssjQ5");

/// Wormhole accounts an integrating program needs to post messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WormholeDerivedAccounts {
    pub bridge: Pubkey,
    pub fee_collector: Pubkey,
    pub emitter: Pubkey,
    pub sequence: Pubkey,
}

impl WormholeDerivedAccounts {
    /// Accounts in the order the program's instruction expects them.
    pub fn keys(&self) -> [Pubkey; 4] {
        [self.bridge, self.fee_collector, self.emitter, self.sequence]
    }
}

pub fn derive_bridge_key(wormhole_program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[SEED_PREFIX_BRIDGE], wormhole_program_id).0
}

pub fn derive_fee_collector_key(wormhole_program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[SEED_PREFIX_FEE_COLLECTOR], wormhole_program_id).0
}

/// Emitter PDA owned by the integrating program.
pub fn derive_emitter_key(emitter_program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[SEED_PREFIX_EMITTER], emitter_program_id).0
}

/// Sequence tracker the core bridge keeps for `emitter`.
pub fn derive_sequence_key(emitter: &Pubkey, wormhole_program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[SEED_PREFIX_SEQUENCE, emitter.as_ref()],
        wormhole_program_id,
    )
    .0
}

/// Resolve every Wormhole account `program_id` needs to integrate with
/// the core bridge deployed at `wormhole_program_id`.
pub fn get_wormhole_derived_accounts(
    program_id: &Pubkey,
    wormhole_program_id: &Pubkey,
) -> WormholeDerivedAccounts {
    let emitter = derive_emitter_key(program_id);
    WormholeDerivedAccounts {
        bridge: derive_bridge_key(wormhole_program_id),
        fee_collector: derive_fee_collector_key(wormhole_program_id),
        emitter,
        sequence: derive_sequence_key(&emitter, wormhole_program_id),
    }
}
