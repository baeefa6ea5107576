use anchor_client::Cluster;
use solana_sdk::instruction::Instruction;

use crate::accounts::{derive_config_key, derive_wormhole_message_key, INITIAL_SEQUENCE};
use crate::address::AddressLike;
use crate::error::Result;
use crate::program::{accounts, args, create_hello_world_program_interface};
use crate::wormhole::get_wormhole_derived_accounts;

/// Build the unsigned `initialize` instruction.
///
/// The owner is `payer` and signs; the config account is derived from
/// `program_id`; the Wormhole accounts are resolved for the pair
/// (`program_id`, `wormhole_program_id`). All three addresses are checked
/// before anything else happens, so a malformed one fails with
/// `InvalidAddress` and no instruction is produced.
pub async fn create_initialize_instruction(
    cluster: Cluster,
    program_id: impl AddressLike,
    payer: impl AddressLike,
    wormhole_program_id: impl AddressLike,
) -> Result<Instruction> {
    let program_id = program_id.to_pubkey()?;
    let payer = payer.to_pubkey()?;
    let wormhole_program_id = wormhole_program_id.to_pubkey()?;

    let program = create_hello_world_program_interface(cluster, program_id)?;
    let wormhole = get_wormhole_derived_accounts(&program.id(), &wormhole_program_id);

    // The program posts its first Wormhole message during `initialize`
    program.encode(
        accounts::Initialize {
            owner: payer,
            config: derive_config_key(&program_id),
            wormhole_program: wormhole_program_id,
            wormhole_bridge: wormhole.bridge,
            wormhole_fee_collector: wormhole.fee_collector,
            wormhole_emitter: wormhole.emitter,
            wormhole_sequence: wormhole.sequence,
            wormhole_message: derive_wormhole_message_key(&program_id, INITIAL_SEQUENCE),
            clock: solana_sdk::sysvar::clock::ID,
            rent: solana_sdk::sysvar::rent::ID,
            system_program: anchor_lang::system_program::ID,
        },
        args::Initialize {},
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::Discriminator;
    use solana_sdk::pubkey::Pubkey;

    use crate::error::HelloWorldError;
    use crate::wormhole::DEVNET_CORE_BRIDGE_ID;

    #[tokio::test]
    async fn test_initialize_accounts_and_data() {
        let program_id = Pubkey::new_unique();
        let payer = Pubkey::new_unique();
        let wormhole_program_id = DEVNET_CORE_BRIDGE_ID;

        let ix = create_initialize_instruction(Cluster::Localnet, program_id, payer, wormhole_program_id)
            .await
            .unwrap();

        let bridge = get_wormhole_derived_accounts(&program_id, &wormhole_program_id);
        let mut expected = vec![payer, derive_config_key(&program_id), wormhole_program_id];
        expected.extend(bridge.keys());

        let keys: Vec<Pubkey> = ix.accounts.iter().map(|meta| meta.pubkey).collect();
        assert_eq!(ix.program_id, program_id);
        assert_eq!(&keys[..expected.len()], expected.as_slice());
        assert_eq!(ix.data, args::Initialize::DISCRIMINATOR.to_vec());
        assert_eq!(ix.accounts[7].pubkey, derive_wormhole_message_key(&program_id, INITIAL_SEQUENCE));
        assert_eq!(ix.accounts[8].pubkey, solana_sdk::sysvar::clock::ID);
        assert_eq!(ix.accounts[9].pubkey, solana_sdk::sysvar::rent::ID);
        assert_eq!(ix.accounts[10].pubkey, anchor_lang::system_program::ID);
        assert_eq!(ix.accounts.len(), 11);
    }

    #[tokio::test]
    async fn test_owner_is_payer_and_signs() {
        let payer = Pubkey::new_unique();
        let ix = create_initialize_instruction(
            Cluster::Localnet,
            Pubkey::new_unique(),
            payer,
            DEVNET_CORE_BRIDGE_ID,
        )
        .await
        .unwrap();

        let owner = &ix.accounts[0];
        assert_eq!(owner.pubkey, payer);
        assert!(owner.is_signer);
        assert!(owner.is_writable);
        assert_eq!(ix.accounts.iter().filter(|meta| meta.is_signer).count(), 1);
        assert!(!ix.accounts[2].is_writable);
    }

    #[tokio::test]
    async fn test_bridge_accounts_appear_exactly_once() {
        let program_id = Pubkey::new_unique();
        let ix = create_initialize_instruction(
            Cluster::Localnet,
            program_id,
            Pubkey::new_unique(),
            DEVNET_CORE_BRIDGE_ID,
        )
        .await
        .unwrap();

        for key in get_wormhole_derived_accounts(&program_id, &DEVNET_CORE_BRIDGE_ID).keys() {
            let hits = ix.accounts.iter().filter(|meta| meta.pubkey == key).count();
            assert_eq!(hits, 1, "bridge account {key} should appear once");
        }
    }

    #[tokio::test]
    async fn test_deterministic_across_calls_and_encodings() {
        let program_id = Pubkey::new_unique();
        let payer = Pubkey::new_unique();

        let first = create_initialize_instruction(
            Cluster::Localnet,
            program_id,
            payer,
            DEVNET_CORE_BRIDGE_ID,
        )
        .await
        .unwrap();
        let second = create_initialize_instruction(
            Cluster::Localnet,
            program_id.to_string(),
            payer.to_bytes(),
            DEVNET_CORE_BRIDGE_ID.to_bytes().to_vec(),
        )
        .await
        .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_malformed_address_in_any_position() {
        let good = Pubkey::new_unique().to_string();
        let bad = "0OIl".to_string();
        let cases = [
            (bad.clone(), good.clone(), good.clone()),
            (good.clone(), bad.clone(), good.clone()),
            (good.clone(), good.clone(), bad.clone()),
        ];

        for (program_id, payer, wormhole_program_id) in cases {
            let result = create_initialize_instruction(
                Cluster::Localnet,
                program_id,
                payer,
                wormhole_program_id,
            )
            .await;
            assert!(matches!(result, Err(HelloWorldError::InvalidAddress { .. })));
        }

        let short = vec![0u8; 16];
        let result = create_initialize_instruction(
            Cluster::Localnet,
            Pubkey::new_unique(),
            short,
            DEVNET_CORE_BRIDGE_ID,
        )
        .await;
        assert!(matches!(result, Err(HelloWorldError::InvalidAddress { .. })));
    }
}
