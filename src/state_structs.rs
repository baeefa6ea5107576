// --- Printable views of unsigned instructions ---
use base64::{Engine, engine::general_purpose::STANDARD};
use serde::Serialize;
use solana_sdk::instruction::{AccountMeta, Instruction};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub pubkey: String, // base58 pubkey
    pub is_signer: bool,
    pub is_writable: bool,
}

/// Unsigned instruction handed back to the caller for signing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionSummary {
    pub program_id: String,
    pub accounts: Vec<AccountSummary>,
    pub data: String, // Base64 encoded instruction data
}

impl From<&AccountMeta> for AccountSummary {
    fn from(meta: &AccountMeta) -> Self {
        AccountSummary {
            pubkey: meta.pubkey.to_string(),
            is_signer: meta.is_signer,
            is_writable: meta.is_writable,
        }
    }
}

impl From<&Instruction> for InstructionSummary {
    fn from(ix: &Instruction) -> Self {
        InstructionSummary {
            program_id: ix.program_id.to_string(),
            accounts: ix.accounts.iter().map(AccountSummary::from).collect(),
            data: STANDARD.encode(&ix.data),
        }
    }
}
