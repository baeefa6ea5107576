// --- On-chain account layouts of the Hello World program ---
pub use crate::program::hello_world::accounts::{Config, Received, WormholeEmitter};
pub use crate::program::hello_world::types::WormholeAddresses;

pub const MESSAGE_MAX_LENGTH: usize = 1024;

impl Config {
    pub const MAXIMUM_SIZE: usize = 8 // discriminator
        + 32 // owner
        + 32 * 3 // wormhole
        + 4 // batch_id
        + 1 // finality
    ;
    pub const SEED_PREFIX: &'static [u8] = b"config";
}

impl WormholeEmitter {
    pub const MAXIMUM_SIZE: usize = 8 // discriminator
        + 1 // bump
    ;
}

impl Received {
    pub const MAXIMUM_SIZE: usize = 8 // discriminator
        + 4 // batch_id
        + 32 // wormhole_message_hash
        + 4 // Vec length
        + MESSAGE_MAX_LENGTH // message
    ;
    pub const SEED_PREFIX: &'static [u8] = b"received";
}
