//! Accounts owned by the programs a Hello Token client talks to, and the
//! complete account sets each Hello Token instruction needs.
//!
//! Each owning program gets its own module. Seeds follow the owning program's
//! conventions exactly, including integer byte order, which differs per seed:
//! chain ids are little-endian in Hello Token's own seeds but big-endian in
//! the token bridge's.

use serde::{Deserialize, Serialize};

use crate::{pda::find_program_address, Address, Result};

pub mod hello_token;
mod resolve;
pub mod spl;
pub mod token_bridge;
pub mod wormhole;

pub use resolve::*;

/// Wormhole chain id of Solana.
pub const CHAIN_ID_SOLANA: u16 = 1;

/// `11111111111111111111111111111111`
pub const SYSTEM_PROGRAM_ID: Address = Address([0; 32]);

/// `3u8hJUVTA4jH1wYAyUur7FFZVQ8H635K3tSHHF4ssjQ5`
pub const DEVNET_WORMHOLE: Address = Address([
    0x2b, 0x12, 0x46, 0xc9, 0xee, 0xfa, 0x3c, 0x46, 0x67, 0x92, 0x25, 0x31, 0x11, 0xf3, 0x5f, 0xec,
    0x1e, 0xe8, 0xee, 0x5e, 0x9d, 0xeb, 0xc4, 0x12, 0xd2, 0xe9, 0xad, 0xad, 0xfe, 0xcd, 0xcc, 0x72,
]);

/// `DZnkkTmCiFWfYTfT41X3Rd1kDgozqzxWaHqsw6W4x2oe`
pub const DEVNET_TOKEN_BRIDGE: Address = Address([
    0xba, 0xb2, 0x90, 0x45, 0x4a, 0x8d, 0xfd, 0xb0, 0x86, 0xb2, 0x66, 0x6a, 0x74, 0x52, 0x39, 0x8b,
    0xae, 0x19, 0x93, 0x96, 0x92, 0x33, 0xb7, 0xd8, 0xcf, 0xcc, 0x9a, 0x1b, 0x00, 0x01, 0xd0, 0xdd,
]);

/// Program ids of one deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Programs {
    pub wormhole: Address,
    pub token_bridge: Address,
    pub hello_token: Address,
}

impl Programs {
    /// Solana devnet Wormhole and token bridge with the given Hello Token deployment.
    pub fn devnet(hello_token: Address) -> Self {
        Self {
            wormhole: DEVNET_WORMHOLE,
            token_bridge: DEVNET_TOKEN_BRIDGE,
            hello_token,
        }
    }
}

/// Canonical address for `seeds`; the bump is not needed by any caller here.
fn derive(seeds: &[&[u8]], program_id: &Address) -> Result<Address> {
    find_program_address(seeds, program_id).map(|(address, _)| address)
}
