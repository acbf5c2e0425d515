//! Wormhole core bridge accounts.

use super::derive;
use crate::{Address, Result};

pub const SEED_BRIDGE: &[u8] = b"Bridge";
pub const SEED_FEE_COLLECTOR: &[u8] = b"fee_collector";
pub const SEED_SEQUENCE: &[u8] = b"Sequence";
pub const SEED_POSTED_VAA: &[u8] = b"PostedVAA";
pub const SEED_GUARDIAN_SET: &[u8] = b"GuardianSet";

/// Derived by each emitting program under its own id, not the core bridge's.
pub const SEED_EMITTER: &[u8] = b"emitter";

/// Core bridge configuration.
pub fn bridge(wormhole: &Address) -> Result<Address> {
    derive(&[SEED_BRIDGE], wormhole)
}

pub fn fee_collector(wormhole: &Address) -> Result<Address> {
    derive(&[SEED_FEE_COLLECTOR], wormhole)
}

/// The emitter account `program` signs messages with.
pub fn emitter(program: &Address) -> Result<Address> {
    derive(&[SEED_EMITTER], program)
}

/// Sequence tracker for `emitter`, owned by the core bridge.
pub fn emitter_sequence(wormhole: &Address, emitter: &Address) -> Result<Address> {
    derive(&[SEED_SEQUENCE, emitter.as_ref()], wormhole)
}

/// Where the core bridge stores a VAA once posted, keyed by body hash.
pub fn posted_vaa(wormhole: &Address, vaa_hash: &[u8; 32]) -> Result<Address> {
    derive(&[SEED_POSTED_VAA, vaa_hash], wormhole)
}

pub fn guardian_set(wormhole: &Address, index: u32) -> Result<Address> {
    derive(&[SEED_GUARDIAN_SET, &index.to_be_bytes()], wormhole)
}
