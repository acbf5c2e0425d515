use sha3::{Digest, Keccak256};

/// Keccak-256 of `data`. This is the pre-standard Keccak padding used by
/// Ethereum and Wormhole, not SHA3-256.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}
