//! Token bridge accounts.
//!
//! Chain ids and sequences are big-endian in these seeds.

use super::{derive, CHAIN_ID_SOLANA};
use crate::{Address, Error, Result};

pub const SEED_CONFIG: &[u8] = b"config";
pub const SEED_AUTHORITY_SIGNER: &[u8] = b"authority_signer";
pub const SEED_CUSTODY_SIGNER: &[u8] = b"custody_signer";
pub const SEED_MINT_AUTHORITY: &[u8] = b"mint_signer";
pub const SEED_WRAPPED_MINT: &[u8] = b"wrapped";
pub const SEED_WRAPPED_META: &[u8] = b"meta";

pub fn config(token_bridge: &Address) -> Result<Address> {
    derive(&[SEED_CONFIG], token_bridge)
}

/// Delegate the sender approves to move tokens out of its account.
pub fn authority_signer(token_bridge: &Address) -> Result<Address> {
    derive(&[SEED_AUTHORITY_SIGNER], token_bridge)
}

pub fn custody_signer(token_bridge: &Address) -> Result<Address> {
    derive(&[SEED_CUSTODY_SIGNER], token_bridge)
}

pub fn mint_authority(token_bridge: &Address) -> Result<Address> {
    derive(&[SEED_MINT_AUTHORITY], token_bridge)
}

/// Custody account holding locked native tokens of `mint`.
pub fn custody(token_bridge: &Address, mint: &Address) -> Result<Address> {
    derive(&[mint.as_ref()], token_bridge)
}

/// Mint the token bridge creates for a foreign token.
pub fn wrapped_mint(
    token_bridge: &Address,
    token_chain: u16,
    token_address: &[u8; 32],
) -> Result<Address> {
    if token_chain == CHAIN_ID_SOLANA {
        return Err(Error::InvalidChain(token_chain));
    }
    derive(
        &[SEED_WRAPPED_MINT, &token_chain.to_be_bytes(), token_address],
        token_bridge,
    )
}

/// Origin chain and address of a wrapped `mint`.
pub fn wrapped_meta(token_bridge: &Address, mint: &Address) -> Result<Address> {
    derive(&[SEED_WRAPPED_META, mint.as_ref()], token_bridge)
}

/// Replay-protection marker for one redeemed VAA.
pub fn claim(
    token_bridge: &Address,
    emitter_address: &[u8; 32],
    emitter_chain: u16,
    sequence: u64,
) -> Result<Address> {
    derive(
        &[
            emitter_address,
            &emitter_chain.to_be_bytes(),
            &sequence.to_be_bytes(),
        ],
        token_bridge,
    )
}

/// Registration of the token bridge deployed on `chain`.
pub fn foreign_endpoint(
    token_bridge: &Address,
    chain: u16,
    emitter_address: &[u8; 32],
) -> Result<Address> {
    if chain == CHAIN_ID_SOLANA {
        return Err(Error::InvalidChain(chain));
    }
    derive(&[&chain.to_be_bytes(), emitter_address], token_bridge)
}
