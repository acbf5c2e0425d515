//! Accounts owned by the Hello Token program.
//!
//! Unlike the token bridge, integers in these seeds are little-endian.

use super::derive;
use crate::{Address, Result};

pub const SEED_SENDER_CONFIG: &[u8] = b"sender";
pub const SEED_REDEEMER_CONFIG: &[u8] = b"redeemer";
pub const SEED_FOREIGN_CONTRACT: &[u8] = b"foreign_contract";
pub const SEED_TOKEN_TRANSFER_MESSAGE: &[u8] = b"bridged";
pub const SEED_TMP_TOKEN_ACCOUNT: &[u8] = b"tmp";

pub fn sender_config(hello_token: &Address) -> Result<Address> {
    derive(&[SEED_SENDER_CONFIG], hello_token)
}

pub fn redeemer_config(hello_token: &Address) -> Result<Address> {
    derive(&[SEED_REDEEMER_CONFIG], hello_token)
}

/// Registered Hello Token peer on `chain`.
pub fn foreign_contract(hello_token: &Address, chain: u16) -> Result<Address> {
    derive(
        &[SEED_FOREIGN_CONTRACT, &chain.to_le_bytes()],
        hello_token,
    )
}

/// Core bridge message account for the outbound transfer with `sequence`.
pub fn token_transfer_message(hello_token: &Address, sequence: u64) -> Result<Address> {
    derive(
        &[SEED_TOKEN_TRANSFER_MESSAGE, &sequence.to_le_bytes()],
        hello_token,
    )
}

/// Staging account the program moves `mint` tokens through.
pub fn tmp_token_account(hello_token: &Address, mint: &Address) -> Result<Address> {
    derive(&[SEED_TMP_TOKEN_ACCOUNT, mint.as_ref()], hello_token)
}
