//! Client-side building blocks for the Hello Token cross-chain transfer
//! application on Solana.
//!
//! Decodes guardian-signed VAAs and the token bridge transfers they carry,
//! derives program-derived addresses, and resolves the full account set each
//! Hello Token instruction needs. Nothing here talks to a network; every
//! operation is a pure function of its inputs.
//!
//! # Example
//!
//! ```rust
//! use hello_token_sdk::{accounts, Address, ParsedVaa, Programs};
//!
//! # fn main() -> hello_token_sdk::Result<()> {
//! let vaa = ParsedVaa::parse_hex(
//!     "010000000001005deefe8dd16b7cb0b87c85c81a7ff60508454e9a5fb4ce3c28db6f8c5b1d0c752138bc97a9d372ab8617393402dc3ef37f67f38eb8adcaf49dbdc3a44d00a264006516a07900000000001540440411a170b4842ae7dee4f4a7b7a58bc0a98566e998850a7bb87bf5dc05b9000000000000007e00030000000000000000000000000000000000000000000000000000000000989298069b8857feab8184fb687f634618c035dac439dc1aeb3b5598a0f000000000010001ceda17841d79db34bd17721d2024343b5d9dd0320626958e10f4cf3d800a719e000135fbfedfe4ba06b311b86ae1d2064e08e583e6d550524307fc626648c4718c0c0138e121709ad96bd37a2f87022932336e9a290f62aef3d41dae00b1547c6f1938",
//! )?;
//! assert_eq!(vaa.emitter_chain, 21);
//!
//! let programs = Programs::devnet("HeLLoToken1111111111111111111111111111111111".parse()?);
//! let redeem = accounts::redeem_transfer(&programs, &Address::default(), &vaa)?;
//! # let _ = redeem;
//! # Ok(())
//! # }
//! ```

mod address;
pub mod accounts;
mod cursor;
mod encoding;
mod error;
mod hash;
pub mod pda;
mod token_transfer;
mod vaa;

pub use address::*;
pub use accounts::Programs;
pub use cursor::*;
pub use encoding::{decode_base64, decode_hex};
pub use error::*;
pub use hash::*;
pub use pda::{create_program_address, find_program_address};
pub use primitive_types::U256;
pub use token_transfer::*;
pub use vaa::*;

#[cfg(feature = "testing")]
mod testing;

#[cfg(feature = "testing")]
pub use testing::*;
