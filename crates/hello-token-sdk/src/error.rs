//! Error type shared by every decoder and deriver in this crate.

use crate::Address;

/// Errors returned while decoding attestations or deriving addresses.
///
/// Decoders either return a complete value or one of these; nothing is ever
/// partially constructed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The buffer ended before a field could be read.
    #[error("truncated input: needed {needed} bytes at offset {offset}, {remaining} remaining")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// The payload is a valid envelope but not a token transfer this crate decodes.
    #[error("unsupported token bridge payload type {0}")]
    UnsupportedPayloadType(u8),

    /// The transfer's extra payload is not the 33-byte recipient message.
    #[error("malformed recipient: expected a 33-byte payload, found {0} bytes")]
    MalformedRecipient(usize),

    /// Every bump produced an on-curve candidate.
    #[error("unable to find a valid program address for the given seeds")]
    NoValidAddress,

    /// The seeds (bump included) hash to an on-curve point.
    #[error("seeds do not produce a valid program address")]
    InvalidSeeds,

    #[error("{0} seeds exceeds the maximum allowed")]
    MaxSeedsExceeded(usize),

    #[error("seed of {0} bytes exceeds the maximum seed length")]
    MaxSeedLengthExceeded(usize),

    /// The chain cannot own the requested account (e.g. a Solana foreign endpoint).
    #[error("chain {0} is not valid for this account")]
    InvalidChain(u16),

    /// The mint passed for a native redemption is not the transferred token.
    #[error("mint {found} does not match transferred token {expected}")]
    MintMismatch { expected: Address, found: Address },

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
