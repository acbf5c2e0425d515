use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

/// A 32-byte Solana account address, displayed in base58.
///
/// Kept independent of `solana_program::Pubkey` so decoding and derivation do
/// not pull in the Solana SDK; the bytes convert losslessly either way via
/// [`Address::to_bytes`] and `Pubkey::new_from_array`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub [u8; 32]);

impl Address {
    pub const fn new_from_array(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    pub fn from_hex(text: &str) -> Result<Self> {
        let bytes = crate::decode_hex(text)?;
        let len = bytes.len();
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| Error::InvalidAddress(format!("expected 32 bytes, got {len}")))
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut out = [0u8; 32];
        let len = bs58::decode(s)
            .onto(&mut out)
            .map_err(|e| Error::InvalidAddress(format!("{s}: {e}")))?;
        if len != 32 {
            return Err(Error::InvalidAddress(format!(
                "{s}: expected 32 bytes, got {len}"
            )));
        }
        Ok(Self(out))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
