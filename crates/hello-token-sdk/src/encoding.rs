//! Text encodings accepted at the boundary, normalised to raw bytes.

use base64::Engine;
use serde::Serializer;

use crate::{Error, Result};

/// Decode hex text, with or without a leading `0x`.
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    let text = text.trim();
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    Ok(hex::decode(text)?)
}

/// Decode standard (padded) base64, the encoding the guardian REST API uses
/// for `vaaBytes`.
pub fn decode_base64(text: &str) -> Result<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(text.trim())
        .map_err(|e| Error::InvalidBase64(e.to_string()))
}

/// `0x`-prefixed lowercase hex.
pub(crate) fn prefixed_hex(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Serialize bytes as [`prefixed_hex`].
pub(crate) fn serialize_hex<S, T>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: AsRef<[u8]>,
{
    serializer.serialize_str(&prefixed_hex(bytes))
}
