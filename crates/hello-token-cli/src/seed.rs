//! Typed seeds for `derive`, so integer byte order is always explicit.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use hello_token_sdk::{decode_hex, Address};

/// One seed, written `<kind>:<value>`:
///
/// * `str:sender` raw UTF-8 bytes
/// * `hex:0x0102` raw bytes
/// * `key:<base58>` a 32-byte address
/// * `u8:7`, `u16le:21`, `u16be:21`, `u32le:..`, `u32be:..`, `u64le:..`, `u64be:..`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed(pub Vec<u8>);

impl FromStr for Seed {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (kind, value) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("seed `{s}` is missing a `<kind>:` prefix"))?;

        let bytes = match kind {
            "str" => value.as_bytes().to_vec(),
            "hex" => decode_hex(value)?,
            "key" => value.parse::<Address>()?.to_bytes().to_vec(),
            "u8" => vec![parse_int::<u8>(value)?],
            "u16le" => parse_int::<u16>(value)?.to_le_bytes().to_vec(),
            "u16be" => parse_int::<u16>(value)?.to_be_bytes().to_vec(),
            "u32le" => parse_int::<u32>(value)?.to_le_bytes().to_vec(),
            "u32be" => parse_int::<u32>(value)?.to_be_bytes().to_vec(),
            "u64le" => parse_int::<u64>(value)?.to_le_bytes().to_vec(),
            "u64be" => parse_int::<u64>(value)?.to_be_bytes().to_vec(),
            other => bail!("unknown seed kind `{other}`"),
        };
        Ok(Self(bytes))
    }
}

fn parse_int<T>(value: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("`{value}` is not a valid integer"))
}
