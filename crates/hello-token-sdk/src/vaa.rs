//! Decoder for the guardian-signed VAA envelope.
//!
//! Wire layout, all integers big-endian:
//!
//! ```markdown
//! 0  .. 1:   version
//! 1  .. 5:   guardian set index
//! 5  .. 6:   signature count (n)
//! 6  .. 6+66n: signatures, each [guardian index (1), signature (65)]
//! body:
//!   0  .. 4:  timestamp
//!   4  .. 8:  nonce
//!   8  .. 10: emitter chain
//!   10 .. 42: emitter address
//!   42 .. 50: sequence
//!   50 .. 51: consistency level
//!   51 ..   : payload
//! ```
//!
//! Signatures are extracted but never verified; that happens on-chain.

use serde::Serialize;

use crate::{
    cursor::{ByteCursor, Endian},
    encoding::serialize_hex,
    keccak256, Result, TokenTransfer,
};

/// Length of a secp256k1 signature with its recovery id.
pub const SIGNATURE_LEN: usize = 65;

/// Length of the fixed body fields preceding the payload.
pub const BODY_HEADER_LEN: usize = 51;

/// One guardian's signature as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuardianSignature {
    #[serde(rename = "index")]
    pub guardian_index: u8,
    #[serde(serialize_with = "serialize_hex")]
    pub signature: [u8; SIGNATURE_LEN],
}

/// A decoded VAA together with the Keccak-256 hash of its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedVaa {
    /// Passed through as-is; callers decide whether to accept non-`1` versions.
    pub version: u8,
    pub guardian_set_index: u32,
    /// In wire order, not necessarily sorted by guardian index.
    #[serde(rename = "guardianSignatures")]
    pub signatures: Vec<GuardianSignature>,
    /// Seconds since UNIX epoch.
    pub timestamp: u32,
    pub nonce: u32,
    pub emitter_chain: u16,
    #[serde(serialize_with = "serialize_hex")]
    pub emitter_address: [u8; 32],
    pub sequence: u64,
    pub consistency_level: u8,
    #[serde(serialize_with = "serialize_hex")]
    pub payload: Vec<u8>,
    /// Keccak-256 of the body (timestamp through payload).
    #[serde(serialize_with = "serialize_hex")]
    pub hash: [u8; 32],
}

impl ParsedVaa {
    /// Decode a signed VAA from raw bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut cursor = ByteCursor::new(bytes);

        let version = cursor.read_u8()?;
        let guardian_set_index = cursor.read_u32(Endian::Big)?;
        let num_signatures = cursor.read_u8()?;

        let signatures = (0..num_signatures)
            .map(|_| -> Result<GuardianSignature> {
                Ok(GuardianSignature {
                    guardian_index: cursor.read_u8()?,
                    signature: cursor.read_array()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let body_start = cursor.position();
        let timestamp = cursor.read_u32(Endian::Big)?;
        let nonce = cursor.read_u32(Endian::Big)?;
        let emitter_chain = cursor.read_u16(Endian::Big)?;
        let emitter_address = cursor.read_array()?;
        let sequence = cursor.read_u64(Endian::Big)?;
        let consistency_level = cursor.read_u8()?;
        let payload = cursor.rest().to_vec();

        Ok(Self {
            version,
            guardian_set_index,
            signatures,
            timestamp,
            nonce,
            emitter_chain,
            emitter_address,
            sequence,
            consistency_level,
            payload,
            hash: keccak256(&bytes[body_start..]),
        })
    }

    /// Decode a signed VAA from hex text (optional `0x` prefix).
    pub fn parse_hex(text: &str) -> Result<Self> {
        Self::parse(&crate::decode_hex(text)?)
    }

    /// The digest guardians actually sign: Keccak-256 of [`Self::hash`].
    pub fn digest(&self) -> [u8; 32] {
        keccak256(&self.hash)
    }

    /// Decode the payload as a token bridge transfer.
    pub fn token_transfer(&self) -> Result<TokenTransfer> {
        TokenTransfer::parse(&self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    // Token bridge transfer emitted on Sui (chain 21), sequence 126.
    const SUI_VAA: &str = "010000000001005deefe8dd16b7cb0b87c85c81a7ff60508454e9a5fb4ce3c28db6f8c5b1d0c752138bc97a9d372ab8617393402dc3ef37f67f38eb8adcaf49dbdc3a44d00a264006516a07900000000001540440411a170b4842ae7dee4f4a7b7a58bc0a98566e998850a7bb87bf5dc05b9000000000000007e00030000000000000000000000000000000000000000000000000000000000989298069b8857feab8184fb687f634618c035dac439dc1aeb3b5598a0f000000000010001ceda17841d79db34bd17721d2024343b5d9dd0320626958e10f4cf3d800a719e000135fbfedfe4ba06b311b86ae1d2064e08e583e6d550524307fc626648c4718c0c0138e121709ad96bd37a2f87022932336e9a290f62aef3d41dae00b1547c6f1938";

    #[test]
    fn test_parse_envelope() {
        let vaa = ParsedVaa::parse_hex(SUI_VAA).unwrap();

        assert_eq!(vaa.version, 1);
        assert_eq!(vaa.guardian_set_index, 0);
        assert_eq!(vaa.signatures.len(), 1);
        assert_eq!(vaa.signatures[0].guardian_index, 0);
        assert_eq!(
            hex::encode(vaa.signatures[0].signature),
            "5deefe8dd16b7cb0b87c85c81a7ff60508454e9a5fb4ce3c28db6f8c5b1d0c752138bc97a9d372ab8617393402dc3ef37f67f38eb8adcaf49dbdc3a44d00a26400"
        );
        assert_eq!(vaa.timestamp, 1_695_981_689);
        assert_eq!(vaa.nonce, 0);
        assert_eq!(vaa.emitter_chain, 21);
        assert_eq!(
            hex::encode(vaa.emitter_address),
            "40440411a170b4842ae7dee4f4a7b7a58bc0a98566e998850a7bb87bf5dc05b9"
        );
        assert_eq!(vaa.sequence, 126);
        assert_eq!(vaa.consistency_level, 0);
        assert_eq!(vaa.payload.len(), 166);
        assert_eq!(vaa.payload[0], 3);
        assert_eq!(
            hex::encode(vaa.hash),
            "38a8f6d08a6d1653f52bd9f845255ab2677edfc7128a7b35fb80bddb3e95b174"
        );
    }

    #[test]
    fn test_hash_covers_body_only() {
        let bytes = crate::decode_hex(SUI_VAA).unwrap();
        let vaa = ParsedVaa::parse(&bytes).unwrap();

        assert_eq!(vaa.hash, keccak256(&bytes[6 + 66..]));
        assert_eq!(vaa.digest(), keccak256(&vaa.hash));
    }

    #[test]
    fn test_version_is_passed_through() {
        let mut bytes = crate::decode_hex(SUI_VAA).unwrap();
        bytes[0] = 7;

        let vaa = ParsedVaa::parse(&bytes).unwrap();
        assert_eq!(vaa.version, 7);
    }

    #[test]
    fn test_empty_payload_is_allowed() {
        let mut bytes = vec![1, 0, 0, 0, 3, 0];
        bytes.extend_from_slice(&[0u8; BODY_HEADER_LEN]);

        let vaa = ParsedVaa::parse(&bytes).unwrap();
        assert_eq!(vaa.guardian_set_index, 3);
        assert!(vaa.signatures.is_empty());
        assert!(vaa.payload.is_empty());
        assert_eq!(vaa.hash, keccak256(&[0u8; BODY_HEADER_LEN]));
    }

    #[test]
    fn test_signature_count_beyond_buffer() {
        let mut bytes = crate::decode_hex(SUI_VAA).unwrap();
        // Claim 5 signatures; the body is then consumed as signature records
        // and runs out.
        bytes[5] = 5;

        assert!(matches!(
            ParsedVaa::parse(&bytes),
            Err(Error::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_short_body() {
        let mut bytes = vec![1, 0, 0, 0, 0, 0];
        bytes.extend_from_slice(&[0u8; BODY_HEADER_LEN - 1]);

        assert_eq!(
            ParsedVaa::parse(&bytes),
            Err(Error::TruncatedInput {
                offset: 6 + 50,
                needed: 1,
                remaining: 0
            })
        );
    }

    #[test]
    fn test_json_shape() {
        let vaa = ParsedVaa::parse_hex(SUI_VAA).unwrap();
        let json = serde_json::to_value(&vaa).unwrap();

        assert_eq!(json["emitterChain"], 21);
        assert_eq!(json["guardianSignatures"][0]["index"], 0);
        assert_eq!(
            json["hash"],
            "0x38a8f6d08a6d1653f52bd9f845255ab2677edfc7128a7b35fb80bddb3e95b174"
        );
        assert!(json["payload"].as_str().unwrap().starts_with("0x03"));
    }
}
