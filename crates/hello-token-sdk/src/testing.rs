//! Deterministic guardians and VAA construction for tests.
//!
//! Everything here produces bytes in the exact wire layout [`ParsedVaa`]
//! decodes, signed the way guardians sign: secp256k1 over the Keccak-256 of
//! the body hash.
//!
//! ```rust
//! use hello_token_sdk::{GuardianKeySet, ParsedVaa, VaaBuilder};
//!
//! let guardians = GuardianKeySet::generate(3, 7);
//! let bytes = VaaBuilder::new(21, [0xab; 32], 42, vec![1, 2, 3]).sign(&guardians);
//!
//! let vaa = ParsedVaa::parse(&bytes).unwrap();
//! assert_eq!(vaa.signatures.len(), 3);
//! ```

use libsecp256k1::{Message, PublicKey, SecretKey};

use crate::{keccak256, GuardianSignature, TokenTransfer, TransferKind, SIGNATURE_LEN};

/// A guardian signing key with its position in the guardian set.
#[derive(Clone)]
pub struct GuardianKey {
    secret: SecretKey,
    pub public_key: PublicKey,
    /// Last 20 bytes of Keccak-256 over the uncompressed public key.
    pub eth_address: [u8; 20],
    pub index: u8,
}

impl GuardianKey {
    pub fn new(secret: [u8; 32], index: u8) -> Result<Self, libsecp256k1::Error> {
        Ok(Self::from_secret(SecretKey::parse(&secret)?, index))
    }

    fn from_secret(secret: SecretKey, index: u8) -> Self {
        let public_key = PublicKey::from_secret_key(&secret);
        let hash = keccak256(&public_key.serialize()[1..]);
        let mut eth_address = [0u8; 20];
        eth_address.copy_from_slice(&hash[12..]);

        Self {
            secret,
            public_key,
            eth_address,
            index,
        }
    }

    /// Sign a 32-byte digest as `[r, s, v]`.
    pub fn sign_digest(&self, digest: &[u8; 32]) -> [u8; SIGNATURE_LEN] {
        let (signature, recovery_id) = libsecp256k1::sign(&Message::parse(digest), &self.secret);

        let mut out = [0u8; SIGNATURE_LEN];
        out[..64].copy_from_slice(&signature.serialize());
        out[64] = recovery_id.serialize();
        out
    }

    /// Sign a VAA body.
    pub fn sign_body(&self, body: &[u8]) -> GuardianSignature {
        GuardianSignature {
            guardian_index: self.index,
            signature: self.sign_digest(&keccak256(&keccak256(body))),
        }
    }
}

/// An ordered guardian set.
#[derive(Clone)]
pub struct GuardianKeySet {
    keys: Vec<GuardianKey>,
}

impl GuardianKeySet {
    pub fn new(keys: Vec<GuardianKey>) -> Self {
        Self { keys }
    }

    /// `count` guardians whose secrets are derived from `seed`, so the same
    /// arguments always produce the same set.
    pub fn generate(count: u8, seed: u64) -> Self {
        let keys = (0..count)
            .map(|index| {
                let mut input = [0u8; 16];
                input[..8].copy_from_slice(&seed.to_le_bytes());
                input[8..].copy_from_slice(&u64::from(index).to_le_bytes());

                // Rehash in the negligible case the digest is not a valid scalar.
                let mut secret = keccak256(&input);
                loop {
                    match SecretKey::parse(&secret) {
                        Ok(key) => break GuardianKey::from_secret(key, index),
                        Err(_) => secret = keccak256(&secret),
                    }
                }
            })
            .collect();
        Self { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn get(&self, index: u8) -> Option<&GuardianKey> {
        self.keys.get(usize::from(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &GuardianKey> {
        self.keys.iter()
    }

    pub fn eth_addresses(&self) -> Vec<[u8; 20]> {
        self.keys.iter().map(|key| key.eth_address).collect()
    }

    /// Every guardian signs `body`.
    pub fn sign_body(&self, body: &[u8]) -> Vec<GuardianSignature> {
        self.keys.iter().map(|key| key.sign_body(body)).collect()
    }

    /// Only the guardians at `indices` sign, in the order given. Unknown
    /// indices are skipped.
    pub fn sign_body_with(&self, body: &[u8], indices: &[u8]) -> Vec<GuardianSignature> {
        indices
            .iter()
            .filter_map(|&index| self.get(index))
            .map(|key| key.sign_body(body))
            .collect()
    }
}

/// Builds VAA bytes field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaaBuilder {
    pub version: u8,
    pub guardian_set_index: u32,
    pub timestamp: u32,
    pub nonce: u32,
    pub emitter_chain: u16,
    pub emitter_address: [u8; 32],
    pub sequence: u64,
    pub consistency_level: u8,
    pub payload: Vec<u8>,
}

impl VaaBuilder {
    pub fn new(emitter_chain: u16, emitter_address: [u8; 32], sequence: u64, payload: Vec<u8>) -> Self {
        Self {
            version: 1,
            guardian_set_index: 0,
            timestamp: 0,
            nonce: 0,
            emitter_chain,
            emitter_address,
            sequence,
            consistency_level: 0,
            payload,
        }
    }

    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    pub fn guardian_set_index(mut self, index: u32) -> Self {
        self.guardian_set_index = index;
        self
    }

    pub fn timestamp(mut self, timestamp: u32) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn nonce(mut self, nonce: u32) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn consistency_level(mut self, level: u8) -> Self {
        self.consistency_level = level;
        self
    }

    /// The signed portion: timestamp through payload.
    pub fn body(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(crate::BODY_HEADER_LEN + self.payload.len());
        out.extend_from_slice(&self.timestamp.to_be_bytes());
        out.extend_from_slice(&self.nonce.to_be_bytes());
        out.extend_from_slice(&self.emitter_chain.to_be_bytes());
        out.extend_from_slice(&self.emitter_address);
        out.extend_from_slice(&self.sequence.to_be_bytes());
        out.push(self.consistency_level);
        out.extend_from_slice(&self.payload);
        out
    }

    /// Full VAA bytes carrying the given signatures verbatim.
    ///
    /// At most 255 signatures fit the count byte; extras are dropped.
    pub fn encode(&self, signatures: &[GuardianSignature]) -> Vec<u8> {
        let signatures = &signatures[..signatures.len().min(usize::from(u8::MAX))];
        let body = self.body();

        let mut out = Vec::with_capacity(6 + signatures.len() * 66 + body.len());
        out.push(self.version);
        out.extend_from_slice(&self.guardian_set_index.to_be_bytes());
        out.push(signatures.len() as u8);
        for signature in signatures {
            out.push(signature.guardian_index);
            out.extend_from_slice(&signature.signature);
        }
        out.extend_from_slice(&body);
        out
    }

    /// Signed by every guardian in `guardians`.
    pub fn sign(&self, guardians: &GuardianKeySet) -> Vec<u8> {
        self.encode(&guardians.sign_body(&self.body()))
    }

    /// Signed by the guardians at `indices` only.
    pub fn sign_with(&self, guardians: &GuardianKeySet, indices: &[u8]) -> Vec<u8> {
        self.encode(&guardians.sign_body_with(&self.body(), indices))
    }
}

/// Encode a transfer in the token bridge payload layout.
pub fn encode_token_transfer(transfer: &TokenTransfer) -> Vec<u8> {
    let mut out = Vec::with_capacity(133 + transfer.extra_payload.len());
    out.push(transfer.payload_type() as u8);

    let mut amount = [0u8; 32];
    transfer.amount.to_big_endian(&mut amount);
    out.extend_from_slice(&amount);
    out.extend_from_slice(&transfer.token_address);
    out.extend_from_slice(&transfer.token_chain.to_be_bytes());
    out.extend_from_slice(&transfer.redeemer);
    out.extend_from_slice(&transfer.redeemer_chain.to_be_bytes());
    match &transfer.kind {
        TransferKind::Transfer { fee } => {
            let mut tail = [0u8; 32];
            fee.to_big_endian(&mut tail);
            out.extend_from_slice(&tail);
        }
        TransferKind::TransferWithPayload { from_emitter } => out.extend_from_slice(from_emitter),
    }
    out.extend_from_slice(&transfer.extra_payload);
    out
}
