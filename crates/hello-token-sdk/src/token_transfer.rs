//! Token bridge transfer payloads carried inside a VAA.
//!
//! ```markdown
//! 0   .. 1:   payload type (1 = Transfer, 3 = TransferWithPayload)
//! 1   .. 33:  amount (uint256, big-endian, normalized to 8 decimals)
//! 33  .. 65:  token address
//! 65  .. 67:  token chain
//! 67  .. 99:  redeemer
//! 99  .. 101: redeemer chain
//! 101 .. 133: fee (Transfer) or from address (TransferWithPayload)
//! 133 ..    : extra payload
//! ```

use primitive_types::U256;
use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::{
    cursor::{ByteCursor, Endian},
    encoding::prefixed_hex,
    Address, Error, Result,
};

/// Length of the recipient message this application appends to transfers:
/// a one-byte discriminant followed by a 32-byte address.
pub const RECIPIENT_PAYLOAD_LEN: usize = 33;

/// Token bridge payload discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PayloadType {
    Transfer = 1,
    AttestMeta = 2,
    TransferWithPayload = 3,
}

impl TryFrom<u8> for PayloadType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Transfer),
            2 => Ok(Self::AttestMeta),
            3 => Ok(Self::TransferWithPayload),
            other => Err(Error::UnsupportedPayloadType(other)),
        }
    }
}

/// The variant-specific field of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    /// Plain transfer with a relayer fee.
    Transfer { fee: U256 },
    /// Transfer addressed to a contract, tagged with the sending contract.
    TransferWithPayload { from_emitter: [u8; 32] },
}

/// A decoded token bridge transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTransfer {
    pub amount: U256,
    /// Left-zero-padded if shorter than 32 bytes on the origin chain.
    pub token_address: [u8; 32],
    pub token_chain: u16,
    pub redeemer: [u8; 32],
    pub redeemer_chain: u16,
    pub kind: TransferKind,
    pub extra_payload: Vec<u8>,
}

impl TokenTransfer {
    /// Decode a transfer payload. `AttestMeta` and unknown types are rejected.
    pub fn parse(payload: &[u8]) -> Result<Self> {
        let mut cursor = ByteCursor::new(payload);

        let payload_type = cursor.read_u8()?;
        if !matches!(
            PayloadType::try_from(payload_type)?,
            PayloadType::Transfer | PayloadType::TransferWithPayload
        ) {
            return Err(Error::UnsupportedPayloadType(payload_type));
        }

        let amount = U256::from_big_endian(&cursor.read_array::<32>()?);
        let token_address = cursor.read_array()?;
        let token_chain = cursor.read_u16(Endian::Big)?;
        let redeemer = cursor.read_array()?;
        let redeemer_chain = cursor.read_u16(Endian::Big)?;
        let tail: [u8; 32] = cursor.read_array()?;
        let kind = if payload_type == PayloadType::Transfer as u8 {
            TransferKind::Transfer {
                fee: U256::from_big_endian(&tail),
            }
        } else {
            TransferKind::TransferWithPayload { from_emitter: tail }
        };

        Ok(Self {
            amount,
            token_address,
            token_chain,
            redeemer,
            redeemer_chain,
            kind,
            extra_payload: cursor.rest().to_vec(),
        })
    }

    pub fn payload_type(&self) -> PayloadType {
        match self.kind {
            TransferKind::Transfer { .. } => PayloadType::Transfer,
            TransferKind::TransferWithPayload { .. } => PayloadType::TransferWithPayload,
        }
    }

    /// Present only for [`PayloadType::Transfer`].
    pub fn fee(&self) -> Option<U256> {
        match self.kind {
            TransferKind::Transfer { fee } => Some(fee),
            TransferKind::TransferWithPayload { .. } => None,
        }
    }

    /// Present only for [`PayloadType::TransferWithPayload`].
    pub fn from_emitter(&self) -> Option<&[u8; 32]> {
        match &self.kind {
            TransferKind::Transfer { .. } => None,
            TransferKind::TransferWithPayload { from_emitter } => Some(from_emitter),
        }
    }

    /// The recipient wallet carried in the Hello Token message.
    ///
    /// Only valid when the extra payload is exactly the 33-byte recipient
    /// message; other applications append different payloads.
    pub fn recipient(&self) -> Result<[u8; 32]> {
        if self.extra_payload.len() != RECIPIENT_PAYLOAD_LEN {
            return Err(Error::MalformedRecipient(self.extra_payload.len()));
        }
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.extra_payload[1..]);
        Ok(out)
    }
}

impl Serialize for TokenTransfer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("TokenTransfer", 8)?;
        s.serialize_field("payloadType", &(self.payload_type() as u8))?;
        s.serialize_field("amount", &self.amount.to_string())?;
        s.serialize_field("tokenAddress", &prefixed_hex(&self.token_address))?;
        s.serialize_field("tokenChain", &self.token_chain)?;
        // Solana redeemers are account addresses; everything else stays hex.
        if self.redeemer_chain == crate::accounts::CHAIN_ID_SOLANA {
            s.serialize_field("redeemer", &Address(self.redeemer).to_string())?;
        } else {
            s.serialize_field("redeemer", &prefixed_hex(&self.redeemer))?;
        }
        s.serialize_field("redeemerChain", &self.redeemer_chain)?;
        match &self.kind {
            TransferKind::Transfer { fee } => s.serialize_field("fee", &fee.to_string())?,
            TransferKind::TransferWithPayload { from_emitter } => {
                s.serialize_field("fromEmitter", &prefixed_hex(from_emitter))?
            }
        }
        s.serialize_field("tokenTransferPayload", &prefixed_hex(&self.extra_payload))?;
        s.end()
    }
}
