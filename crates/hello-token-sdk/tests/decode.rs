//! Decoding recorded VAAs end to end and cross-checking against
//! `wormhole-raw-vaas`, the decoder the on-chain programs use.

use base64::Engine;
use hello_token_sdk::{
    decode_base64, decode_hex, keccak256, Address, Error, ParsedVaa, PayloadType, TokenTransfer,
    U256,
};
use wormhole_raw_vaas::{token_bridge::TokenBridgeMessage, Vaa};

/// SOL sent from Solana toward Sui (chain 21) by a Hello Token emitter.
const SOLANA_OUTBOUND_VAA: &str = "0x01000000000100a45592e3a48aa6fb13faedcc93e961f55db359e796b85d3632612b445a7d829e498ef85c8ea02a1da0c562d8ebf832bf57ff4e1040be433412f4ebc9c36ec2ce00651447b00000000000013b26409f8aaded3f5ddca184695aa6a0fa829b0c85caf84856324896d214ca98000000000000638d20030000000000000000000000000000000000000000000000000000000005f5e100069b8857feab8184fb687f634618c035dac439dc1aeb3b5598a0f00000000001000135fbfedfe4ba06b311b86ae1d2064e08e583e6d550524307fc626648c4718c0c00157dca297f024143a403e1fd9d4dea8af484119bb62a9a301b6abf694e0357dcdd00e76e8792889a2c3d6f7cf3b8b21be9c9f162ae98e1f218f23ac6d09e70931a2d";

/// Native SOL returning from Sui, sequence 126.
const SUI_NATIVE_VAA: &str = "010000000001005deefe8dd16b7cb0b87c85c81a7ff60508454e9a5fb4ce3c28db6f8c5b1d0c752138bc97a9d372ab8617393402dc3ef37f67f38eb8adcaf49dbdc3a44d00a264006516a07900000000001540440411a170b4842ae7dee4f4a7b7a58bc0a98566e998850a7bb87bf5dc05b9000000000000007e00030000000000000000000000000000000000000000000000000000000000989298069b8857feab8184fb687f634618c035dac439dc1aeb3b5598a0f000000000010001ceda17841d79db34bd17721d2024343b5d9dd0320626958e10f4cf3d800a719e000135fbfedfe4ba06b311b86ae1d2064e08e583e6d550524307fc626648c4718c0c0138e121709ad96bd37a2f87022932336e9a290f62aef3d41dae00b1547c6f1938";

/// A Sui-native coin bridged to Solana, sequence 122.
const SUI_WRAPPED_VAA: &str = "01000000000100081b53f79da4b1b12dbfaee9ce88a1ec7f4b51cfb38832e9ae37da238f5be26b08fd93d573d500f7974bc463e7cbaa6fc2a3661591567c3c2ec72f52c5354f98006511d13900000000001540440411a170b4842ae7dee4f4a7b7a58bc0a98566e998850a7bb87bf5dc05b9000000000000007a000300000000000000000000000000000000000000000000000000000002540be400bda28aeb93874baba2273db9c92fb7b7fe2f412352e9633c0258978a32620a230015ceda17841d79db34bd17721d2024343b5d9dd0320626958e10f4cf3d800a719e000135fbfedfe4ba06b311b86ae1d2064e08e583e6d550524307fc626648c4718c0c0138e121709ad96bd37a2f87022932336e9a290f62aef3d41dae00b1547c6f1938";

#[test]
fn test_solana_outbound_transfer() {
    let vaa = ParsedVaa::parse_hex(SOLANA_OUTBOUND_VAA).unwrap();

    assert_eq!(vaa.version, 1);
    assert_eq!(vaa.signatures.len(), 1);
    assert_eq!(vaa.timestamp, 1_695_827_888);
    assert_eq!(vaa.emitter_chain, 1);
    assert_eq!(
        Address(vaa.emitter_address).to_string(),
        "4yttKWzRoNYS2HekxDfcZYmfQqnVWpKiJ8eydYRuFRgs"
    );
    // The sequence field is 8 bytes; the 0x20 that follows is the
    // consistency level.
    assert_eq!(vaa.sequence, 0x638d);
    assert_eq!(vaa.consistency_level, 0x20);
    assert_eq!(vaa.payload[0], 3);
    assert_eq!(
        hex::encode(vaa.hash),
        "72a207ed98f5e2a0fbad671c6a188f6bef48d0ee17c449d24f8f100d2132779c"
    );

    let transfer = vaa.token_transfer().unwrap();
    assert_eq!(transfer.payload_type(), PayloadType::TransferWithPayload);
    assert_eq!(transfer.amount, U256::from(100_000_000u64));
    assert_eq!(
        Address(transfer.token_address).to_string(),
        "So11111111111111111111111111111111111111112"
    );
    assert_eq!(transfer.token_chain, 1);
    assert_eq!(transfer.redeemer_chain, 21);
    assert_eq!(
        hex::encode(transfer.recipient().unwrap()),
        "e76e8792889a2c3d6f7cf3b8b21be9c9f162ae98e1f218f23ac6d09e70931a2d"
    );
}

#[test]
fn test_sui_transfers() {
    let native = ParsedVaa::parse_hex(SUI_NATIVE_VAA).unwrap();
    let transfer = native.token_transfer().unwrap();
    assert_eq!(native.emitter_chain, 21);
    assert_eq!(native.sequence, 126);
    assert_eq!(transfer.amount, U256::from(9_999_000u64));
    assert_eq!(transfer.token_chain, 1);
    assert_eq!(
        Address(transfer.recipient().unwrap()).to_string(),
        "4q2wPZMys1zCoAVpNmhgmofb6YM9MqLXmV25LdtEMAf9"
    );

    let wrapped = ParsedVaa::parse_hex(SUI_WRAPPED_VAA).unwrap();
    let transfer = wrapped.token_transfer().unwrap();
    assert_eq!(wrapped.timestamp, 1_695_666_489);
    assert_eq!(wrapped.sequence, 122);
    assert_eq!(
        hex::encode(wrapped.hash),
        "ad715d5a66ff4df2b415498bb813d06a2d648b847432bfe9a1cbdd69309d25d5"
    );
    assert_eq!(transfer.amount, U256::from(10_000_000_000u64));
    assert_eq!(transfer.token_chain, 21);
    assert_eq!(
        hex::encode(transfer.token_address),
        "bda28aeb93874baba2273db9c92fb7b7fe2f412352e9633c0258978a32620a23"
    );
}

#[test]
fn test_matches_wormhole_raw_vaas() {
    for fixture in [SOLANA_OUTBOUND_VAA, SUI_NATIVE_VAA, SUI_WRAPPED_VAA] {
        let bytes = decode_hex(fixture).unwrap();
        let ours = ParsedVaa::parse(&bytes).unwrap();
        let theirs = Vaa::parse(&bytes).unwrap();
        let body = theirs.body();

        assert_eq!(ours.emitter_chain, body.emitter_chain());
        assert_eq!(ours.sequence, body.sequence());
        assert_eq!(ours.payload, body.payload().as_ref().to_vec());
        assert_eq!(ours.hash, keccak256(body.as_ref()));

        let transfer = ours.token_transfer().unwrap();
        let message = TokenBridgeMessage::parse(&ours.payload).unwrap();
        let reference = message.transfer_with_message().unwrap();
        assert_eq!(transfer.token_chain, reference.token_chain());
        assert_eq!(
            transfer.token_address.to_vec(),
            reference.token_address().to_vec()
        );
    }
}

#[test]
fn test_base64_input() {
    // The guardian API serves VAAs as base64.
    let bytes = decode_hex(SUI_NATIVE_VAA).unwrap();
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    assert_eq!(decode_base64(&encoded).unwrap(), bytes);
    assert_eq!(
        ParsedVaa::parse(&decode_base64(&encoded).unwrap()).unwrap(),
        ParsedVaa::parse(&bytes).unwrap()
    );
}

#[test]
fn test_json_output() {
    let vaa = ParsedVaa::parse_hex(SOLANA_OUTBOUND_VAA).unwrap();
    let json = serde_json::to_value(&vaa).unwrap();
    assert_eq!(json["sequence"], 0x638d);
    assert_eq!(json["consistencyLevel"], 32);
    assert_eq!(
        json["emitterAddress"],
        "0x3b26409f8aaded3f5ddca184695aa6a0fa829b0c85caf84856324896d214ca98"
    );

    let json = serde_json::to_value(vaa.token_transfer().unwrap()).unwrap();
    assert_eq!(json["amount"], "100000000");
    // Sui redeemers stay hex.
    assert_eq!(
        json["redeemer"],
        "0x35fbfedfe4ba06b311b86ae1d2064e08e583e6d550524307fc626648c4718c0c"
    );
}

#[test]
fn test_trailing_payload_garbage_is_payload() {
    let mut bytes = decode_hex(SUI_NATIVE_VAA).unwrap();
    bytes.push(0xff);

    let vaa = ParsedVaa::parse(&bytes).unwrap();
    assert_eq!(vaa.payload.len(), 167);
    let transfer = TokenTransfer::parse(&vaa.payload).unwrap();
    assert_eq!(transfer.recipient(), Err(Error::MalformedRecipient(34)));
}
