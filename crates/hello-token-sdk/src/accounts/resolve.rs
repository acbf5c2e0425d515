use serde::Serialize;

use super::{
    hello_token, spl, token_bridge, wormhole, Programs, CHAIN_ID_SOLANA,
};
use crate::{Address, Error, ParsedVaa, Result, TokenTransfer};

/// Token bridge and core bridge accounts shared by several instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenBridgeAccounts {
    pub token_bridge_config: Address,
    pub token_bridge_authority_signer: Address,
    pub token_bridge_custody_signer: Address,
    pub token_bridge_mint_authority: Address,
    pub wormhole_bridge: Address,
    pub token_bridge_emitter: Address,
    pub wormhole_fee_collector: Address,
    pub token_bridge_sequence: Address,
}

pub fn token_bridge_accounts(programs: &Programs) -> Result<TokenBridgeAccounts> {
    let token_bridge_emitter = wormhole::emitter(&programs.token_bridge)?;
    Ok(TokenBridgeAccounts {
        token_bridge_config: token_bridge::config(&programs.token_bridge)?,
        token_bridge_authority_signer: token_bridge::authority_signer(&programs.token_bridge)?,
        token_bridge_custody_signer: token_bridge::custody_signer(&programs.token_bridge)?,
        token_bridge_mint_authority: token_bridge::mint_authority(&programs.token_bridge)?,
        wormhole_bridge: wormhole::bridge(&programs.wormhole)?,
        token_bridge_emitter,
        wormhole_fee_collector: wormhole::fee_collector(&programs.wormhole)?,
        token_bridge_sequence: wormhole::emitter_sequence(
            &programs.wormhole,
            &token_bridge_emitter,
        )?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InitializeAccounts {
    pub sender_config: Address,
    pub redeemer_config: Address,
    pub wormhole_program: Address,
    pub token_bridge_program: Address,
    #[serde(flatten)]
    pub token_bridge: TokenBridgeAccounts,
}

pub fn initialize(programs: &Programs) -> Result<InitializeAccounts> {
    tracing::debug!(program = %programs.hello_token, "resolving initialize accounts");
    Ok(InitializeAccounts {
        sender_config: hello_token::sender_config(&programs.hello_token)?,
        redeemer_config: hello_token::redeemer_config(&programs.hello_token)?,
        wormhole_program: programs.wormhole,
        token_bridge_program: programs.token_bridge,
        token_bridge: token_bridge_accounts(programs)?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegisterForeignContractAccounts {
    pub config: Address,
    pub foreign_contract: Address,
    pub token_bridge_foreign_endpoint: Address,
    pub token_bridge_program: Address,
}

/// Accounts for registering the Hello Token peer on `chain`, whose token
/// bridge emits as `token_bridge_emitter`.
pub fn register_foreign_contract(
    programs: &Programs,
    chain: u16,
    token_bridge_emitter: &[u8; 32],
) -> Result<RegisterForeignContractAccounts> {
    tracing::debug!(chain, "resolving register_foreign_contract accounts");
    Ok(RegisterForeignContractAccounts {
        config: hello_token::sender_config(&programs.hello_token)?,
        foreign_contract: hello_token::foreign_contract(&programs.hello_token, chain)?,
        token_bridge_foreign_endpoint: token_bridge::foreign_endpoint(
            &programs.token_bridge,
            chain,
            token_bridge_emitter,
        )?,
        token_bridge_program: programs.token_bridge,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SendNativeAccounts {
    pub config: Address,
    pub foreign_contract: Address,
    pub mint: Address,
    pub tmp_token_account: Address,
    pub wormhole_program: Address,
    pub token_bridge_program: Address,
    pub token_bridge_config: Address,
    pub token_bridge_custody: Address,
    pub token_bridge_authority_signer: Address,
    pub token_bridge_custody_signer: Address,
    pub wormhole_bridge: Address,
    pub wormhole_message: Address,
    pub token_bridge_emitter: Address,
    pub token_bridge_sequence: Address,
    pub wormhole_fee_collector: Address,
}

/// Accounts for sending a Solana-native `mint` to `recipient_chain`.
///
/// `next_sequence` is the token bridge emitter's next sequence, read from its
/// sequence account by the caller; it names the outbound message account.
pub fn send_native(
    programs: &Programs,
    recipient_chain: u16,
    mint: &Address,
    next_sequence: u64,
) -> Result<SendNativeAccounts> {
    tracing::debug!(recipient_chain, %mint, next_sequence, "resolving send_native accounts");
    let shared = token_bridge_accounts(programs)?;
    Ok(SendNativeAccounts {
        config: hello_token::sender_config(&programs.hello_token)?,
        foreign_contract: hello_token::foreign_contract(&programs.hello_token, recipient_chain)?,
        mint: *mint,
        tmp_token_account: hello_token::tmp_token_account(&programs.hello_token, mint)?,
        wormhole_program: programs.wormhole,
        token_bridge_program: programs.token_bridge,
        token_bridge_config: shared.token_bridge_config,
        token_bridge_custody: token_bridge::custody(&programs.token_bridge, mint)?,
        token_bridge_authority_signer: shared.token_bridge_authority_signer,
        token_bridge_custody_signer: shared.token_bridge_custody_signer,
        wormhole_bridge: shared.wormhole_bridge,
        wormhole_message: hello_token::token_transfer_message(
            &programs.hello_token,
            next_sequence,
        )?,
        token_bridge_emitter: shared.token_bridge_emitter,
        token_bridge_sequence: shared.token_bridge_sequence,
        wormhole_fee_collector: shared.wormhole_fee_collector,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SendWrappedAccounts {
    pub config: Address,
    pub foreign_contract: Address,
    pub token_bridge_wrapped_mint: Address,
    pub tmp_token_account: Address,
    pub wormhole_program: Address,
    pub token_bridge_program: Address,
    pub token_bridge_wrapped_meta: Address,
    pub token_bridge_config: Address,
    pub token_bridge_authority_signer: Address,
    pub wormhole_bridge: Address,
    pub wormhole_message: Address,
    pub token_bridge_emitter: Address,
    pub token_bridge_sequence: Address,
    pub wormhole_fee_collector: Address,
}

/// Accounts for sending a wrapped token back out, identified by its origin
/// chain and address.
pub fn send_wrapped(
    programs: &Programs,
    recipient_chain: u16,
    token_chain: u16,
    token_address: &[u8; 32],
    next_sequence: u64,
) -> Result<SendWrappedAccounts> {
    tracing::debug!(
        recipient_chain,
        token_chain,
        next_sequence,
        "resolving send_wrapped accounts"
    );
    let shared = token_bridge_accounts(programs)?;
    let wrapped_mint = token_bridge::wrapped_mint(&programs.token_bridge, token_chain, token_address)?;
    Ok(SendWrappedAccounts {
        config: hello_token::sender_config(&programs.hello_token)?,
        foreign_contract: hello_token::foreign_contract(&programs.hello_token, recipient_chain)?,
        token_bridge_wrapped_mint: wrapped_mint,
        tmp_token_account: hello_token::tmp_token_account(&programs.hello_token, &wrapped_mint)?,
        wormhole_program: programs.wormhole,
        token_bridge_program: programs.token_bridge,
        token_bridge_wrapped_meta: token_bridge::wrapped_meta(
            &programs.token_bridge,
            &wrapped_mint,
        )?,
        token_bridge_config: shared.token_bridge_config,
        token_bridge_authority_signer: shared.token_bridge_authority_signer,
        wormhole_bridge: shared.wormhole_bridge,
        wormhole_message: hello_token::token_transfer_message(
            &programs.hello_token,
            next_sequence,
        )?,
        token_bridge_emitter: shared.token_bridge_emitter,
        token_bridge_sequence: shared.token_bridge_sequence,
        wormhole_fee_collector: shared.wormhole_fee_collector,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RedeemNativeAccounts {
    pub payer: Address,
    pub payer_token_account: Address,
    pub config: Address,
    pub foreign_contract: Address,
    pub mint: Address,
    pub recipient_token_account: Address,
    pub recipient: Address,
    pub tmp_token_account: Address,
    pub wormhole_program: Address,
    pub token_bridge_program: Address,
    pub token_bridge_config: Address,
    pub vaa: Address,
    pub token_bridge_claim: Address,
    pub token_bridge_foreign_endpoint: Address,
    pub token_bridge_custody: Address,
    pub token_bridge_custody_signer: Address,
}

/// Accounts that every redemption needs, regardless of token origin.
struct RedeemCommon {
    recipient: Address,
    config: Address,
    foreign_contract: Address,
    vaa: Address,
    token_bridge_claim: Address,
    token_bridge_foreign_endpoint: Address,
    token_bridge_config: Address,
}

fn redeem_common(
    programs: &Programs,
    vaa: &ParsedVaa,
    transfer: &TokenTransfer,
) -> Result<RedeemCommon> {
    Ok(RedeemCommon {
        recipient: Address(transfer.recipient()?),
        config: hello_token::redeemer_config(&programs.hello_token)?,
        foreign_contract: hello_token::foreign_contract(&programs.hello_token, vaa.emitter_chain)?,
        vaa: wormhole::posted_vaa(&programs.wormhole, &vaa.hash)?,
        token_bridge_claim: token_bridge::claim(
            &programs.token_bridge,
            &vaa.emitter_address,
            vaa.emitter_chain,
            vaa.sequence,
        )?,
        token_bridge_foreign_endpoint: token_bridge::foreign_endpoint(
            &programs.token_bridge,
            vaa.emitter_chain,
            &vaa.emitter_address,
        )?,
        token_bridge_config: token_bridge::config(&programs.token_bridge)?,
    })
}

/// Accounts for redeeming a transfer of Solana-native `mint` carried by `vaa`.
///
/// Fails with [`Error::InvalidChain`] if the transferred token did not
/// originate on Solana, and with [`Error::MintMismatch`] if `mint` is not the
/// transferred token.
pub fn redeem_native(
    programs: &Programs,
    payer: &Address,
    vaa: &ParsedVaa,
    mint: &Address,
) -> Result<RedeemNativeAccounts> {
    native_accounts(programs, payer, vaa, &vaa.token_transfer()?, mint)
}

fn native_accounts(
    programs: &Programs,
    payer: &Address,
    vaa: &ParsedVaa,
    transfer: &TokenTransfer,
    mint: &Address,
) -> Result<RedeemNativeAccounts> {
    tracing::debug!(
        emitter_chain = vaa.emitter_chain,
        sequence = vaa.sequence,
        %mint,
        "resolving redeem_native accounts"
    );
    if transfer.token_chain != CHAIN_ID_SOLANA {
        return Err(Error::InvalidChain(transfer.token_chain));
    }
    // A Solana-native token address is its mint.
    let expected = Address(transfer.token_address);
    if *mint != expected {
        return Err(Error::MintMismatch {
            expected,
            found: *mint,
        });
    }
    let common = redeem_common(programs, vaa, transfer)?;

    Ok(RedeemNativeAccounts {
        payer: *payer,
        payer_token_account: spl::associated_token_address(payer, mint)?,
        config: common.config,
        foreign_contract: common.foreign_contract,
        mint: *mint,
        recipient_token_account: spl::associated_token_address(&common.recipient, mint)?,
        recipient: common.recipient,
        tmp_token_account: hello_token::tmp_token_account(&programs.hello_token, mint)?,
        wormhole_program: programs.wormhole,
        token_bridge_program: programs.token_bridge,
        token_bridge_config: common.token_bridge_config,
        vaa: common.vaa,
        token_bridge_claim: common.token_bridge_claim,
        token_bridge_foreign_endpoint: common.token_bridge_foreign_endpoint,
        token_bridge_custody: token_bridge::custody(&programs.token_bridge, mint)?,
        token_bridge_custody_signer: token_bridge::custody_signer(&programs.token_bridge)?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RedeemWrappedAccounts {
    pub payer: Address,
    pub payer_token_account: Address,
    pub config: Address,
    pub foreign_contract: Address,
    pub token_bridge_wrapped_mint: Address,
    pub recipient_token_account: Address,
    pub recipient: Address,
    pub tmp_token_account: Address,
    pub wormhole_program: Address,
    pub token_bridge_program: Address,
    pub token_bridge_wrapped_meta: Address,
    pub token_bridge_config: Address,
    pub vaa: Address,
    pub token_bridge_claim: Address,
    pub token_bridge_foreign_endpoint: Address,
    pub token_bridge_mint_authority: Address,
}

/// Accounts for redeeming a transfer of a foreign token, minted on Solana as
/// its wrapped form.
pub fn redeem_wrapped(
    programs: &Programs,
    payer: &Address,
    vaa: &ParsedVaa,
) -> Result<RedeemWrappedAccounts> {
    wrapped_accounts(programs, payer, vaa, &vaa.token_transfer()?)
}

fn wrapped_accounts(
    programs: &Programs,
    payer: &Address,
    vaa: &ParsedVaa,
    transfer: &TokenTransfer,
) -> Result<RedeemWrappedAccounts> {
    tracing::debug!(
        emitter_chain = vaa.emitter_chain,
        sequence = vaa.sequence,
        "resolving redeem_wrapped accounts"
    );
    let wrapped_mint = token_bridge::wrapped_mint(
        &programs.token_bridge,
        transfer.token_chain,
        &transfer.token_address,
    )?;
    let common = redeem_common(programs, vaa, transfer)?;

    Ok(RedeemWrappedAccounts {
        payer: *payer,
        payer_token_account: spl::associated_token_address(payer, &wrapped_mint)?,
        config: common.config,
        foreign_contract: common.foreign_contract,
        token_bridge_wrapped_mint: wrapped_mint,
        recipient_token_account: spl::associated_token_address(&common.recipient, &wrapped_mint)?,
        recipient: common.recipient,
        tmp_token_account: hello_token::tmp_token_account(&programs.hello_token, &wrapped_mint)?,
        wormhole_program: programs.wormhole,
        token_bridge_program: programs.token_bridge,
        token_bridge_wrapped_meta: token_bridge::wrapped_meta(
            &programs.token_bridge,
            &wrapped_mint,
        )?,
        token_bridge_config: common.token_bridge_config,
        vaa: common.vaa,
        token_bridge_claim: common.token_bridge_claim,
        token_bridge_foreign_endpoint: common.token_bridge_foreign_endpoint,
        token_bridge_mint_authority: token_bridge::mint_authority(&programs.token_bridge)?,
    })
}

/// Redeem accounts for whichever path the transferred token takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RedeemTransferAccounts {
    Native(RedeemNativeAccounts),
    Wrapped(RedeemWrappedAccounts),
}

/// Picks the native path when the token originated on Solana (its token
/// address is then the mint), and the wrapped path otherwise.
pub fn redeem_transfer(
    programs: &Programs,
    payer: &Address,
    vaa: &ParsedVaa,
) -> Result<RedeemTransferAccounts> {
    let transfer = vaa.token_transfer()?;
    if transfer.token_chain == CHAIN_ID_SOLANA {
        let mint = Address(transfer.token_address);
        native_accounts(programs, payer, vaa, &transfer, &mint)
            .map(RedeemTransferAccounts::Native)
    } else {
        wrapped_accounts(programs, payer, vaa, &transfer).map(RedeemTransferAccounts::Wrapped)
    }
}
