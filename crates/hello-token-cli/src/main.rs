//! `hello-token`: decode Hello Token VAAs and resolve the Solana accounts its
//! instructions need. Offline only; results are printed as JSON on stdout.

mod config;
mod seed;

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hello_token_sdk::{
    accounts::{self, spl::NATIVE_MINT},
    decode_base64, decode_hex, find_program_address, Address, ParsedVaa, Programs,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::{
    config::{Config, ProgramIds},
    seed::Seed,
};

#[derive(Parser)]
#[command(name = "hello-token", version, about)]
struct Cli {
    /// TOML file with a `[programs]` table.
    #[arg(long, global = true, env = "HELLO_TOKEN_CONFIG")]
    config: Option<PathBuf>,

    /// Wormhole core bridge program id.
    #[arg(long, global = true, env = "WORMHOLE_PROGRAM_ID")]
    wormhole: Option<Address>,

    /// Token bridge program id.
    #[arg(long, global = true, env = "TOKEN_BRIDGE_PROGRAM_ID")]
    token_bridge: Option<Address>,

    /// Hello Token program id.
    #[arg(long, global = true, env = "HELLO_TOKEN_PROGRAM_ID")]
    hello_token: Option<Address>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a VAA and, if it carries one, its token transfer.
    ParseVaa {
        #[command(flatten)]
        input: VaaInput,
    },

    /// Find the program-derived address for typed seeds.
    Derive {
        /// Owning program.
        #[arg(long)]
        program: Address,

        /// Seeds as `<kind>:<value>`, e.g. `str:foreign_contract u16le:21`.
        seeds: Vec<Seed>,
    },

    /// Accounts for `initialize`.
    Initialize,

    /// Accounts for registering the Hello Token contract on another chain.
    RegisterForeignContract {
        #[arg(long)]
        chain: u16,

        /// That chain's token bridge emitter address, 32 bytes hex.
        #[arg(long)]
        token_bridge_emitter: String,
    },

    /// Accounts for sending a Solana-native token.
    SendNative {
        #[arg(long)]
        recipient_chain: u16,

        #[arg(long, default_value_t = NATIVE_MINT)]
        mint: Address,

        /// The token bridge emitter's next sequence.
        #[arg(long)]
        next_sequence: u64,
    },

    /// Accounts for sending a wrapped token back toward its origin.
    SendWrapped {
        #[arg(long)]
        recipient_chain: u16,

        #[arg(long)]
        token_chain: u16,

        /// Origin token address, 32 bytes hex.
        #[arg(long)]
        token_address: String,

        #[arg(long)]
        next_sequence: u64,
    },

    /// Accounts for redeeming a transfer VAA.
    Redeem {
        #[command(flatten)]
        input: VaaInput,

        /// Wallet paying for the redemption.
        #[arg(long)]
        payer: Address,
    },
}

#[derive(clap::Args)]
struct VaaInput {
    /// VAA text, or `-` to read it from stdin.
    vaa: String,

    #[arg(long, value_enum, default_value_t = Encoding::Hex)]
    encoding: Encoding,
}

#[derive(Clone, Copy, ValueEnum)]
enum Encoding {
    Hex,
    Base64,
}

impl VaaInput {
    fn bytes(&self) -> Result<Vec<u8>> {
        let text = if self.vaa == "-" {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read VAA from stdin")?;
            text
        } else {
            self.vaa.clone()
        };

        let bytes = match self.encoding {
            Encoding::Hex => decode_hex(&text)?,
            Encoding::Base64 => decode_base64(&text)?,
        };
        Ok(bytes)
    }

    fn parse(&self) -> Result<ParsedVaa> {
        let vaa = ParsedVaa::parse(&self.bytes()?).context("failed to decode VAA")?;
        tracing::info!(
            emitter_chain = vaa.emitter_chain,
            sequence = vaa.sequence,
            hash = %hex::encode(vaa.hash),
            "decoded VAA"
        );
        Ok(vaa)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParseVaaOutput {
    vaa: ParsedVaa,
    token_transfer: Option<hello_token_sdk::TokenTransfer>,
}

#[derive(Serialize)]
struct DeriveOutput {
    address: Address,
    bump: u8,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::ParseVaa { input } => {
            let vaa = input.parse()?;
            let token_transfer = match vaa.token_transfer() {
                Ok(transfer) => Some(transfer),
                Err(e) => {
                    tracing::warn!("payload is not a token transfer: {e}");
                    None
                }
            };
            print_json(&ParseVaaOutput {
                vaa,
                token_transfer,
            })
        }
        Command::Derive { program, seeds } => {
            let seeds: Vec<&[u8]> = seeds.iter().map(|seed| seed.0.as_slice()).collect();
            let (address, bump) = find_program_address(&seeds, program)?;
            print_json(&DeriveOutput { address, bump })
        }
        Command::Initialize => print_json(&accounts::initialize(&programs(cli)?)?),
        Command::RegisterForeignContract {
            chain,
            token_bridge_emitter,
        } => {
            let emitter = Address::from_hex(token_bridge_emitter)?;
            print_json(&accounts::register_foreign_contract(
                &programs(cli)?,
                *chain,
                &emitter.0,
            )?)
        }
        Command::SendNative {
            recipient_chain,
            mint,
            next_sequence,
        } => print_json(&accounts::send_native(
            &programs(cli)?,
            *recipient_chain,
            mint,
            *next_sequence,
        )?),
        Command::SendWrapped {
            recipient_chain,
            token_chain,
            token_address,
            next_sequence,
        } => {
            let token_address = Address::from_hex(token_address)?;
            print_json(&accounts::send_wrapped(
                &programs(cli)?,
                *recipient_chain,
                *token_chain,
                &token_address.0,
                *next_sequence,
            )?)
        }
        Command::Redeem { input, payer } => {
            let vaa = input.parse()?;
            print_json(&accounts::redeem_transfer(&programs(cli)?, payer, &vaa)?)
        }
    }
}

fn programs(cli: &Cli) -> Result<Programs> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    config.programs(ProgramIds {
        wormhole: cli.wormhole,
        token_bridge: cli.token_bridge,
        hello_token: cli.hello_token,
    })
}

fn load_config(path: &Path) -> Result<Config> {
    tracing::debug!(path = %path.display(), "loading config");
    Config::load(path)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
