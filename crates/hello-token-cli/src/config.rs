//! Program ids from an optional TOML file, overridden by flags.

use std::path::Path;

use anyhow::{Context, Result};
use hello_token_sdk::{
    accounts::{DEVNET_TOKEN_BRIDGE, DEVNET_WORMHOLE},
    Address, Programs,
};
use serde::Deserialize;

/// ```toml
/// [programs]
/// wormhole = "3u8hJUVTA4jH1wYAyUur7FFZVQ8H635K3tSHHF4ssjQ5"
/// token_bridge = "DZnkkTmCiFWfYTfT41X3Rd1kDgozqzxWaHqsw6W4x2oe"
/// hello_token = "..."
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub programs: ProgramIds,
}

/// Program ids that may each be left unset.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramIds {
    pub wormhole: Option<Address>,
    pub token_bridge: Option<Address>,
    pub hello_token: Option<Address>,
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Layer `overrides` over the file, then devnet defaults. Hello Token
    /// itself has no default deployment.
    pub fn programs(&self, overrides: ProgramIds) -> Result<Programs> {
        let hello_token = overrides
            .hello_token
            .or(self.programs.hello_token)
            .context(
                "no Hello Token program id: pass --hello-token, set HELLO_TOKEN_PROGRAM_ID, \
                 or add programs.hello_token to the config",
            )?;

        Ok(Programs {
            wormhole: overrides
                .wormhole
                .or(self.programs.wormhole)
                .unwrap_or(DEVNET_WORMHOLE),
            token_bridge: overrides
                .token_bridge
                .or(self.programs.token_bridge)
                .unwrap_or(DEVNET_TOKEN_BRIDGE),
            hello_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_TOKEN: &str = "HeLLoToken1111111111111111111111111111111111";

    #[test]
    fn test_defaults_to_devnet() {
        let config = Config::from_toml_str(&format!(
            "[programs]\nhello_token = \"{HELLO_TOKEN}\"\n"
        ))
        .unwrap();
        let programs = config.programs(ProgramIds::default()).unwrap();

        assert_eq!(programs.wormhole, DEVNET_WORMHOLE);
        assert_eq!(programs.token_bridge, DEVNET_TOKEN_BRIDGE);
        assert_eq!(programs.hello_token.to_string(), HELLO_TOKEN);
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::from_toml_str(&format!(
            "[programs]\nhello_token = \"{HELLO_TOKEN}\"\nwormhole = \"{}\"\n",
            DEVNET_TOKEN_BRIDGE
        ))
        .unwrap();
        assert_eq!(
            config.programs(ProgramIds::default()).unwrap().wormhole,
            DEVNET_TOKEN_BRIDGE
        );

        let overrides = ProgramIds {
            wormhole: Some(DEVNET_WORMHOLE),
            hello_token: Some(Address::default()),
            ..Default::default()
        };
        let programs = config.programs(overrides).unwrap();
        assert_eq!(programs.wormhole, DEVNET_WORMHOLE);
        assert_eq!(programs.hello_token, Address::default());
    }

    #[test]
    fn test_hello_token_is_required() {
        let config = Config::from_toml_str("").unwrap();
        assert!(config.programs(ProgramIds::default()).is_err());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Config::from_toml_str("[programs]\nhello_token = \"not base58!\"\n").is_err());
        assert!(Config::from_toml_str("[programs]\nunknown = \"x\"\n").is_err());
    }
}
