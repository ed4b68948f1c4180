//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable overrides
//! for sensitive values like `WALLET_PRIVATE_KEY`. Every section has defaults
//! pointing at the deployed pool, so an empty file is a valid configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::TokenPair;
use crate::error::{ConfigError, Result};

mod contracts;
mod logging;
mod wallet;

pub use contracts::{ContractsConfig, NetworkConfig, TokenConfig};
pub use logging::LoggingConfig;
pub use wallet::{
    WalletConfig, KEYSTORE_PASSWORD_ENV, KEYSTORE_PASSWORD_FILE_ENV, PRIVATE_KEY_ENV,
};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub contracts: ContractsConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML text and resolve the signing key.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, a value is invalid, or a
    /// configured keystore cannot be decrypted.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        config.wallet.resolve_private_key()?;
        Ok(config)
    }

    /// Load configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails [`parse_toml`](Self::parse_toml).
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if given, otherwise the default location, falling back to
    /// built-in defaults when the default file does not exist.
    ///
    /// # Errors
    ///
    /// An explicitly given path must exist; otherwise as [`load`](Self::load).
    #[allow(clippy::result_large_err)]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default = default_path();
        if default.exists() {
            return Self::load(default);
        }
        Self::parse_toml("")
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.network.rpc_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "rpc_url" }.into());
        }
        url::Url::parse(&self.network.rpc_url).map_err(|e| ConfigError::InvalidValue {
            field: "rpc_url",
            reason: e.to_string(),
        })?;

        let contracts = &self.contracts;
        if contracts.token_a.address == contracts.token_b.address {
            return Err(ConfigError::InvalidValue {
                field: "contracts.token_b",
                reason: "token_a and token_b must be different contracts".to_string(),
            }
            .into());
        }
        if contracts.pool == contracts.token_a.address || contracts.pool == contracts.token_b.address
        {
            return Err(ConfigError::InvalidValue {
                field: "contracts.pool",
                reason: "pool must differ from both token contracts".to_string(),
            }
            .into());
        }
        for token in [&contracts.token_a, &contracts.token_b] {
            if token.symbol.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "contracts.symbol",
                }
                .into());
            }
        }
        Ok(())
    }

    /// The configured pool and tokens.
    #[must_use]
    pub fn token_pair(&self) -> TokenPair {
        self.contracts.token_pair()
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self, verbose: u8) {
        self.logging.init(verbose);
    }
}

/// Returns the swapdesk home directory (`~/.swapdesk/`).
#[must_use]
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".swapdesk")
}

/// Returns the default config file path (`~/.swapdesk/config.toml`).
#[must_use]
pub fn default_path() -> PathBuf {
    home_dir().join("config.toml")
}
