use thiserror::Error;

use crate::domain::ActionKind;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    /// No wallet session (or no signer) is bound.
    #[error("no wallet connected")]
    NoWallet,

    /// User input is not a positive amount representable by the token.
    #[error("invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },

    /// The wallet prompt was declined before anything was submitted.
    #[error("transaction rejected by user")]
    UserRejected,

    /// The network refused or reverted the call.
    #[error("contract call failed: {0}")]
    ContractRevert(String),

    /// The provider could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// Another wallet-prompted transaction is still outstanding.
    #[error("{0} rejected: another transaction is still pending")]
    ActionInProgress(ActionKind),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for an [`Error::InvalidAmount`].
    pub fn invalid_amount(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
