//! Network endpoint and contract addresses.

use alloy_primitives::{address, Address};
use serde::Deserialize;

use crate::domain::{Token, TokenPair};

/// Default swap pool contract.
const DEFAULT_POOL: Address = address!("0x86FEDc7357c8D063771Db2d6D703d5Fa5b2a37F1");

/// Default token A (`CTK`) contract.
const DEFAULT_TOKEN_A: Address = address!("0xf77a5862DE9FcFAA9101eF433557C36D4Bfa2361");

/// Default token B (`CTK2`) contract.
const DEFAULT_TOKEN_B: Address = address!("0x395f16d2567ca9b1D3A078bCb6C0dfE4C2Bf8E4C");

/// JSON-RPC endpoint and chain.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub rpc_url: String,
    /// Chain id for signing; asked from the node when unset.
    pub chain_id: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".into(),
            chain_id: None,
        }
    }
}

/// A token entry in `[contracts]`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    pub symbol: String,
    pub address: Address,
}

/// Addresses of the pool and its two tokens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContractsConfig {
    pub pool: Address,
    pub token_a: TokenConfig,
    pub token_b: TokenConfig,
}

impl Default for ContractsConfig {
    fn default() -> Self {
        Self {
            pool: DEFAULT_POOL,
            token_a: TokenConfig {
                symbol: "CTK".into(),
                address: DEFAULT_TOKEN_A,
            },
            token_b: TokenConfig {
                symbol: "CTK2".into(),
                address: DEFAULT_TOKEN_B,
            },
        }
    }
}

impl ContractsConfig {
    /// The configured pool and tokens as domain types.
    #[must_use]
    pub fn token_pair(&self) -> TokenPair {
        TokenPair {
            pool: self.pool,
            token_a: Token::new(&self.token_a.symbol, self.token_a.address),
            token_b: Token::new(&self.token_b.symbol, self.token_b.address),
        }
    }
}
