//! Token descriptors and the two swap directions of the pool.

use std::fmt;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// A fungible token known to the front-end.
///
/// Decimals are deliberately absent: they are queried from the token
/// contract each time an amount is converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub symbol: String,
    pub address: Address,
}

impl Token {
    pub fn new(symbol: impl Into<String>, address: Address) -> Self {
        Self {
            symbol: symbol.into(),
            address,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// The pool and the two tokens it trades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub pool: Address,
    pub token_a: Token,
    pub token_b: Token,
}

impl TokenPair {
    /// Token spent by a swap in `direction`.
    #[must_use]
    pub fn input(&self, direction: SwapDirection) -> &Token {
        match direction {
            SwapDirection::AToB => &self.token_a,
            SwapDirection::BToA => &self.token_b,
        }
    }

    /// Token received from a swap in `direction`.
    #[must_use]
    pub fn output(&self, direction: SwapDirection) -> &Token {
        match direction {
            SwapDirection::AToB => &self.token_b,
            SwapDirection::BToA => &self.token_a,
        }
    }
}

/// One of the two conversions the pool supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapDirection {
    AToB,
    BToA,
}

impl SwapDirection {
    pub const ALL: [SwapDirection; 2] = [SwapDirection::AToB, SwapDirection::BToA];

    /// The action that submits a swap in this direction.
    #[must_use]
    pub const fn action(self) -> ActionKind {
        match self {
            SwapDirection::AToB => ActionKind::SwapAToB,
            SwapDirection::BToA => ActionKind::SwapBToA,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapDirection::AToB => write!(f, "A→B"),
            SwapDirection::BToA => write!(f, "B→A"),
        }
    }
}

/// The mutating actions a user can trigger; each owns a pending flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    SwapAToB,
    SwapBToA,
    AddLiquidity,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [
        ActionKind::SwapAToB,
        ActionKind::SwapBToA,
        ActionKind::AddLiquidity,
    ];
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::SwapAToB => write!(f, "swap A→B"),
            ActionKind::SwapBToA => write!(f, "swap B→A"),
            ActionKind::AddLiquidity => write!(f, "add liquidity"),
        }
    }
}
