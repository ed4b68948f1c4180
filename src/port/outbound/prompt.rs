//! Transaction prompt port.
//!
//! Every write goes through a prompt before it is signed, mirroring the
//! confirmation dialog of a browser wallet. Declining aborts the write with
//! [`Error::UserRejected`](crate::error::Error::UserRejected).

use std::fmt;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;

use crate::domain::SwapDirection;

/// What the wallet is about to sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionRequest {
    Approve {
        token: Address,
        spender: Address,
        amount: U256,
    },
    Swap {
        direction: SwapDirection,
        amount_in: U256,
    },
    AddLiquidity {
        amount_a: U256,
        amount_b: U256,
    },
}

impl fmt::Display for TransactionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionRequest::Approve {
                token,
                spender,
                amount,
            } => write!(f, "approve {spender} to spend {amount} units of {token}"),
            TransactionRequest::Swap {
                direction,
                amount_in,
            } => write!(f, "swap {direction} with {amount_in} input units"),
            TransactionRequest::AddLiquidity { amount_a, amount_b } => {
                write!(f, "add liquidity of {amount_a} A units and {amount_b} B units")
            }
        }
    }
}

/// Port for asking the user to approve a transaction.
#[async_trait]
pub trait TransactionPrompt: Send + Sync {
    /// Return `true` to sign and submit `request`.
    async fn confirm(&self, request: &TransactionRequest) -> bool;
}

/// Prompt that approves everything (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoApprove;

#[async_trait]
impl TransactionPrompt for AutoApprove {
    async fn confirm(&self, _request: &TransactionRequest) -> bool {
        true
    }
}
