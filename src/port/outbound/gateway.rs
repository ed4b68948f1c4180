//! Contract gateway port.
//!
//! Typed facade over the two external contract interfaces the front-end
//! drives: the ERC-20 token interface (one instance per token) and the swap
//! pool interface (a single pool).

use alloy_primitives::{Address, U256};
use async_trait::async_trait;

use crate::domain::{Confirmation, SwapDirection};
use crate::error::Result;

/// Port for reading from and writing to the token and pool contracts.
///
/// Read methods have no side effects. Write methods resolve only once the
/// transaction has been confirmed by the network.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
///
/// # Errors
///
/// - [`Error::NoWallet`](crate::error::Error::NoWallet) when a write is
///   attempted without a signer.
/// - [`Error::UserRejected`](crate::error::Error::UserRejected) when the
///   wallet prompt is declined.
/// - [`Error::ContractRevert`](crate::error::Error::ContractRevert) when the
///   network rejects or reverts the call.
/// - [`Error::Network`](crate::error::Error::Network) when the provider
///   cannot be reached.
#[async_trait]
pub trait ContractGateway: Send + Sync {
    /// Address of the swap pool, the spender for every approval.
    fn pool(&self) -> Address;

    /// Decimal precision of `token`.
    async fn decimals(&self, token: Address) -> Result<u8>;

    /// Balance of `owner` in `token` base units.
    async fn balance(&self, token: Address, owner: Address) -> Result<U256>;

    /// Amount `spender` may transfer from `owner`, in base units.
    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256>;

    /// Pool rate for `direction` as a decimal string.
    async fn price(&self, direction: SwapDirection) -> Result<String>;

    /// Approve `spender` to transfer exactly `amount` of `token`.
    async fn approve(&self, token: Address, spender: Address, amount: U256)
        -> Result<Confirmation>;

    /// Swap `amount_in` base units of the direction's input token.
    async fn swap(&self, direction: SwapDirection, amount_in: U256) -> Result<Confirmation>;

    /// Deposit both tokens into the pool.
    async fn add_liquidity(&self, amount_a: U256, amount_b: U256) -> Result<Confirmation>;
}
