//! Wallet provider port.
//!
//! A wallet provider hands out a [`WalletSession`]: the connected account
//! plus a gateway whose writes are signed by that account.

use std::fmt;
use std::sync::Arc;

use alloy_primitives::Address;
use async_trait::async_trait;

use super::gateway::ContractGateway;
use crate::error::Result;

/// A connected wallet: account address and the signing gateway bound to it.
#[derive(Clone)]
pub struct WalletSession {
    pub address: Address,
    pub gateway: Arc<dyn ContractGateway>,
}

impl WalletSession {
    pub fn new(address: Address, gateway: Arc<dyn ContractGateway>) -> Self {
        Self { address, gateway }
    }
}

impl fmt::Debug for WalletSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletSession")
            .field("address", &self.address)
            .field("pool", &self.gateway.pool())
            .finish()
    }
}

/// Port for connecting a wallet.
///
/// # Errors
///
/// [`connect`](WalletProvider::connect) fails with
/// [`Error::NoWallet`](crate::error::Error::NoWallet) when no wallet is
/// available, or with the provider's error when the account request fails.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request the account and bind a signing gateway to it.
    async fn connect(&self) -> Result<WalletSession>;

    /// Short name for logging and display.
    fn name(&self) -> &'static str;
}
