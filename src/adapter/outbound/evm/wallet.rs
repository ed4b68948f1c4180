//! Local private-key wallet.

use std::sync::Arc;

use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use tracing::{debug, info};

use super::gateway::EvmGateway;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};
use crate::port::{WalletProvider, WalletSession};

/// Wallet backed by a private key from the environment or a keystore.
pub struct LocalWallet {
    rpc_url: url::Url,
    chain_id: Option<u64>,
    pool: Address,
    private_key: Option<String>,
}

impl LocalWallet {
    /// Build from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns a config error if the RPC URL does not parse.
    #[allow(clippy::result_large_err)]
    pub fn from_config(config: &Config) -> Result<Self> {
        let rpc_url = config
            .network
            .rpc_url
            .parse()
            .map_err(|e: url::ParseError| ConfigError::InvalidValue {
                field: "rpc_url",
                reason: e.to_string(),
            })?;
        Ok(Self {
            rpc_url,
            chain_id: config.network.chain_id,
            pool: config.contracts.pool,
            private_key: config.wallet.private_key.clone(),
        })
    }

    fn signer(&self) -> Result<PrivateKeySigner> {
        let key = self.private_key.as_deref().ok_or(Error::NoWallet)?;
        let signer: PrivateKeySigner =
            key.trim().parse().map_err(|e| ConfigError::InvalidValue {
                field: "WALLET_PRIVATE_KEY",
                reason: format!("{e}"),
            })?;
        Ok(signer)
    }
}

#[async_trait]
impl WalletProvider for LocalWallet {
    async fn connect(&self) -> Result<WalletSession> {
        let signer = self.signer()?;
        let address = signer.address();

        let gateway = EvmGateway::with_signer(self.rpc_url.clone(), self.pool, signer);
        // Fail connect rather than the first action when the node is down.
        let chain_id = gateway.chain_id().await?;
        debug!(chain_id, "Node reachable");
        if let Some(expected) = self.chain_id.filter(|&id| id != chain_id) {
            return Err(ConfigError::InvalidValue {
                field: "chain_id",
                reason: format!("node is on chain {chain_id}, expected {expected}"),
            }
            .into());
        }

        info!(%address, chain_id, "Wallet connected");
        Ok(WalletSession::new(address, Arc::new(gateway)))
    }

    fn name(&self) -> &'static str {
        "local key"
    }
}
