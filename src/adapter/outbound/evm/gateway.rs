//! Alloy-backed contract gateway.
//!
//! Talks to the ERC-20 tokens and the swap pool over JSON-RPC. Writes are
//! signed by the wallet bound into the provider and resolve once the receipt
//! is available.

use alloy_primitives::{Address, U256};
use alloy_provider::network::{Ethereum, EthereumWallet, ReceiptResponse};
use alloy_provider::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::sol;
use async_trait::async_trait;
use tracing::debug;

use super::error::{classify, receipt_error};
use crate::domain::{to_decimal_string, Confirmation, SwapDirection, FIXED_POINT_DECIMALS};
use crate::error::{Error, Result};
use crate::port::ContractGateway;

sol! {
    #[sol(rpc)]
    contract IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function decimals() external view returns (uint8);
        function approve(address spender, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
    }

    #[sol(rpc)]
    contract ITokenSwap {
        function swapAToB(uint256 amountAIn) external;
        function swapBToA(uint256 amountBIn) external;
        function getPriceAtoB() external view returns (uint256);
        function getPriceBtoA() external view returns (uint256);
        function addLiquidity(uint256 amountA, uint256 amountB) external;
    }
}

/// Contract gateway over an alloy provider.
pub struct EvmGateway {
    provider: DynProvider,
    pool: Address,
    /// Account that signs writes; `None` for a read-only gateway.
    signer: Option<Address>,
}

impl EvmGateway {
    /// Gateway that can only read.
    pub fn read_only(rpc_url: url::Url, pool: Address) -> Self {
        let provider = ProviderBuilder::new().connect_http(rpc_url).erased();
        Self {
            provider,
            pool,
            signer: None,
        }
    }

    /// Gateway whose writes are signed by `signer`.
    pub fn with_signer(rpc_url: url::Url, pool: Address, signer: PrivateKeySigner) -> Self {
        let address = signer.address();
        let wallet = EthereumWallet::from(signer);
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(rpc_url)
            .erased();
        Self {
            provider,
            pool,
            signer: Some(address),
        }
    }

    /// Chain id reported by the node; used as the connectivity check.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] when the node cannot be reached.
    pub async fn chain_id(&self) -> Result<u64> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| Error::Network(e.to_string()))
    }

    fn require_signer(&self) -> Result<Address> {
        self.signer.ok_or(Error::NoWallet)
    }

    fn token(&self, token: Address) -> IERC20::IERC20Instance<&DynProvider> {
        IERC20::new(token, &self.provider)
    }

    fn pool_contract(&self) -> ITokenSwap::ITokenSwapInstance<&DynProvider> {
        ITokenSwap::new(self.pool, &self.provider)
    }
}

/// Wait for the receipt of a sent transaction and check it succeeded.
async fn confirm(pending: PendingTransactionBuilder<Ethereum>) -> Result<Confirmation> {
    let tx_hash = *pending.tx_hash();
    debug!(%tx_hash, "Waiting for confirmation");

    let receipt = pending.get_receipt().await.map_err(receipt_error)?;
    if !receipt.status() {
        return Err(Error::ContractRevert(format!("transaction {tx_hash} reverted")));
    }

    Ok(Confirmation::new(
        format!("{:?}", receipt.transaction_hash()),
        receipt.block_number(),
    ))
}

#[async_trait]
impl ContractGateway for EvmGateway {
    fn pool(&self) -> Address {
        self.pool
    }

    async fn decimals(&self, token: Address) -> Result<u8> {
        self.token(token).decimals().call().await.map_err(classify)
    }

    async fn balance(&self, token: Address, owner: Address) -> Result<U256> {
        self.token(token)
            .balanceOf(owner)
            .call()
            .await
            .map_err(classify)
    }

    async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        self.token(token)
            .allowance(owner, spender)
            .call()
            .await
            .map_err(classify)
    }

    async fn price(&self, direction: SwapDirection) -> Result<String> {
        let pool = self.pool_contract();
        let raw = match direction {
            SwapDirection::AToB => pool.getPriceAtoB().call().await,
            SwapDirection::BToA => pool.getPriceBtoA().call().await,
        }
        .map_err(classify)?;
        Ok(to_decimal_string(raw, FIXED_POINT_DECIMALS))
    }

    async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<Confirmation> {
        let from = self.require_signer()?;
        let pending = self
            .token(token)
            .approve(spender, amount)
            .from(from)
            .send()
            .await
            .map_err(classify)?;
        confirm(pending).await
    }

    async fn swap(&self, direction: SwapDirection, amount_in: U256) -> Result<Confirmation> {
        let from = self.require_signer()?;
        let pool = self.pool_contract();
        let pending = match direction {
            SwapDirection::AToB => pool.swapAToB(amount_in).from(from).send().await,
            SwapDirection::BToA => pool.swapBToA(amount_in).from(from).send().await,
        }
        .map_err(classify)?;
        confirm(pending).await
    }

    async fn add_liquidity(&self, amount_a: U256, amount_b: U256) -> Result<Confirmation> {
        let from = self.require_signer()?;
        let pending = self
            .pool_contract()
            .addLiquidity(amount_a, amount_b)
            .from(from)
            .send()
            .await
            .map_err(classify)?;
        confirm(pending).await
    }
}
