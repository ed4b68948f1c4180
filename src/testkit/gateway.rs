//! In-memory [`ContractGateway`] for testing.
//!
//! [`MockGateway`] keeps per-token decimals, balances and allowances plus the
//! two pool prices. Every call is appended to a log so tests can assert on
//! exactly which reads and writes happened and in what order.
//!
//! Approvals update the stored allowance. Writes can be held open with
//! [`MockGateway::gated`] to exercise overlapping actions.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use super::domain::{POOL, TOKEN_A, TOKEN_B};
use crate::domain::{Confirmation, SwapDirection};
use crate::error::{Error, Result};
use crate::port::ContractGateway;

/// A recorded gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Decimals(Address),
    Balance(Address),
    Allowance(Address),
    Price(SwapDirection),
    Approve { token: Address, amount: U256 },
    Swap { direction: SwapDirection, amount_in: U256 },
    AddLiquidity { amount_a: U256, amount_b: U256 },
}

impl Call {
    fn kind(&self) -> CallKind {
        match self {
            Call::Decimals(_) => CallKind::Decimals,
            Call::Balance(_) => CallKind::Balance,
            Call::Allowance(_) => CallKind::Allowance,
            Call::Price(_) => CallKind::Price,
            Call::Approve { .. } => CallKind::Approve,
            Call::Swap { .. } => CallKind::Swap,
            Call::AddLiquidity { .. } => CallKind::AddLiquidity,
        }
    }

    /// Whether this call sends a transaction.
    pub fn is_write(&self) -> bool {
        matches!(
            self.kind(),
            CallKind::Approve | CallKind::Swap | CallKind::AddLiquidity
        )
    }
}

/// Which gateway operation a failure applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    Decimals,
    Balance,
    Allowance,
    Price,
    Approve,
    Swap,
    AddLiquidity,
}

/// Failure injected into a call kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Revert,
    Rejected,
    Network,
}

impl Failure {
    fn to_error(self, kind: CallKind) -> Error {
        match self {
            Failure::Revert => Error::ContractRevert(format!("{kind:?} reverted")),
            Failure::Rejected => Error::UserRejected,
            Failure::Network => Error::Network("connection refused".into()),
        }
    }
}

#[derive(Debug)]
struct Ledger {
    decimals: HashMap<Address, u8>,
    balances: HashMap<Address, U256>,
    allowances: HashMap<Address, U256>,
    price_a_to_b: String,
    price_b_to_a: String,
    failures: HashMap<CallKind, Failure>,
    calls: Vec<Call>,
}

/// In-memory pool and token contracts.
pub struct MockGateway {
    pool: Address,
    ledger: Mutex<Ledger>,
    gate: Option<Arc<Notify>>,
    gated: Mutex<HashSet<CallKind>>,
    next_block: AtomicU64,
}

impl MockGateway {
    /// Both tokens at 18 decimals, zero balances and allowances, prices
    /// `2.5` (A→B) and `0.4` (B→A).
    pub fn new() -> Self {
        let decimals = HashMap::from([(TOKEN_A, 18), (TOKEN_B, 18)]);
        Self {
            pool: POOL,
            ledger: Mutex::new(Ledger {
                decimals,
                balances: HashMap::new(),
                allowances: HashMap::new(),
                price_a_to_b: "2.5".into(),
                price_b_to_a: "0.4".into(),
                failures: HashMap::new(),
                calls: Vec::new(),
            }),
            gate: None,
            gated: Mutex::new(HashSet::new()),
            next_block: AtomicU64::new(1),
        }
    }

    pub fn with_decimals(self, token: Address, decimals: u8) -> Self {
        self.ledger.lock().decimals.insert(token, decimals);
        self
    }

    pub fn with_balance(self, token: Address, amount: U256) -> Self {
        self.ledger.lock().balances.insert(token, amount);
        self
    }

    /// Allowance already granted to the pool for `token`.
    pub fn with_allowance(self, token: Address, amount: U256) -> Self {
        self.ledger.lock().allowances.insert(token, amount);
        self
    }

    pub fn with_prices(self, a_to_b: &str, b_to_a: &str) -> Self {
        {
            let mut ledger = self.ledger.lock();
            ledger.price_a_to_b = a_to_b.into();
            ledger.price_b_to_a = b_to_a.into();
        }
        self
    }

    /// Make every call of `kind` fail with `failure`.
    pub fn failing(self, kind: CallKind, failure: Failure) -> Self {
        self.ledger.lock().failures.insert(kind, failure);
        self
    }

    /// Hold calls of `kind` open until the returned handle is notified.
    ///
    /// The call is logged before it waits.
    pub fn gated(mut self, kind: CallKind) -> (Self, Arc<Notify>) {
        let gate = self.gate.get_or_insert_with(|| Arc::new(Notify::new())).clone();
        self.gated.lock().insert(kind);
        (self, gate)
    }

    /// Calls made so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.ledger.lock().calls.clone()
    }

    /// Transactions sent so far, in order.
    pub fn writes(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_write).collect()
    }

    /// Forget the call log.
    pub fn clear_calls(&self) {
        self.ledger.lock().calls.clear();
    }

    /// Current allowance for `token`.
    pub fn allowance_of(&self, token: Address) -> U256 {
        self.ledger
            .lock()
            .allowances
            .get(&token)
            .copied()
            .unwrap_or_default()
    }

    /// Log `call` and return the injected failure for its kind, if any.
    async fn record(&self, call: Call) -> Result<()> {
        let kind = call.kind();
        let failure = {
            let mut ledger = self.ledger.lock();
            ledger.calls.push(call);
            ledger.failures.get(&kind).copied()
        };

        let gated = self.gated.lock().contains(&kind);
        if gated {
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
        }

        match failure {
            Some(failure) => Err(failure.to_error(kind)),
            None => Ok(()),
        }
    }

    fn confirmation(&self) -> Confirmation {
        let block = self.next_block.fetch_add(1, Ordering::Relaxed);
        Confirmation::new(format!("{:#066x}", block), Some(block))
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContractGateway for MockGateway {
    fn pool(&self) -> Address {
        self.pool
    }

    async fn decimals(&self, token: Address) -> Result<u8> {
        self.record(Call::Decimals(token)).await?;
        self.ledger
            .lock()
            .decimals
            .get(&token)
            .copied()
            .ok_or_else(|| Error::ContractRevert(format!("{token} is not a token")))
    }

    async fn balance(&self, token: Address, _owner: Address) -> Result<U256> {
        self.record(Call::Balance(token)).await?;
        Ok(self
            .ledger
            .lock()
            .balances
            .get(&token)
            .copied()
            .unwrap_or_default())
    }

    async fn allowance(&self, token: Address, _owner: Address, _spender: Address) -> Result<U256> {
        self.record(Call::Allowance(token)).await?;
        Ok(self.allowance_of(token))
    }

    async fn price(&self, direction: SwapDirection) -> Result<String> {
        self.record(Call::Price(direction)).await?;
        let ledger = self.ledger.lock();
        Ok(match direction {
            SwapDirection::AToB => ledger.price_a_to_b.clone(),
            SwapDirection::BToA => ledger.price_b_to_a.clone(),
        })
    }

    async fn approve(&self, token: Address, _spender: Address, amount: U256) -> Result<Confirmation> {
        self.record(Call::Approve { token, amount }).await?;
        self.ledger.lock().allowances.insert(token, amount);
        Ok(self.confirmation())
    }

    async fn swap(&self, direction: SwapDirection, amount_in: U256) -> Result<Confirmation> {
        self.record(Call::Swap {
            direction,
            amount_in,
        })
        .await?;
        Ok(self.confirmation())
    }

    async fn add_liquidity(&self, amount_a: U256, amount_b: U256) -> Result<Confirmation> {
        self.record(Call::AddLiquidity { amount_a, amount_b }).await?;
        Ok(self.confirmation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn approve_updates_allowance() {
        let gateway = MockGateway::new();

        gateway
            .approve(TOKEN_A, POOL, U256::from(1000u64))
            .await
            .unwrap();

        assert_eq!(gateway.allowance_of(TOKEN_A), U256::from(1000u64));
        assert_eq!(gateway.writes().len(), 1);
    }

    #[tokio::test]
    async fn injected_failure_is_logged_and_returned() {
        let gateway = MockGateway::new().failing(CallKind::Price, Failure::Network);

        let err = gateway.price(SwapDirection::AToB).await.unwrap_err();

        assert!(matches!(err, Error::Network(_)));
        assert_eq!(gateway.calls(), vec![Call::Price(SwapDirection::AToB)]);
    }

    #[tokio::test]
    async fn confirmations_use_increasing_blocks() {
        let gateway = MockGateway::new();

        let first = gateway.add_liquidity(U256::from(1u64), U256::from(1u64)).await.unwrap();
        let second = gateway.swap(SwapDirection::BToA, U256::from(1u64)).await.unwrap();

        assert_eq!(first.block_number, Some(1));
        assert_eq!(second.block_number, Some(2));
        assert_ne!(first.tx_hash, second.tx_hash);
    }
}
