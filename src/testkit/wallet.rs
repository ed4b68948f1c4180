//! Mock wallet provider and scripted transaction prompt.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::domain::OWNER;
use super::gateway::MockGateway;
use crate::error::{Error, Result};
use crate::port::{TransactionPrompt, TransactionRequest, WalletProvider, WalletSession};

/// Wallet that connects [`OWNER`] to a mock gateway, or has no account.
pub struct MockWallet {
    gateway: Option<Arc<MockGateway>>,
    connect_count: Arc<AtomicU32>,
}

impl MockWallet {
    pub fn connected(gateway: Arc<MockGateway>) -> Self {
        Self {
            gateway: Some(gateway),
            connect_count: Arc::new(AtomicU32::new(0)),
        }
    }

    /// No wallet installed: every connect fails with `NoWallet`.
    pub fn unavailable() -> Self {
        Self {
            gateway: None,
            connect_count: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn connect_count(&self) -> u32 {
        self.connect_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn connect(&self) -> Result<WalletSession> {
        self.connect_count.fetch_add(1, Ordering::SeqCst);
        let gateway = self.gateway.clone().ok_or(Error::NoWallet)?;
        Ok(WalletSession::new(OWNER, gateway))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Prompt that answers from a script and records what it was asked.
///
/// Once the script is exhausted every request is approved.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<bool>>,
    requests: Mutex<Vec<TransactionRequest>>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Decline the first request.
    pub fn declining() -> Self {
        Self::new([false])
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<TransactionRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl TransactionPrompt for ScriptedPrompt {
    async fn confirm(&self, request: &TransactionRequest) -> bool {
        self.requests.lock().push(request.clone());
        self.answers.lock().pop_front().unwrap_or(true)
    }
}
