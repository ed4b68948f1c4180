//! Wiring shared by every CLI handler.

use std::sync::Arc;

use crate::adapter::outbound::evm::LocalWallet;
use crate::app::{Orchestrator, ViewState};
use crate::config::Config;
use crate::error::Result;
use crate::port::{AutoApprove, TransactionPrompt};

use super::output;
use super::prompt::TerminalPrompt;

/// Orchestrator and wallet built from configuration and global flags.
pub struct Context {
    pub orchestrator: Orchestrator,
    pub wallet: LocalWallet,
    /// Transactions are confirmed on the terminal (no `--yes`).
    pub interactive: bool,
}

impl Context {
    /// # Errors
    ///
    /// Returns a config error if the wallet cannot be built from `config`.
    #[allow(clippy::result_large_err)]
    pub fn new(config: &Config, yes: bool) -> Result<Self> {
        let prompt: Arc<dyn TransactionPrompt> = if yes {
            Arc::new(AutoApprove)
        } else {
            Arc::new(TerminalPrompt)
        };
        Ok(Self {
            orchestrator: Orchestrator::new(config.token_pair(), prompt),
            wallet: LocalWallet::from_config(config)?,
            interactive: !yes,
        })
    }

    /// Connect the wallet into `state` behind a spinner.
    ///
    /// # Errors
    ///
    /// Returns the connect or initial refresh failure.
    pub async fn connect(&self, state: &mut ViewState) -> Result<()> {
        let pb = output::spinner("Connecting wallet");
        let result = self.orchestrator.connect(state, &self.wallet).await;
        match &result {
            Ok(()) => output::spinner_success(&pb, "Wallet connected"),
            Err(_) => output::spinner_clear(&pb),
        }
        result
    }
}
