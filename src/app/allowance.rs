//! Allowance management ahead of transfer-dependent pool calls.

use std::sync::Arc;

use alloy_primitives::{Address, U256};
use tracing::{debug, info};

use crate::domain::Confirmation;
use crate::error::{Error, Result};
use crate::port::{ContractGateway, TransactionPrompt, TransactionRequest};

/// Result of an allowance check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowanceOutcome {
    /// The existing allowance already covers the amount.
    Sufficient {
        /// Allowance found on-chain.
        current: U256,
    },
    /// An approval for exactly the required amount was confirmed.
    Approved {
        /// Confirmation of the approval transaction.
        confirmation: Confirmation,
    },
}

impl AllowanceOutcome {
    /// Whether an approval transaction was sent.
    #[must_use]
    pub fn approved(&self) -> bool {
        matches!(self, AllowanceOutcome::Approved { .. })
    }
}

/// Makes sure a spender may move enough of a token before it is asked to.
pub struct AllowanceManager {
    gateway: Arc<dyn ContractGateway>,
    prompt: Arc<dyn TransactionPrompt>,
}

impl AllowanceManager {
    pub fn new(gateway: Arc<dyn ContractGateway>, prompt: Arc<dyn TransactionPrompt>) -> Self {
        Self { gateway, prompt }
    }

    /// Approve `spender` for exactly `required` if the current allowance is
    /// below it, waiting for the approval to confirm.
    ///
    /// At most one approval is sent per call and none when the allowance is
    /// already sufficient.
    ///
    /// # Errors
    ///
    /// Propagates read and approval failures unchanged, and returns
    /// [`Error::UserRejected`] if the approval prompt is declined. Nothing is
    /// retried.
    pub async fn ensure_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
        required: U256,
    ) -> Result<AllowanceOutcome> {
        let current = self.gateway.allowance(token, owner, spender).await?;
        if current >= required {
            debug!(%token, %current, %required, "Allowance sufficient");
            return Ok(AllowanceOutcome::Sufficient { current });
        }

        let request = TransactionRequest::Approve {
            token,
            spender,
            amount: required,
        };
        if !self.prompt.confirm(&request).await {
            return Err(Error::UserRejected);
        }

        info!(%token, %spender, %current, %required, "Submitting approval");
        let confirmation = self.gateway.approve(token, spender, required).await?;
        info!(tx_hash = %confirmation.tx_hash, "Approval confirmed");

        Ok(AllowanceOutcome::Approved { confirmation })
    }
}
