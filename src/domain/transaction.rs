//! Transaction confirmations and the per-action lifecycle.

use std::fmt;

use serde::Serialize;

/// A transaction the network has accepted and mined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    /// Transaction hash, hex encoded.
    pub tx_hash: String,
    /// Block the transaction landed in, when the provider reports it.
    pub block_number: Option<u64>,
}

impl Confirmation {
    pub fn new(tx_hash: impl Into<String>, block_number: Option<u64>) -> Self {
        Self {
            tx_hash: tx_hash.into(),
            block_number,
        }
    }
}

/// Where an orchestrated action currently is.
///
/// `Failed` is entered from any busy phase and falls back to `Idle` once the
/// failure has been surfaced to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPhase {
    #[default]
    Idle,
    Validating,
    ConvertingUnits,
    CheckingAllowance,
    Submitting,
    Confirming,
    Failed,
}

impl ActionPhase {
    /// Whether the action holds its pending flag in this phase.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        !matches!(self, ActionPhase::Idle | ActionPhase::Failed)
    }
}

impl fmt::Display for ActionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActionPhase::Idle => "idle",
            ActionPhase::Validating => "validating",
            ActionPhase::ConvertingUnits => "converting units",
            ActionPhase::CheckingAllowance => "checking allowance",
            ActionPhase::Submitting => "submitting",
            ActionPhase::Confirming => "confirming",
            ActionPhase::Failed => "failed",
        };
        f.write_str(label)
    }
}
