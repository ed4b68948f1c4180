//! Swap and liquidity orchestration.
//!
//! Each mutating command walks a fixed sequence against the explicit
//! [`ViewState`] it is handed:
//!
//! ```text
//! Idle -> Validating -> ConvertingUnits -> CheckingAllowance
//!      -> Submitting -> Confirming -> Idle
//! ```
//!
//! Any failure moves the action to `Failed`, is written to the status
//! message, and the action returns to `Idle`. No step starts before the
//! previous one has resolved and nothing is retried.
//!
//! Besides the per-action pending flags kept in the view state, the
//! orchestrator holds a single in-flight lock so only one wallet-prompted
//! transaction is outstanding at a time across all actions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use alloy_primitives::{Address, U256};
use tracing::{debug, info, warn};

use super::allowance::AllowanceManager;
use super::state::{Balances, InputField, StatusMessage, ViewState};
use crate::domain::{
    to_base_units, to_decimal_string, validate_positive, ActionKind, ActionPhase, Confirmation,
    Quote, SwapDirection, TokenPair,
};
use crate::error::{Error, Result};
use crate::port::{
    ContractGateway, TransactionPrompt, TransactionRequest, WalletProvider, WalletSession,
};

/// What happened to a mutating command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The transaction was confirmed.
    Confirmed(Confirmation),
    /// The same action was already pending; nothing was done.
    Ignored,
}

/// Sequences user intents into gateway calls.
pub struct Orchestrator {
    pair: TokenPair,
    prompt: Arc<dyn TransactionPrompt>,
    in_flight: AtomicBool,
}

impl Orchestrator {
    pub fn new(pair: TokenPair, prompt: Arc<dyn TransactionPrompt>) -> Self {
        Self {
            pair,
            prompt,
            in_flight: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn pair(&self) -> &TokenPair {
        &self.pair
    }

    /// Whether any mutating action currently holds the in-flight lock.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Connect a wallet, bind its session and load balances and prices.
    ///
    /// # Errors
    ///
    /// Returns the wallet's error when connecting fails, or the refresh error
    /// when the initial reads fail (the session stays bound).
    pub async fn connect(&self, state: &mut ViewState, wallet: &dyn WalletProvider) -> Result<()> {
        let session = match wallet.connect().await {
            Ok(session) => session,
            Err(e) => {
                state.set_status(StatusMessage::error(format!("Connect failed: {e}")));
                return Err(e);
            }
        };

        info!(wallet = wallet.name(), address = %session.address, "Wallet connected");
        let address = session.address;
        state.bind_session(session);
        state.set_status(StatusMessage::info(format!("Connected {address}")));

        if let Err(e) = self.refresh(state).await {
            state.set_status(StatusMessage::error(format!("Refresh failed: {e}")));
            return Err(e);
        }
        Ok(())
    }

    /// Forget the session and everything read through it.
    pub fn disconnect(&self, state: &mut ViewState) {
        if let Some(session) = state.session() {
            info!(address = %session.address, "Wallet disconnected");
        }
        state.clear_session();
        state.set_status(StatusMessage::info("Disconnected"));
    }

    /// Re-read both balances and both prices.
    ///
    /// State is only updated once every read has succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoWallet`] without any call when no session is bound,
    /// otherwise the first failing read.
    pub async fn refresh(&self, state: &mut ViewState) -> Result<()> {
        let session = state.session().cloned().ok_or(Error::NoWallet)?;
        let gateway = session.gateway.as_ref();

        let balance_a = read_balance(gateway, self.pair.token_a.address, session.address).await?;
        let balance_b = read_balance(gateway, self.pair.token_b.address, session.address).await?;

        let a_to_b = gateway.price(SwapDirection::AToB).await?;
        let b_to_a = gateway.price(SwapDirection::BToA).await?;

        debug!(%balance_a, %balance_b, %a_to_b, %b_to_a, "Refreshed balances and prices");
        state.set_balances(Balances {
            token_a: Some(balance_a),
            token_b: Some(balance_b),
        });
        state.set_quote(Quote::new(a_to_b, b_to_a));
        Ok(())
    }

    /// Swap the amount in the direction's input field.
    ///
    /// On confirmation the input field is cleared and one refresh runs.
    ///
    /// # Errors
    ///
    /// Returns the failure that aborted the action after recording it in the
    /// status message.
    pub async fn swap(&self, state: &mut ViewState, direction: SwapDirection) -> Result<ActionOutcome> {
        let kind = direction.action();
        let field = InputField::swap(direction);
        let input = state.input(field).to_owned();
        let input_token = self.pair.input(direction).clone();
        let output_token = self.pair.output(direction).clone();

        let Some(mut pending) = self.begin(state, kind)? else {
            return Ok(ActionOutcome::Ignored);
        };

        let result = async {
            let session = pending.session.clone();
            let gateway = session.gateway.clone();

            pending.enter(ActionPhase::Validating);
            let amount = validate_positive(&input)?;

            pending.enter(ActionPhase::ConvertingUnits);
            let decimals = gateway.decimals(input_token.address).await?;
            let amount_in = to_base_units(amount, decimals)?;

            pending.enter(ActionPhase::CheckingAllowance);
            self.allowance_manager(&session)
                .ensure_allowance(input_token.address, session.address, gateway.pool(), amount_in)
                .await?;

            pending.enter(ActionPhase::Submitting);
            self.confirm_prompt(&TransactionRequest::Swap {
                direction,
                amount_in,
            })
            .await?;

            pending.enter(ActionPhase::Confirming);
            gateway.swap(direction, amount_in).await
        }
        .await;

        let confirmation = match result {
            Ok(confirmation) => confirmation,
            Err(e) => {
                pending.fail(format!("Swap failed: {e}"));
                return Err(e);
            }
        };
        drop(pending);

        info!(
            %direction,
            amount = %input.trim(),
            tx_hash = %confirmation.tx_hash,
            "Swap confirmed"
        );
        state.clear_input(field);
        state.set_status(StatusMessage::success(format!(
            "Swapped {} {input_token} → {output_token}",
            input.trim()
        )));
        self.refresh_after_action(state).await;

        Ok(ActionOutcome::Confirmed(confirmation))
    }

    /// Deposit the amounts in both liquidity fields.
    ///
    /// Both amounts are validated before anything else; allowances are
    /// ensured for token A and then token B. On confirmation both fields are
    /// cleared and one refresh runs.
    ///
    /// # Errors
    ///
    /// Returns the failure that aborted the action after recording it in the
    /// status message.
    pub async fn add_liquidity(&self, state: &mut ViewState) -> Result<ActionOutcome> {
        let kind = ActionKind::AddLiquidity;
        let input_a = state.input(InputField::LiquidityA).to_owned();
        let input_b = state.input(InputField::LiquidityB).to_owned();
        let token_a = self.pair.token_a.address;
        let token_b = self.pair.token_b.address;

        let Some(mut pending) = self.begin(state, kind)? else {
            return Ok(ActionOutcome::Ignored);
        };

        let result = async {
            let session = pending.session.clone();
            let gateway = session.gateway.clone();

            pending.enter(ActionPhase::Validating);
            let amount_a = validate_positive(&input_a)?;
            let amount_b = validate_positive(&input_b)?;

            pending.enter(ActionPhase::ConvertingUnits);
            let decimals_a = gateway.decimals(token_a).await?;
            let decimals_b = gateway.decimals(token_b).await?;
            let amount_a = to_base_units(amount_a, decimals_a)?;
            let amount_b = to_base_units(amount_b, decimals_b)?;

            pending.enter(ActionPhase::CheckingAllowance);
            let allowances = self.allowance_manager(&session);
            let pool = gateway.pool();
            allowances
                .ensure_allowance(token_a, session.address, pool, amount_a)
                .await?;
            allowances
                .ensure_allowance(token_b, session.address, pool, amount_b)
                .await?;

            pending.enter(ActionPhase::Submitting);
            self.confirm_prompt(&TransactionRequest::AddLiquidity { amount_a, amount_b })
                .await?;

            pending.enter(ActionPhase::Confirming);
            gateway.add_liquidity(amount_a, amount_b).await
        }
        .await;

        let confirmation = match result {
            Ok(confirmation) => confirmation,
            Err(e) => {
                pending.fail(format!("Add liquidity failed: {e}"));
                return Err(e);
            }
        };
        drop(pending);

        info!(tx_hash = %confirmation.tx_hash, "Liquidity added");
        state.clear_input(InputField::LiquidityA);
        state.clear_input(InputField::LiquidityB);
        state.set_status(StatusMessage::success(format!(
            "Added {} {} and {} {} to the pool",
            input_a.trim(),
            self.pair.token_a,
            input_b.trim(),
            self.pair.token_b
        )));
        self.refresh_after_action(state).await;

        Ok(ActionOutcome::Confirmed(confirmation))
    }

    /// Claim the pending flag and the in-flight lock for `kind`.
    ///
    /// Returns `Ok(None)` when `kind` is already pending.
    fn begin<'a>(
        &'a self,
        state: &'a mut ViewState,
        kind: ActionKind,
    ) -> Result<Option<PendingAction<'a>>> {
        if state.is_pending(kind) {
            debug!(action = %kind, "Action already pending, ignoring");
            return Ok(None);
        }

        let Some(session) = state.session().cloned() else {
            let err = Error::NoWallet;
            state.set_status(StatusMessage::error(format!("{} failed: {err}", capitalize(kind))));
            return Err(err);
        };

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            let err = Error::ActionInProgress(kind);
            state.set_status(StatusMessage::error(err.to_string()));
            return Err(err);
        }

        Ok(Some(PendingAction {
            state,
            kind,
            session,
            in_flight: &self.in_flight,
        }))
    }

    fn allowance_manager(&self, session: &WalletSession) -> AllowanceManager {
        AllowanceManager::new(session.gateway.clone(), self.prompt.clone())
    }

    async fn confirm_prompt(&self, request: &TransactionRequest) -> Result<()> {
        if self.prompt.confirm(request).await {
            Ok(())
        } else {
            Err(Error::UserRejected)
        }
    }

    /// Refresh after a confirmed action; the action's success stands even if
    /// the follow-up reads fail.
    async fn refresh_after_action(&self, state: &mut ViewState) {
        if let Err(e) = self.refresh(state).await {
            warn!(error = %e, "Refresh after confirmed transaction failed");
        }
    }
}

/// An action holding its pending flag and the orchestrator's in-flight lock.
///
/// Dropping it returns the action to `Idle` and releases the lock, on every
/// exit path.
struct PendingAction<'a> {
    state: &'a mut ViewState,
    kind: ActionKind,
    session: WalletSession,
    in_flight: &'a AtomicBool,
}

impl PendingAction<'_> {
    fn enter(&mut self, phase: ActionPhase) {
        debug!(action = %self.kind, %phase, "Action phase");
        self.state.set_phase(self.kind, phase);
    }

    fn fail(&mut self, message: String) {
        self.enter(ActionPhase::Failed);
        warn!(action = %self.kind, error = %message, "Action failed");
        self.state.set_status(StatusMessage::error(message));
    }
}

impl Drop for PendingAction<'_> {
    fn drop(&mut self) {
        self.state.set_phase(self.kind, ActionPhase::Idle);
        self.in_flight.store(false, Ordering::Release);
    }
}

async fn read_balance(gateway: &dyn ContractGateway, token: Address, owner: Address) -> Result<String> {
    let decimals = gateway.decimals(token).await?;
    let raw: U256 = gateway.balance(token, owner).await?;
    Ok(to_decimal_string(raw, decimals))
}

fn capitalize(kind: ActionKind) -> String {
    let label = kind.to_string();
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::AutoApprove;
    use crate::testkit::domain::{connected_state, token_pair};
    use crate::testkit::gateway::MockGateway;

    #[tokio::test]
    async fn pending_action_is_a_no_op() {
        let gateway = Arc::new(MockGateway::new());
        let orchestrator = Orchestrator::new(token_pair(), Arc::new(AutoApprove));
        let mut state = connected_state(gateway.clone());
        state.set_input(InputField::SwapAToB, "10");
        state.set_phase(ActionKind::SwapAToB, ActionPhase::Confirming);

        let outcome = orchestrator
            .swap(&mut state, SwapDirection::AToB)
            .await
            .unwrap();

        assert_eq!(outcome, ActionOutcome::Ignored);
        assert!(gateway.calls().is_empty());
        assert_eq!(state.input(InputField::SwapAToB), "10");
    }

    #[tokio::test]
    async fn failure_returns_action_to_idle() {
        let gateway = Arc::new(MockGateway::new());
        let orchestrator = Orchestrator::new(token_pair(), Arc::new(AutoApprove));
        let mut state = connected_state(gateway.clone());
        state.set_input(InputField::SwapBToA, "abc");

        let err = orchestrator
            .swap(&mut state, SwapDirection::BToA)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidAmount { .. }));
        assert_eq!(state.phase(ActionKind::SwapBToA), ActionPhase::Idle);
        assert!(!orchestrator.is_busy());
    }

    #[test]
    fn capitalize_action_labels() {
        assert_eq!(capitalize(ActionKind::AddLiquidity), "Add liquidity");
        assert_eq!(capitalize(ActionKind::SwapAToB), "Swap A→B");
    }
}
