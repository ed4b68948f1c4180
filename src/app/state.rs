//! View state for one front-end session.
//!
//! `ViewState` is an explicit value handed to every orchestrator command.
//! Derived fields (the two swap estimates) are recomputed by the setters of
//! the fields they depend on, so readers never see a stale estimate.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{estimate, ActionKind, ActionPhase, Quote, SwapDirection};
use crate::port::WalletSession;

/// User-editable amount fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Amount of token A to swap for token B.
    SwapAToB,
    /// Amount of token B to swap for token A.
    SwapBToA,
    /// Token A side of a liquidity deposit.
    LiquidityA,
    /// Token B side of a liquidity deposit.
    LiquidityB,
}

impl InputField {
    /// The field holding the input amount of a swap in `direction`.
    #[must_use]
    pub const fn swap(direction: SwapDirection) -> Self {
        match direction {
            SwapDirection::AToB => InputField::SwapAToB,
            SwapDirection::BToA => InputField::SwapBToA,
        }
    }
}

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// The single transient message surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            at: Utc::now(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Error, text)
    }
}

/// Display-ready token balances of the connected account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Balances {
    pub token_a: Option<String>,
    pub token_b: Option<String>,
}

/// Lifecycle phase of each mutating action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ActionPhases {
    swap_a_to_b: ActionPhase,
    swap_b_to_a: ActionPhase,
    add_liquidity: ActionPhase,
}

impl ActionPhases {
    fn get(&self, kind: ActionKind) -> ActionPhase {
        match kind {
            ActionKind::SwapAToB => self.swap_a_to_b,
            ActionKind::SwapBToA => self.swap_b_to_a,
            ActionKind::AddLiquidity => self.add_liquidity,
        }
    }

    fn slot(&mut self, kind: ActionKind) -> &mut ActionPhase {
        match kind {
            ActionKind::SwapAToB => &mut self.swap_a_to_b,
            ActionKind::SwapBToA => &mut self.swap_b_to_a,
            ActionKind::AddLiquidity => &mut self.add_liquidity,
        }
    }
}

/// Everything the presentation layer renders.
#[derive(Debug, Clone)]
pub struct ViewState {
    session: Option<WalletSession>,
    balances: Balances,
    quote: Quote,
    swap_a_input: String,
    swap_b_input: String,
    liquidity_a: String,
    liquidity_b: String,
    estimate_b_out: String,
    estimate_a_out: String,
    phases: ActionPhases,
    status: Option<StatusMessage>,
}

impl ViewState {
    /// Empty, disconnected state with placeholder estimates.
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self {
            session: None,
            balances: Balances::default(),
            quote: Quote::default(),
            swap_a_input: String::new(),
            swap_b_input: String::new(),
            liquidity_a: String::new(),
            liquidity_b: String::new(),
            estimate_b_out: String::new(),
            estimate_a_out: String::new(),
            phases: ActionPhases::default(),
            status: None,
        };
        state.recompute_estimates();
        state
    }

    #[must_use]
    pub fn session(&self) -> Option<&WalletSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    pub(crate) fn bind_session(&mut self, session: WalletSession) {
        self.session = Some(session);
    }

    /// Drop the session together with everything read through it.
    pub(crate) fn clear_session(&mut self) {
        self.session = None;
        self.balances = Balances::default();
        self.set_quote(Quote::default());
    }

    #[must_use]
    pub fn balances(&self) -> &Balances {
        &self.balances
    }

    pub(crate) fn set_balances(&mut self, balances: Balances) {
        self.balances = balances;
    }

    #[must_use]
    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    /// Replace the quote and recompute both estimates.
    pub fn set_quote(&mut self, quote: Quote) {
        self.quote = quote;
        self.recompute_estimates();
    }

    #[must_use]
    pub fn input(&self, field: InputField) -> &str {
        match field {
            InputField::SwapAToB => &self.swap_a_input,
            InputField::SwapBToA => &self.swap_b_input,
            InputField::LiquidityA => &self.liquidity_a,
            InputField::LiquidityB => &self.liquidity_b,
        }
    }

    /// Update an input field, recomputing the estimate that depends on it.
    pub fn set_input(&mut self, field: InputField, value: impl Into<String>) {
        let value = value.into();
        match field {
            InputField::SwapAToB => {
                self.swap_a_input = value;
                self.recompute_estimate(SwapDirection::AToB);
            }
            InputField::SwapBToA => {
                self.swap_b_input = value;
                self.recompute_estimate(SwapDirection::BToA);
            }
            InputField::LiquidityA => self.liquidity_a = value,
            InputField::LiquidityB => self.liquidity_b = value,
        }
    }

    pub fn clear_input(&mut self, field: InputField) {
        self.set_input(field, String::new());
    }

    /// Advisory output of swapping the current input in `direction`.
    #[must_use]
    pub fn estimate(&self, direction: SwapDirection) -> &str {
        match direction {
            SwapDirection::AToB => &self.estimate_b_out,
            SwapDirection::BToA => &self.estimate_a_out,
        }
    }

    #[must_use]
    pub fn phase(&self, kind: ActionKind) -> ActionPhase {
        self.phases.get(kind)
    }

    /// Whether `kind` has a transaction round-trip outstanding.
    #[must_use]
    pub fn is_pending(&self, kind: ActionKind) -> bool {
        self.phases.get(kind).is_busy()
    }

    pub(crate) fn set_phase(&mut self, kind: ActionKind, phase: ActionPhase) {
        *self.phases.slot(kind) = phase;
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, message: StatusMessage) {
        self.status = Some(message);
    }

    pub fn dismiss_status(&mut self) {
        self.status = None;
    }

    fn recompute_estimates(&mut self) {
        for direction in SwapDirection::ALL {
            self.recompute_estimate(direction);
        }
    }

    fn recompute_estimate(&mut self, direction: SwapDirection) {
        let rate = self.quote.rate(direction);
        match direction {
            SwapDirection::AToB => self.estimate_b_out = estimate(&self.swap_a_input, rate),
            SwapDirection::BToA => self.estimate_a_out = estimate(&self.swap_b_input, rate),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
