//! Application layer - orchestration, allowance handling, and view state.

mod allowance;
mod orchestrator;
mod state;

pub use allowance::{AllowanceManager, AllowanceOutcome};
pub use orchestrator::{ActionOutcome, Orchestrator};
pub use state::{Balances, InputField, StatusKind, StatusMessage, ViewState};
