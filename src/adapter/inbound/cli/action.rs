//! Handlers for the `swap` and `liquidity` commands.

use indicatif::ProgressBar;
use serde_json::json;

use super::command::{LiquidityArgs, SwapArgs};
use super::context::Context;
use super::output;
use crate::app::{ActionOutcome, InputField, ViewState};
use crate::domain::SwapDirection;
use crate::error::Result;

/// Execute the swap command.
pub async fn swap(ctx: &Context, args: &SwapArgs) -> Result<()> {
    let direction = args.direction();
    let mut state = ViewState::new();
    ctx.connect(&mut state).await?;

    state.set_input(InputField::swap(direction), args.amount.as_str());
    let pb = action_spinner(ctx, "Swapping");
    let outcome = ctx.orchestrator.swap(&mut state, direction).await;
    finish_spinner(pb);
    report(&state, outcome)
}

/// Execute the liquidity command.
pub async fn liquidity(ctx: &Context, args: &LiquidityArgs) -> Result<()> {
    let mut state = ViewState::new();
    ctx.connect(&mut state).await?;

    state.set_input(InputField::LiquidityA, args.amount_a.as_str());
    state.set_input(InputField::LiquidityB, args.amount_b.as_str());
    let pb = action_spinner(ctx, "Adding liquidity");
    let outcome = ctx.orchestrator.add_liquidity(&mut state).await;
    finish_spinner(pb);
    report(&state, outcome)
}

/// Spinner for a running action; none when terminal prompts will interrupt it.
pub(super) fn action_spinner(ctx: &Context, label: &str) -> Option<ProgressBar> {
    (!ctx.interactive).then(|| output::spinner(label))
}

pub(super) fn finish_spinner(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        output::spinner_clear(&pb);
    }
}

pub(super) fn report(state: &ViewState, outcome: Result<ActionOutcome>) -> Result<()> {
    let confirmation = match outcome? {
        ActionOutcome::Confirmed(confirmation) => confirmation,
        ActionOutcome::Ignored => return Ok(()),
    };

    if output::is_json() {
        output::json_output(json!({
            "status": state.status(),
            "tx_hash": confirmation.tx_hash,
            "block_number": confirmation.block_number,
            "estimates": {
                "a_to_b": state.estimate(SwapDirection::AToB),
                "b_to_a": state.estimate(SwapDirection::BToA),
            },
        }));
        return Ok(());
    }

    if let Some(status) = state.status() {
        output::status(status);
    }
    output::field("Transaction", output::muted(&confirmation.tx_hash));
    if let Some(block) = confirmation.block_number {
        output::field("Block", block);
    }
    Ok(())
}
