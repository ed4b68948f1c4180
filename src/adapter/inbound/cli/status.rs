//! Handlers for the read-only `status` and `quote` commands.

use serde_json::json;

use super::command::SwapArgs;
use super::context::Context;
use super::{output, render};
use crate::app::{InputField, ViewState};
use crate::domain::validate_positive;
use crate::error::Result;

/// Execute the status command.
pub async fn execute(ctx: &Context) -> Result<()> {
    let mut state = ViewState::new();
    ctx.connect(&mut state).await?;

    output::header(env!("CARGO_PKG_VERSION"));
    render::view(&state, ctx.orchestrator.pair());
    Ok(())
}

/// Execute the quote command.
///
/// Prices are read fresh; the estimate is advisory and nothing is sent.
pub async fn quote(ctx: &Context, args: &SwapArgs) -> Result<()> {
    let amount = validate_positive(&args.amount)?;
    let direction = args.direction();

    let mut state = ViewState::new();
    ctx.connect(&mut state).await?;
    state.set_input(InputField::swap(direction), amount);

    let pair = ctx.orchestrator.pair();
    let estimate = state.estimate(direction);
    if output::is_json() {
        output::json_output(json!({
            "command": "quote",
            "direction": direction,
            "amount_in": amount,
            "token_in": pair.input(direction).symbol,
            "estimate_out": estimate,
            "token_out": pair.output(direction).symbol,
            "rate": state.quote().rate(direction),
        }));
        return Ok(());
    }

    output::field(
        "Estimate",
        format!(
            "{amount} {} → ~{} {}",
            pair.input(direction),
            output::highlight(estimate),
            pair.output(direction)
        ),
    );
    output::note("Estimate only; the pool decides the final amount.");
    Ok(())
}
