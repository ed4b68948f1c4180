//! Rendering of the view state.

use serde_json::{json, Value};

use super::output;
use crate::app::{InputField, ViewState};
use crate::domain::{ActionKind, SwapDirection, TokenPair, PLACEHOLDER};

/// Machine-readable snapshot of everything the view shows.
#[must_use]
pub fn snapshot(state: &ViewState, pair: &TokenPair) -> Value {
    let balances = state.balances();
    let quote = state.quote();
    json!({
        "account": state.session().map(|s| s.address.to_string()),
        "balances": {
            pair.token_a.symbol.as_str(): balances.token_a,
            pair.token_b.symbol.as_str(): balances.token_b,
        },
        "prices": {
            "a_to_b": quote.rate(SwapDirection::AToB),
            "b_to_a": quote.rate(SwapDirection::BToA),
        },
        "inputs": {
            "swap_a_to_b": state.input(InputField::SwapAToB),
            "swap_b_to_a": state.input(InputField::SwapBToA),
            "liquidity_a": state.input(InputField::LiquidityA),
            "liquidity_b": state.input(InputField::LiquidityB),
        },
        "estimates": {
            "a_to_b": state.estimate(SwapDirection::AToB),
            "b_to_a": state.estimate(SwapDirection::BToA),
        },
        "pending": ActionKind::ALL
            .iter()
            .filter(|kind| state.is_pending(**kind))
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        "status": state.status(),
    })
}

/// Print the account, balances and prices.
pub fn view(state: &ViewState, pair: &TokenPair) {
    if output::is_json() {
        output::json_output(snapshot(state, pair));
        return;
    }

    output::section("Account");
    match state.session() {
        Some(session) => output::field("Address", output::highlight(session.address)),
        None => output::field("Address", output::muted("not connected")),
    }

    output::section("Balances");
    let balances = state.balances();
    output::field(
        &pair.token_a.symbol,
        balances.token_a.as_deref().unwrap_or(PLACEHOLDER),
    );
    output::field(
        &pair.token_b.symbol,
        balances.token_b.as_deref().unwrap_or(PLACEHOLDER),
    );

    output::section("Prices");
    for direction in SwapDirection::ALL {
        output::field(&direction.to_string(), price_line(state, pair, direction));
    }
}

/// Print the filled-in inputs with their estimates.
pub fn inputs(state: &ViewState, pair: &TokenPair) {
    if output::is_json() {
        return;
    }

    output::section("Inputs");
    for direction in SwapDirection::ALL {
        let input = state.input(InputField::swap(direction));
        if input.is_empty() {
            continue;
        }
        output::field(
            &direction.action().to_string(),
            format!(
                "{input} {} → ~{} {}",
                pair.input(direction),
                state.estimate(direction),
                pair.output(direction)
            ),
        );
    }
    let liquidity_a = state.input(InputField::LiquidityA);
    let liquidity_b = state.input(InputField::LiquidityB);
    if !liquidity_a.is_empty() || !liquidity_b.is_empty() {
        output::field(
            &ActionKind::AddLiquidity.to_string(),
            format!(
                "{liquidity_a} {} + {liquidity_b} {}",
                pair.token_a, pair.token_b
            ),
        );
    }
}

fn price_line(state: &ViewState, pair: &TokenPair, direction: SwapDirection) -> String {
    let rate = state.quote().rate(direction).unwrap_or(PLACEHOLDER);
    format!(
        "1 {} = {rate} {}",
        pair.input(direction),
        pair.output(direction)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Quote;
    use crate::testkit::domain::token_pair;

    #[test]
    fn snapshot_of_disconnected_state() {
        let state = ViewState::new();
        let value = snapshot(&state, &token_pair());

        assert!(value["account"].is_null());
        assert!(value["balances"]["CTK"].is_null());
        assert_eq!(value["estimates"]["a_to_b"], PLACEHOLDER);
        assert_eq!(value["pending"], json!([]));
    }

    #[test]
    fn snapshot_carries_estimates() {
        let mut state = ViewState::new();
        state.set_quote(Quote::new("2.5", "0.4"));
        state.set_input(InputField::SwapAToB, "10");

        let value = snapshot(&state, &token_pair());

        assert_eq!(value["prices"]["a_to_b"], "2.5");
        assert_eq!(value["inputs"]["swap_a_to_b"], "10");
        assert_eq!(value["estimates"]["a_to_b"], "25.000000");
    }

    #[test]
    fn price_line_uses_placeholder_without_quote() {
        let line = price_line(&ViewState::new(), &token_pair(), SwapDirection::BToA);
        assert_eq!(line, "1 CTK2 = ? CTK");
    }
}
