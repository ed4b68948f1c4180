//! Interactive session over a single view state.
//!
//! Each line is one command. Inputs persist between commands, so
//! `set swap 10` followed by `show` displays the live estimate, and `swap`
//! without an amount submits whatever the field holds.

use std::io::Write;
use std::ops::ControlFlow;

use tokio::io::{AsyncBufReadExt, BufReader};

use super::action::{action_spinner, finish_spinner};
use super::context::Context;
use super::{output, render};
use crate::app::{ActionOutcome, InputField, ViewState};
use crate::domain::SwapDirection;
use crate::error::Result;

const HELP: &str = "\
swap [amount]          swap token A for token B
reverse [amount]       swap token B for token A
add [amount-a amount-b] add liquidity
set <field> <amount>   edit a field: swap, reverse, a, b
refresh                re-read balances and prices
connect | disconnect   bind or drop the wallet
dismiss                clear the status message
show                   print balances, prices and inputs
help                   this text
quit                   leave the shell";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Swap(SwapDirection, Option<String>),
    AddLiquidity(Option<(String, String)>),
    Set(InputField, String),
    Refresh,
    Connect,
    Disconnect,
    Dismiss,
    Show,
    Help,
    Quit,
}

/// Parse one line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns a usage message for unknown commands or wrong arguments.
pub fn parse(line: &str) -> std::result::Result<Option<ShellCommand>, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = words.split_first() else {
        return Ok(None);
    };

    let command = match (head, args) {
        ("swap", []) => ShellCommand::Swap(SwapDirection::AToB, None),
        ("swap", [amount]) => ShellCommand::Swap(SwapDirection::AToB, Some((*amount).into())),
        ("reverse", []) => ShellCommand::Swap(SwapDirection::BToA, None),
        ("reverse", [amount]) => ShellCommand::Swap(SwapDirection::BToA, Some((*amount).into())),
        ("add", []) => ShellCommand::AddLiquidity(None),
        ("add", [a, b]) => ShellCommand::AddLiquidity(Some(((*a).into(), (*b).into()))),
        ("set", [field, value]) => ShellCommand::Set(parse_field(field)?, (*value).into()),
        ("set", [field]) => ShellCommand::Set(parse_field(field)?, String::new()),
        ("refresh", []) => ShellCommand::Refresh,
        ("connect", []) => ShellCommand::Connect,
        ("disconnect", []) => ShellCommand::Disconnect,
        ("dismiss", []) => ShellCommand::Dismiss,
        ("show", []) => ShellCommand::Show,
        ("help" | "?", []) => ShellCommand::Help,
        ("quit" | "exit", []) => ShellCommand::Quit,
        (
            "swap" | "reverse" | "add" | "set" | "refresh" | "connect" | "disconnect" | "dismiss"
            | "show" | "help" | "quit" | "exit",
            _,
        ) => return Err(format!("wrong arguments for '{head}', try 'help'")),
        _ => return Err(format!("unknown command '{head}', try 'help'")),
    };
    Ok(Some(command))
}

fn parse_field(name: &str) -> std::result::Result<InputField, String> {
    match name {
        "swap" => Ok(InputField::SwapAToB),
        "reverse" => Ok(InputField::SwapBToA),
        "a" => Ok(InputField::LiquidityA),
        "b" => Ok(InputField::LiquidityB),
        other => Err(format!("unknown field '{other}', expected swap, reverse, a or b")),
    }
}

/// Execute the shell command.
pub async fn execute(ctx: &Context) -> Result<()> {
    let mut state = ViewState::new();
    if ctx.connect(&mut state).await.is_err() {
        show_status(&state);
        output::hint("continuing disconnected; use 'connect' to retry");
    }
    output::hint("type 'help' for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print_prompt();
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match parse(&line) {
            Ok(Some(command)) => {
                if apply(ctx, &mut state, command).await.is_break() {
                    break;
                }
            }
            Ok(None) => {}
            Err(usage) => output::error(&usage),
        }
    }
    Ok(())
}

async fn apply(ctx: &Context, state: &mut ViewState, command: ShellCommand) -> ControlFlow<()> {
    let orchestrator = &ctx.orchestrator;
    let pair = orchestrator.pair();

    match command {
        ShellCommand::Swap(direction, amount) => {
            if let Some(amount) = amount {
                state.set_input(InputField::swap(direction), amount);
            }
            let pb = action_spinner(ctx, "Swapping");
            let outcome = orchestrator.swap(state, direction).await;
            finish_spinner(pb);
            show_outcome(state, outcome);
        }
        ShellCommand::AddLiquidity(amounts) => {
            if let Some((a, b)) = amounts {
                state.set_input(InputField::LiquidityA, a);
                state.set_input(InputField::LiquidityB, b);
            }
            let pb = action_spinner(ctx, "Adding liquidity");
            let outcome = orchestrator.add_liquidity(state).await;
            finish_spinner(pb);
            show_outcome(state, outcome);
        }
        ShellCommand::Set(field, value) => {
            state.set_input(field, value);
            render::inputs(state, pair);
        }
        ShellCommand::Refresh => match orchestrator.refresh(state).await {
            Ok(()) => render::view(state, pair),
            Err(e) => output::error(&format!("Refresh failed: {e}")),
        },
        ShellCommand::Connect => {
            if ctx.connect(state).await.is_err() {
                show_status(state);
            }
        }
        ShellCommand::Disconnect => {
            orchestrator.disconnect(state);
            show_status(state);
        }
        ShellCommand::Dismiss => state.dismiss_status(),
        ShellCommand::Show => {
            render::view(state, pair);
            render::inputs(state, pair);
            show_status(state);
        }
        ShellCommand::Help => output::note(HELP),
        ShellCommand::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}

fn show_outcome(state: &ViewState, outcome: Result<ActionOutcome>) {
    match outcome {
        Ok(ActionOutcome::Confirmed(confirmation)) => {
            show_status(state);
            output::field("Transaction", output::muted(&confirmation.tx_hash));
        }
        Ok(ActionOutcome::Ignored) => output::note("already pending"),
        // The orchestrator recorded the failure in the status message.
        Err(_) => show_status(state),
    }
}

fn show_status(state: &ViewState) {
    if let Some(status) = state.status() {
        output::status(status);
    }
}

fn print_prompt() {
    if output::is_json() || output::is_quiet() {
        return;
    }
    print!("swapdesk> ");
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn swap_with_and_without_amount() {
        assert_eq!(
            parse("swap 10"),
            Ok(Some(ShellCommand::Swap(SwapDirection::AToB, Some("10".into()))))
        );
        assert_eq!(
            parse("reverse"),
            Ok(Some(ShellCommand::Swap(SwapDirection::BToA, None)))
        );
    }

    #[test]
    fn add_needs_both_amounts_or_none() {
        assert_eq!(
            parse("add 1 2"),
            Ok(Some(ShellCommand::AddLiquidity(Some(("1".into(), "2".into())))))
        );
        assert_eq!(parse("add"), Ok(Some(ShellCommand::AddLiquidity(None))));
        assert!(parse("add 1").is_err());
    }

    #[test]
    fn set_names_fields() {
        assert_eq!(
            parse("set b 4.2"),
            Ok(Some(ShellCommand::Set(InputField::LiquidityB, "4.2".into())))
        );
        assert_eq!(
            parse("set reverse"),
            Ok(Some(ShellCommand::Set(InputField::SwapBToA, String::new())))
        );
        assert!(parse("set c 1").unwrap_err().contains("unknown field"));
    }

    #[test]
    fn unknown_command_is_reported() {
        assert!(parse("withdraw 5").unwrap_err().contains("unknown command"));
        assert!(parse("quit now").unwrap_err().contains("wrong arguments"));
        assert_eq!(parse("exit"), Ok(Some(ShellCommand::Quit)));
    }
}
