//! Command-line interface definitions.
//!
//! Defines the CLI structure for swapdesk using `clap`: one-shot commands
//! for reading balances and running a single action, plus an interactive
//! shell that keeps one view state across commands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::SwapDirection;

/// Terminal front-end for a two-token swap pool
#[derive(Parser, Debug)]
#[command(name = "swapdesk")]
#[command(version, about)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file [default: ~/.swapdesk/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Approve every transaction prompt without asking
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect and show the account, balances and pool prices
    Status,

    /// Estimate the output of a swap without sending anything
    Quote(SwapArgs),

    /// Swap tokens through the pool
    Swap(SwapArgs),

    /// Deposit both tokens into the pool
    Liquidity(LiquidityArgs),

    /// Interactive session
    Shell,
}

/// Arguments shared by `quote` and `swap`.
#[derive(Args, Debug)]
pub struct SwapArgs {
    /// Amount of the input token, as a decimal
    #[arg(allow_negative_numbers = true)]
    pub amount: String,

    /// Swap token B for token A instead of A for B
    #[arg(short, long)]
    pub reverse: bool,
}

impl SwapArgs {
    #[must_use]
    pub fn direction(&self) -> SwapDirection {
        if self.reverse {
            SwapDirection::BToA
        } else {
            SwapDirection::AToB
        }
    }
}

/// Arguments for `liquidity`.
#[derive(Args, Debug)]
pub struct LiquidityArgs {
    /// Amount of token A to deposit
    #[arg(allow_negative_numbers = true)]
    pub amount_a: String,

    /// Amount of token B to deposit
    #[arg(allow_negative_numbers = true)]
    pub amount_b: String,
}
