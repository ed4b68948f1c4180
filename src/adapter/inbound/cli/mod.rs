//! Command-line front-end.

pub mod action;
pub mod command;
pub mod context;
pub mod output;
pub mod prompt;
pub mod render;
pub mod shell;
pub mod status;

use command::{Cli, ColorChoice, Commands};
use context::Context;

use crate::config::Config;
use crate::error::Result;

/// Apply global flags, load configuration and run the chosen command.
///
/// # Errors
///
/// Returns the configuration or command failure; the caller maps it to the
/// exit status.
pub async fn run(cli: &Cli) -> Result<()> {
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    let config = Config::load_or_default(cli.config.as_deref())?;
    config.init_logging(cli.verbose);
    let ctx = Context::new(&config, cli.yes)?;

    match &cli.command {
        Commands::Status => status::execute(&ctx).await,
        Commands::Quote(args) => status::quote(&ctx, args).await,
        Commands::Swap(args) => action::swap(&ctx, args).await,
        Commands::Liquidity(args) => action::liquidity(&ctx, args).await,
        Commands::Shell => shell::execute(&ctx).await,
    }
}
