//! Swapdesk - terminal front-end for a two-token swap pool.
//!
//! Connects a wallet, shows balances and pool prices, and drives swaps in
//! either direction and liquidity deposits against a pre-deployed pool
//! contract. Pricing and settlement happen on-chain; this crate validates
//! input, converts decimal amounts to token base units, makes sure the pool
//! is approved to move the tokens, and sequences the transactions.
//!
//! # Modules
//!
//! - [`config`] - TOML configuration, logging setup and key resolution
//! - [`domain`] - Tokens, amount validation, unit conversion and quotes
//! - [`error`] - Error types for the crate
//! - [`port`] - Contract gateway, wallet and transaction prompt traits
//! - [`app`] - View state, allowance manager and action orchestrator
//! - [`adapter`] - Alloy gateway, local wallet and the CLI (requires `evm`)
//!
//! # Features
//!
//! - `evm` (default) - alloy-backed gateway and wallet, and the CLI
//! - `testkit` - in-memory gateway, wallet and prompt for integration tests
//!
//! # Example
//!
//! ```
//! use swapdesk::domain::{to_base_units, to_decimal_string};
//!
//! let units = to_base_units("1.5", 18).unwrap();
//! assert_eq!(to_decimal_string(units, 18), "1.5");
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(feature = "evm")]
pub mod adapter;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
