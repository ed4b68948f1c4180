//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`gateway`]: [`MockGateway`](gateway::MockGateway): in-memory contracts
//!   with a call log, injectable failures and a gate for holding writes open.
//! - [`wallet`]: Mock wallet provider and scripted transaction prompt.
//! - [`domain`]: Canonical addresses, token pair and a connected view state.

pub mod domain;
pub mod gateway;
pub mod wallet;
