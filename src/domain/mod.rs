//! Chain-agnostic types: tokens, amounts, quotes and transaction lifecycle.
//!
//! Nothing in here talks to the network. Amount handling works on decimal
//! strings and `U256` base units so no precision is lost between the user's
//! input and the contract call.

pub mod amount;
pub mod quote;
pub mod token;
pub mod transaction;
pub mod units;

pub use amount::validate_positive;
pub use quote::{estimate, Quote, PLACEHOLDER};
pub use token::{ActionKind, SwapDirection, Token, TokenPair};
pub use transaction::{ActionPhase, Confirmation};
pub use units::{to_base_units, to_decimal_string, FIXED_POINT_DECIMALS};
