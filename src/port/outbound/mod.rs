//! Outbound ports.

pub mod gateway;
pub mod prompt;
pub mod wallet;
