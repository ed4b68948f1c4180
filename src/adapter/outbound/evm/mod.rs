//! EVM adapter: contract gateway and local wallet over alloy.

mod error;
mod gateway;
mod wallet;

pub use gateway::EvmGateway;
pub use wallet::LocalWallet;
