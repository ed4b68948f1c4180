//! Port definitions (hexagonal boundaries).
//!
//! Outbound ports are the external collaborators the application drives:
//! the contracts, the wallet and the wallet's confirmation prompt.

pub mod outbound;

pub use outbound::gateway::ContractGateway;
pub use outbound::prompt::{AutoApprove, TransactionPrompt, TransactionRequest};
pub use outbound::wallet::{WalletProvider, WalletSession};
