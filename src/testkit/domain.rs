//! Canonical fixtures: addresses, token pair and a connected view state.

use std::sync::Arc;

use alloy_primitives::{address, Address};

use super::gateway::MockGateway;
use crate::app::ViewState;
use crate::domain::{Token, TokenPair};
use crate::port::WalletSession;

/// Pool contract used by every fixture.
pub const POOL: Address = address!("0x5050505050505050505050505050505050505050");

/// Token A contract.
pub const TOKEN_A: Address = address!("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");

/// Token B contract.
pub const TOKEN_B: Address = address!("0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");

/// Connected account.
pub const OWNER: Address = address!("0x0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e");

/// The `CTK`/`CTK2` pair at the fixture addresses.
pub fn token_pair() -> TokenPair {
    TokenPair {
        pool: POOL,
        token_a: Token::new("CTK", TOKEN_A),
        token_b: Token::new("CTK2", TOKEN_B),
    }
}

/// A session for [`OWNER`] over `gateway`.
pub fn session(gateway: Arc<MockGateway>) -> WalletSession {
    WalletSession::new(OWNER, gateway)
}

/// A fresh view state with a session already bound.
pub fn connected_state(gateway: Arc<MockGateway>) -> ViewState {
    let mut state = ViewState::new();
    state.bind_session(session(gateway));
    state
}
