use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::U256;

use swapdesk::app::{ActionOutcome, InputField, Orchestrator, StatusKind, ViewState};
use swapdesk::domain::{ActionKind, ActionPhase, SwapDirection, PLACEHOLDER};
use swapdesk::error::Error;
use swapdesk::port::{AutoApprove, TransactionPrompt, TransactionRequest};
use swapdesk::testkit::domain::{connected_state, token_pair, TOKEN_A, TOKEN_B};
use swapdesk::testkit::gateway::{Call, CallKind, Failure, MockGateway};
use swapdesk::testkit::wallet::{MockWallet, ScriptedPrompt};

fn orchestrator() -> Orchestrator {
    Orchestrator::new(token_pair(), Arc::new(AutoApprove))
}

fn orchestrator_with(prompt: Arc<dyn TransactionPrompt>) -> Orchestrator {
    Orchestrator::new(token_pair(), prompt)
}

fn units(whole: u64, decimals: u8) -> U256 {
    U256::from(whole) * U256::from(10u64).pow(U256::from(decimals))
}

/// Reads made by one full refresh, in order.
fn refresh_calls() -> Vec<Call> {
    vec![
        Call::Decimals(TOKEN_A),
        Call::Balance(TOKEN_A),
        Call::Decimals(TOKEN_B),
        Call::Balance(TOKEN_B),
        Call::Price(SwapDirection::AToB),
        Call::Price(SwapDirection::BToA),
    ]
}

fn status_text(state: &ViewState) -> &str {
    state.status().map(|s| s.text.as_str()).unwrap_or_default()
}

#[tokio::test]
async fn invalid_swap_inputs_make_no_gateway_calls() {
    for input in ["", "   ", "abc", "-1", "0", "0.000", "1e3", "1.2.3"] {
        let gateway = Arc::new(MockGateway::new());
        let orchestrator = orchestrator();
        let mut state = connected_state(gateway.clone());
        state.set_input(InputField::SwapAToB, input);

        let err = orchestrator
            .swap(&mut state, SwapDirection::AToB)
            .await
            .unwrap_err();

        assert!(
            matches!(err, Error::InvalidAmount { .. }),
            "input {input:?} gave {err}"
        );
        assert!(gateway.calls().is_empty(), "input {input:?} reached the gateway");
        assert!(status_text(&state).starts_with("Swap failed: invalid amount"));
        assert_eq!(state.phase(ActionKind::SwapAToB), ActionPhase::Idle);
    }
}

#[tokio::test]
async fn actions_without_wallet_fail_with_no_wallet() {
    let orchestrator = orchestrator();
    let mut state = ViewState::new();
    state.set_input(InputField::SwapAToB, "10");
    state.set_input(InputField::LiquidityA, "1");
    state.set_input(InputField::LiquidityB, "1");

    let err = orchestrator
        .swap(&mut state, SwapDirection::AToB)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NoWallet));
    assert_eq!(status_text(&state), "Swap A→B failed: no wallet connected");

    let err = orchestrator.add_liquidity(&mut state).await.unwrap_err();
    assert!(matches!(err, Error::NoWallet));
    assert_eq!(status_text(&state), "Add liquidity failed: no wallet connected");

    let err = orchestrator.refresh(&mut state).await.unwrap_err();
    assert!(matches!(err, Error::NoWallet));

    assert_eq!(state.input(InputField::SwapAToB), "10");
    assert!(!orchestrator.is_busy());
}

#[tokio::test]
async fn zero_liquidity_is_rejected_before_allowance_checks() {
    let gateway = Arc::new(MockGateway::new());
    let orchestrator = orchestrator();
    let mut state = connected_state(gateway.clone());
    state.set_input(InputField::LiquidityA, "5");
    state.set_input(InputField::LiquidityB, "0");

    let err = orchestrator.add_liquidity(&mut state).await.unwrap_err();

    assert!(matches!(err, Error::InvalidAmount { ref input, .. } if input == "0"));
    assert!(gateway.calls().is_empty());
    assert_eq!(state.input(InputField::LiquidityA), "5");
}

#[tokio::test]
async fn swap_approves_then_swaps_then_refreshes_once() {
    let gateway = Arc::new(
        MockGateway::new()
            .with_balance(TOKEN_A, units(90, 18))
            .with_balance(TOKEN_B, units(25, 18)),
    );
    let orchestrator = orchestrator();
    let mut state = connected_state(gateway.clone());
    state.set_input(InputField::SwapAToB, "10");

    let outcome = orchestrator
        .swap(&mut state, SwapDirection::AToB)
        .await
        .unwrap();

    let amount_in = units(10, 18);
    let mut expected = vec![
        Call::Decimals(TOKEN_A),
        Call::Allowance(TOKEN_A),
        Call::Approve {
            token: TOKEN_A,
            amount: amount_in,
        },
        Call::Swap {
            direction: SwapDirection::AToB,
            amount_in,
        },
    ];
    expected.extend(refresh_calls());
    assert_eq!(gateway.calls(), expected);

    assert!(matches!(outcome, ActionOutcome::Confirmed(_)));
    assert_eq!(state.input(InputField::SwapAToB), "");
    assert_eq!(state.estimate(SwapDirection::AToB), PLACEHOLDER);
    assert_eq!(state.balances().token_a.as_deref(), Some("90.0"));
    assert_eq!(state.balances().token_b.as_deref(), Some("25.0"));
    assert_eq!(state.quote().rate(SwapDirection::AToB), Some("2.5"));

    let status = state.status().unwrap();
    assert_eq!(status.kind, StatusKind::Success);
    assert_eq!(status.text, "Swapped 10 CTK → CTK2");
    assert_eq!(state.phase(ActionKind::SwapAToB), ActionPhase::Idle);
    assert!(!orchestrator.is_busy());
}

#[tokio::test]
async fn reverse_swap_uses_token_b_precision_and_allowance() {
    let gateway = Arc::new(
        MockGateway::new()
            .with_decimals(TOKEN_B, 6)
            .with_allowance(TOKEN_B, U256::MAX),
    );
    let orchestrator = orchestrator();
    let mut state = connected_state(gateway.clone());
    state.set_input(InputField::SwapBToA, "2.5");

    orchestrator
        .swap(&mut state, SwapDirection::BToA)
        .await
        .unwrap();

    assert_eq!(
        gateway.writes(),
        vec![Call::Swap {
            direction: SwapDirection::BToA,
            amount_in: U256::from(2_500_000u64),
        }]
    );
    assert_eq!(gateway.calls()[0], Call::Decimals(TOKEN_B));
}

#[tokio::test]
async fn add_liquidity_approves_token_a_before_token_b() {
    let gateway = Arc::new(MockGateway::new().with_decimals(TOKEN_B, 6));
    let orchestrator = orchestrator();
    let mut state = connected_state(gateway.clone());
    state.set_input(InputField::LiquidityA, "1");
    state.set_input(InputField::LiquidityB, "2");

    orchestrator.add_liquidity(&mut state).await.unwrap();

    let amount_a = units(1, 18);
    let amount_b = units(2, 6);
    let mut expected = vec![
        Call::Decimals(TOKEN_A),
        Call::Decimals(TOKEN_B),
        Call::Allowance(TOKEN_A),
        Call::Approve {
            token: TOKEN_A,
            amount: amount_a,
        },
        Call::Allowance(TOKEN_B),
        Call::Approve {
            token: TOKEN_B,
            amount: amount_b,
        },
        Call::AddLiquidity { amount_a, amount_b },
    ];
    expected.extend(refresh_calls());
    assert_eq!(gateway.calls(), expected);

    assert_eq!(state.input(InputField::LiquidityA), "");
    assert_eq!(state.input(InputField::LiquidityB), "");
    assert_eq!(
        status_text(&state),
        "Added 1 CTK and 2 CTK2 to the pool"
    );
}

#[tokio::test]
async fn failed_token_a_approval_skips_token_b() {
    let gateway = Arc::new(MockGateway::new().failing(CallKind::Approve, Failure::Rejected));
    let orchestrator = orchestrator();
    let mut state = connected_state(gateway.clone());
    state.set_input(InputField::LiquidityA, "1");
    state.set_input(InputField::LiquidityB, "1");

    let err = orchestrator.add_liquidity(&mut state).await.unwrap_err();

    assert!(matches!(err, Error::UserRejected));
    assert!(!gateway.calls().contains(&Call::Allowance(TOKEN_B)));
    assert_eq!(gateway.writes().len(), 1);
    assert_eq!(state.input(InputField::LiquidityB), "1");
    assert_eq!(state.phase(ActionKind::AddLiquidity), ActionPhase::Idle);
}

#[tokio::test]
async fn declined_swap_prompt_sends_nothing() {
    let gateway = Arc::new(MockGateway::new().with_allowance(TOKEN_A, U256::MAX));
    let prompt = Arc::new(ScriptedPrompt::declining());
    let orchestrator = orchestrator_with(prompt.clone());
    let mut state = connected_state(gateway.clone());
    state.set_input(InputField::SwapAToB, "3");

    let err = orchestrator
        .swap(&mut state, SwapDirection::AToB)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UserRejected));
    assert!(gateway.writes().is_empty());
    assert_eq!(
        prompt.requests(),
        vec![TransactionRequest::Swap {
            direction: SwapDirection::AToB,
            amount_in: units(3, 18),
        }]
    );
    assert_eq!(status_text(&state), "Swap failed: transaction rejected by user");
    assert_eq!(state.input(InputField::SwapAToB), "3");
}

#[tokio::test]
async fn reverted_swap_keeps_input_and_skips_refresh() {
    let gateway = Arc::new(
        MockGateway::new()
            .with_allowance(TOKEN_A, U256::MAX)
            .failing(CallKind::Swap, Failure::Revert),
    );
    let orchestrator = orchestrator();
    let mut state = connected_state(gateway.clone());
    state.set_input(InputField::SwapAToB, "1");

    let err = orchestrator
        .swap(&mut state, SwapDirection::AToB)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ContractRevert(_)));
    assert_eq!(state.input(InputField::SwapAToB), "1");
    assert!(!gateway.calls().iter().any(|c| matches!(c, Call::Balance(_))));
    assert_eq!(state.status().unwrap().kind, StatusKind::Error);
    assert!(!orchestrator.is_busy());
}

#[tokio::test]
async fn failed_refresh_after_confirmation_keeps_success() {
    let gateway = Arc::new(
        MockGateway::new()
            .with_allowance(TOKEN_A, U256::MAX)
            .failing(CallKind::Price, Failure::Network),
    );
    let orchestrator = orchestrator();
    let mut state = connected_state(gateway.clone());
    state.set_input(InputField::SwapAToB, "1");

    let outcome = orchestrator
        .swap(&mut state, SwapDirection::AToB)
        .await
        .unwrap();

    assert!(matches!(outcome, ActionOutcome::Confirmed(_)));
    assert_eq!(state.status().unwrap().kind, StatusKind::Success);
    assert_eq!(state.input(InputField::SwapAToB), "");
}

#[tokio::test]
async fn overlapping_action_is_rejected_while_a_transaction_is_pending() {
    let (gateway, gate) = MockGateway::new()
        .with_allowance(TOKEN_A, U256::MAX)
        .with_allowance(TOKEN_B, U256::MAX)
        .gated(CallKind::Swap);
    let gateway = Arc::new(gateway);
    let orchestrator = orchestrator();

    let mut first = connected_state(gateway.clone());
    first.set_input(InputField::SwapAToB, "1");
    let mut second = connected_state(gateway.clone());
    second.set_input(InputField::LiquidityA, "1");
    second.set_input(InputField::LiquidityB, "1");

    let swap = orchestrator.swap(&mut first, SwapDirection::AToB);
    tokio::pin!(swap);
    // Drive the swap until it is waiting on confirmation.
    assert!(tokio::time::timeout(Duration::from_millis(50), &mut swap)
        .await
        .is_err());
    assert!(orchestrator.is_busy());

    let err = orchestrator.add_liquidity(&mut second).await.unwrap_err();
    assert!(matches!(err, Error::ActionInProgress(ActionKind::AddLiquidity)));
    assert_eq!(
        status_text(&second),
        "add liquidity rejected: another transaction is still pending"
    );
    assert_eq!(second.phase(ActionKind::AddLiquidity), ActionPhase::Idle);

    gate.notify_one();
    let outcome = swap.await.unwrap();
    assert!(matches!(outcome, ActionOutcome::Confirmed(_)));
    assert!(!orchestrator.is_busy());
    assert!(!gateway
        .calls()
        .iter()
        .any(|c| matches!(c, Call::AddLiquidity { .. })));
}

#[tokio::test]
async fn connect_loads_balances_and_estimates_follow_prices() {
    let gateway = Arc::new(MockGateway::new().with_balance(TOKEN_A, units(7, 18)));
    let wallet = MockWallet::connected(gateway.clone());
    let orchestrator = orchestrator();
    let mut state = ViewState::new();

    orchestrator.connect(&mut state, &wallet).await.unwrap();
    assert!(state.is_connected());
    assert_eq!(gateway.calls(), refresh_calls());
    assert_eq!(state.balances().token_a.as_deref(), Some("7.0"));

    state.set_input(InputField::SwapAToB, "10");
    assert_eq!(state.estimate(SwapDirection::AToB), "25.000000");
    state.set_input(InputField::SwapBToA, "10");
    assert_eq!(state.estimate(SwapDirection::BToA), "4.000000");

    orchestrator.disconnect(&mut state);
    assert!(!state.is_connected());
    assert_eq!(state.balances().token_a, None);
    assert_eq!(state.estimate(SwapDirection::AToB), PLACEHOLDER);
}

#[tokio::test]
async fn connect_without_wallet_reports_no_wallet() {
    let wallet = MockWallet::unavailable();
    let orchestrator = orchestrator();
    let mut state = ViewState::new();

    let err = orchestrator.connect(&mut state, &wallet).await.unwrap_err();

    assert!(matches!(err, Error::NoWallet));
    assert!(!state.is_connected());
    assert_eq!(wallet.connect_count(), 1);
    assert_eq!(status_text(&state), "Connect failed: no wallet connected");
}
