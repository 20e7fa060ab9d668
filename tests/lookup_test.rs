//! Lookup pipeline against the in-memory client: resolution order, token
//! isolation, and error mapping.

mod common;

use alloy::primitives::U256;
use common::{addr, ether, MockCall, MockClient, USDC, USDT, VITALIK};
use walletlens::domain::error::{EMPTY_INPUT_MESSAGE, GENERIC_FAILURE_MESSAGE, INVALID_ADDRESS_MESSAGE};
use walletlens::domain::{format_balance, LookupError, TokenSpec};
use walletlens::services::{default_tokens, fetch_token, lookup, resolve};

fn stablecoins(client: MockClient) -> MockClient {
    client
        .with_token(USDT, "USDT", 6)
        .with_token(USDC, "USDC", 6)
        .with_token_balance(USDT, VITALIK, U256::from(1_234_567_890u64))
        .with_token_balance(USDC, VITALIK, U256::from(5_000_000u64))
}

#[tokio::test]
async fn test_ens_lookup_uses_typed_name() {
    let client = stablecoins(
        MockClient::new()
            .with_name("vitalik.eth", VITALIK)
            .with_balance(VITALIK, ether(3)),
    );

    let wallet = lookup(&client, &default_tokens(), "  vitalik.eth ").await.unwrap();

    assert_eq!(wallet.address, addr(VITALIK));
    assert_eq!(wallet.checksum_address(), VITALIK);
    assert_eq!(wallet.ens_name.as_deref(), Some("vitalik.eth"));
    assert_eq!(format_balance(&wallet.balance), "3.0000");

    let calls = client.calls();
    assert_eq!(calls[0], MockCall::ResolveName("vitalik.eth".into()));
    assert!(!calls.iter().any(|c| matches!(c, MockCall::LookupAddress(_))));
}

#[tokio::test]
async fn test_address_lookup_is_canonical_regardless_of_case() {
    let client = MockClient::new().with_reverse(VITALIK, "vitalik.eth");

    for input in [VITALIK.to_string(), VITALIK.to_lowercase()] {
        let identity = resolve(&client, &input).await.unwrap();
        assert_eq!(identity.address, addr(VITALIK));
        assert_eq!(identity.ens_name.as_deref(), Some("vitalik.eth"));
    }
}

#[tokio::test]
async fn test_reverse_failure_is_not_an_error() {
    let client = MockClient::new().failing_reverse();
    let identity = resolve(&client, VITALIK).await.unwrap();
    assert_eq!(identity.ens_name, None);

    let client = MockClient::new();
    let identity = resolve(&client, VITALIK).await.unwrap();
    assert_eq!(identity.ens_name, None);
    assert_eq!(client.calls(), vec![MockCall::LookupAddress(addr(VITALIK))]);
}

#[tokio::test]
async fn test_empty_input_issues_no_calls() {
    let client = MockClient::new();
    for input in ["", "   ", "\t\n"] {
        let err = lookup(&client, &default_tokens(), input).await.unwrap_err();
        assert!(matches!(err, LookupError::EmptyInput));
        assert_eq!(err.user_message(), EMPTY_INPUT_MESSAGE);
    }
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_invalid_address_issues_no_calls() {
    let client = MockClient::new();
    let err = lookup(&client, &default_tokens(), "0x1234").await.unwrap_err();
    assert!(matches!(err, LookupError::InvalidAddress(_)));
    assert_eq!(err.user_message(), INVALID_ADDRESS_MESSAGE);
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_unresolved_name_aborts_before_balances() {
    let client = MockClient::new();
    let err = lookup(&client, &default_tokens(), "nobody.eth").await.unwrap_err();
    assert!(matches!(err, LookupError::UnresolvedName(ref name) if name == "nobody.eth"));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    assert_eq!(client.calls(), vec![MockCall::ResolveName("nobody.eth".into())]);

    let client = MockClient::new().failing_names("resolver reverted");
    let err = lookup(&client, &default_tokens(), "broken.eth").await.unwrap_err();
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_native_balance_failure_is_transport_error() {
    let client = stablecoins(MockClient::new().failing_balance("connection refused"));
    let err = lookup(&client, &default_tokens(), VITALIK).await.unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)));
    assert_eq!(err.user_message(), "connection refused. Please try again.");
}

#[tokio::test]
async fn test_token_failure_is_isolated_and_order_is_kept() {
    let client = stablecoins(MockClient::new().with_balance(VITALIK, ether(1))).failing_token(USDT);

    let wallet = lookup(&client, &default_tokens(), VITALIK).await.unwrap();
    assert_eq!(wallet.token_balances.len(), 2);

    let usdt = &wallet.token_balances[0];
    assert!(usdt.error);
    assert_eq!(usdt.address, USDT);
    assert_eq!(usdt.balance, None);
    assert_eq!(usdt.symbol, None);

    let usdc = &wallet.token_balances[1];
    assert!(!usdc.error);
    assert_eq!(usdc.symbol.as_deref(), Some("USDC"));
    assert_eq!(usdc.decimals, Some(6));
    assert_eq!(format_balance(usdc.balance.as_deref().unwrap()), "5.0000");
    assert_eq!(wallet.failed_tokens(), 1);
}

#[tokio::test]
async fn test_token_balances_are_scaled() {
    let client = stablecoins(MockClient::new());
    let result = fetch_token(&client, addr(VITALIK), USDT).await;
    assert!(!result.error);
    assert_eq!(result.address, USDT);
    assert_eq!(format_balance(result.balance.as_deref().unwrap()), "1,234.5679");
}

#[tokio::test]
async fn test_invalid_token_address_keeps_original_input() {
    let client = MockClient::new();
    let result = fetch_token(&client, addr(VITALIK), "0xnot-a-token").await;
    assert!(result.error);
    assert_eq!(result.address, "0xnot-a-token");
    assert_eq!(result.balance, None);
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_failed_read_keeps_original_token_address() {
    // Lowercase input: a successful read would canonicalize it, a failed one must not
    let lower = USDC.to_lowercase();
    let client = MockClient::new();
    let result = fetch_token(&client, addr(VITALIK), &lower).await;
    assert!(result.error);
    assert_eq!(result.address, lower);
    assert_eq!(result.balance, None);

    let client = MockClient::new().with_token(USDC, "USDC", 6);
    let result = fetch_token(&client, addr(VITALIK), &lower).await;
    assert!(!result.error);
    assert_eq!(result.address, USDC);
}

#[tokio::test]
async fn test_token_reads_use_resolved_address() {
    let client = stablecoins(MockClient::new().with_name("vitalik.eth", VITALIK));
    let tokens = vec![TokenSpec::new(USDT, "USDT")];
    lookup(&client, &tokens, "vitalik.eth").await.unwrap();

    let calls = client.calls();
    let resolve_at = calls
        .iter()
        .position(|c| matches!(c, MockCall::ResolveName(_)))
        .unwrap();
    let balance_of_at = calls
        .iter()
        .position(|c| matches!(c, MockCall::BalanceOf { .. }))
        .unwrap();
    assert!(resolve_at < balance_of_at);
    assert!(calls.contains(&MockCall::BalanceOf {
        token: addr(USDT),
        owner: addr(VITALIK),
    }));
}
