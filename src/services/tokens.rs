//! ERC-20 balance fetching

use alloy::primitives::Address;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::format::scale_to_decimal_string;
use crate::domain::{to_checksummed, TokenBalanceResult, TokenSpec};
use crate::infrastructure::ethereum::WalletClient;

/// Tokens shown when the config file lists none (Ethereum mainnet)
pub const DEFAULT_TOKENS: [(&str, &str); 2] = [
    ("0xdAC17F958D2ee523a2206206994597C13D831ec7", "USDT"),
    ("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", "USDC"),
];

pub fn default_tokens() -> Vec<TokenSpec> {
    DEFAULT_TOKENS
        .iter()
        .map(|(address, name)| TokenSpec::new(*address, *name))
        .collect()
}

/// Fetch one token balance. Never fails: every error becomes
/// `TokenBalanceResult::failed` carrying the address as passed in.
pub async fn fetch_token(
    client: &dyn WalletClient,
    wallet: Address,
    token_address: &str,
) -> TokenBalanceResult {
    let token = match to_checksummed(token_address) {
        Ok(token) => token,
        Err(err) => {
            warn!(token = token_address, error = %err, "skipping token with invalid address");
            return TokenBalanceResult::failed(token_address);
        }
    };

    let reads = futures::try_join!(
        client.token_balance_of(token, wallet),
        client.token_decimals(token),
        client.token_symbol(token),
    );

    let outcome = reads.and_then(|(raw, decimals, symbol)| {
        let balance = scale_to_decimal_string(raw, decimals)?;
        Ok((symbol, balance, decimals))
    });

    match outcome {
        Ok((symbol, balance, decimals)) => {
            debug!(%token, %symbol, %balance, "token balance loaded");
            TokenBalanceResult::loaded(symbol, token, balance, decimals)
        }
        Err(err) => {
            warn!(%token, error = %format!("{err:#}"), "token read failed");
            TokenBalanceResult::failed(token_address)
        }
    }
}

/// Fetch every configured token concurrently. Results follow `tokens` order.
pub async fn fetch_all(
    client: &dyn WalletClient,
    wallet: Address,
    tokens: &[TokenSpec],
) -> Vec<TokenBalanceResult> {
    join_all(
        tokens
            .iter()
            .map(|token| fetch_token(client, wallet, &token.address)),
    )
    .await
}
