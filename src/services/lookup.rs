//! One wallet lookup, from raw input to a finished [`WalletInfo`]

use tracing::{debug, info, warn};

use crate::domain::format::native_to_decimal_string;
use crate::domain::{LookupError, TokenSpec, WalletInfo};
use crate::infrastructure::ethereum::WalletClient;
use crate::services::resolver::resolve;
use crate::services::tokens::fetch_all;

/// Resolve the input, then fetch the native balance and every token balance
/// concurrently.
///
/// Token failures stay inside their own entries; only a failed native balance
/// (or resolution) aborts the lookup.
pub async fn lookup(
    client: &dyn WalletClient,
    tokens: &[TokenSpec],
    raw: &str,
) -> Result<WalletInfo, LookupError> {
    let query = raw.trim();
    if query.is_empty() {
        return Err(LookupError::EmptyInput);
    }

    let identity = resolve(client, query).await.map_err(|err| {
        warn!(%query, error = %err, "resolution failed");
        err
    })?;

    let (native, token_balances) = futures::join!(
        client.get_balance(identity.address),
        fetch_all(client, identity.address, tokens),
    );

    let native = native.map_err(|err| {
        warn!(address = %identity.address, error = %format!("{err:#}"), "native balance fetch failed");
        LookupError::Transport(err)
    })?;

    let wallet = WalletInfo {
        address: identity.address,
        ens_name: identity.ens_name,
        balance: native_to_decimal_string(native),
        token_balances,
    };

    info!(
        address = %wallet.address,
        ens = wallet.ens_name.as_deref().unwrap_or("-"),
        balance = %wallet.balance,
        failed_tokens = wallet.failed_tokens(),
        "lookup finished"
    );
    match wallet.to_json() {
        Ok(json) => debug!(wallet = %json, "lookup result"),
        Err(err) => debug!(error = %err, "lookup result not serializable"),
    }

    Ok(wallet)
}
