//! Turn raw input into a canonical address and an optional ENS name

use tracing::{debug, warn};

use crate::domain::{classify, to_checksummed, LookupError, QueryKind, ResolvedIdentity};
use crate::infrastructure::ethereum::WalletClient;

/// Resolve an ENS name or validate an address.
///
/// ENS input keeps the typed name as its display name and never consults the
/// reverse record. Address input gets a best-effort reverse lookup whose
/// failure is not an error.
pub async fn resolve(client: &dyn WalletClient, raw: &str) -> Result<ResolvedIdentity, LookupError> {
    match classify(raw) {
        QueryKind::Ens(name) => {
            debug!(%name, "resolving ENS name");
            match client.resolve_name(&name).await {
                Ok(Some(address)) => Ok(ResolvedIdentity {
                    address,
                    ens_name: Some(name),
                }),
                Ok(None) => Err(LookupError::UnresolvedName(name)),
                Err(err) => {
                    warn!(%name, error = %format!("{err:#}"), "ENS resolution failed");
                    Err(LookupError::UnresolvedName(name))
                }
            }
        }
        QueryKind::Address(candidate) => {
            let address = to_checksummed(&candidate)?;
            let ens_name = match client.lookup_address(address).await {
                Ok(name) => name,
                Err(err) => {
                    debug!(%address, error = %format!("{err:#}"), "reverse lookup failed");
                    None
                }
            };
            Ok(ResolvedIdentity { address, ens_name })
        }
    }
}
