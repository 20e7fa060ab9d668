//! Wallet client abstraction and its Alloy implementation
//!
//! Everything the lookup needs from the chain goes through [`WalletClient`].
//! Contract reads are plain `eth_call`s encoded with the `sol!` bindings.

use std::sync::Arc;

use alloy::network::Ethereum;
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::providers::{
    fillers::{BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller},
    Identity, Provider, ProviderBuilder, RootProvider,
};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use anyhow::{Context, Result};
use tracing::debug;

use crate::infrastructure::ethereum::bindings::{IEnsRegistry, IEnsResolver, IERC20};
use crate::infrastructure::ethereum::ens::{namehash, reverse_node, ENS_REGISTRY};

/// Provider configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    /// HTTP JSON-RPC endpoint
    Http(String),
    /// WebSocket endpoint
    WebSocket(String),
}

impl ProviderConfig {
    /// Get display name for this endpoint
    pub fn display(&self) -> String {
        match self {
            ProviderConfig::Http(url) => url.clone(),
            ProviderConfig::WebSocket(url) => url.clone(),
        }
    }

    pub fn is_websocket(&self) -> bool {
        matches!(self, ProviderConfig::WebSocket(_))
    }
}

/// Chain reads needed to look up a wallet.
///
/// `Ok(None)` from the ENS methods means "no record", not a failure.
#[async_trait::async_trait]
pub trait WalletClient: Send + Sync + 'static {
    /// Native balance in wei
    async fn get_balance(&self, address: Address) -> Result<U256>;

    /// Forward ENS resolution: name -> address
    async fn resolve_name(&self, name: &str) -> Result<Option<Address>>;

    /// Reverse ENS resolution: address -> primary name
    async fn lookup_address(&self, address: Address) -> Result<Option<String>>;

    /// ERC-20 `balanceOf(owner)`
    async fn token_balance_of(&self, token: Address, owner: Address) -> Result<U256>;

    /// ERC-20 `decimals()`
    async fn token_decimals(&self, token: Address) -> Result<u8>;

    /// ERC-20 `symbol()`
    async fn token_symbol(&self, token: Address) -> Result<String>;

    /// Get endpoint display name
    fn endpoint_name(&self) -> String;
}

type FilledProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider,
    Ethereum,
>;

pub struct AlloyClient {
    provider: FilledProvider,
    endpoint: String,
}

/// Create a client from configuration
pub async fn create_client(config: ProviderConfig) -> Result<Arc<dyn WalletClient>> {
    match config {
        ProviderConfig::Http(url) => {
            let rpc_url = url.parse().context("Invalid HTTP URL")?;
            let provider = ProviderBuilder::new().connect_http(rpc_url);
            Ok(Arc::new(AlloyClient {
                provider,
                endpoint: url,
            }))
        }
        ProviderConfig::WebSocket(url) => {
            let provider = ProviderBuilder::new()
                .connect(&url)
                .await
                .context("Failed to create WebSocket provider")?;
            Ok(Arc::new(AlloyClient {
                provider,
                endpoint: url,
            }))
        }
    }
}

impl AlloyClient {
    async fn call_contract<C: SolCall>(&self, to: Address, call: C) -> Result<C::Return> {
        let request = TransactionRequest::default()
            .to(to)
            .input(Bytes::from(call.abi_encode()).into());
        let data = self
            .provider
            .call(request)
            .await
            .with_context(|| format!("eth_call {} on {}", C::SIGNATURE, to))?;
        C::abi_decode_returns(&data)
            .with_context(|| format!("Failed to decode {} from {}", C::SIGNATURE, to))
    }

    async fn resolver_for(&self, node: B256) -> Result<Option<Address>> {
        let resolver = self
            .call_contract(ENS_REGISTRY, IEnsRegistry::resolverCall { node })
            .await?;
        Ok((!resolver.is_zero()).then_some(resolver))
    }
}

#[async_trait::async_trait]
impl WalletClient for AlloyClient {
    async fn get_balance(&self, address: Address) -> Result<U256> {
        Ok(self.provider.get_balance(address).await?)
    }

    async fn resolve_name(&self, name: &str) -> Result<Option<Address>> {
        let node = namehash(name);
        let Some(resolver) = self.resolver_for(node).await? else {
            debug!(%name, "no ENS resolver set");
            return Ok(None);
        };
        let address = self
            .call_contract(resolver, IEnsResolver::addrCall { node })
            .await?;
        Ok((!address.is_zero()).then_some(address))
    }

    async fn lookup_address(&self, address: Address) -> Result<Option<String>> {
        let node = reverse_node(address);
        let Some(resolver) = self.resolver_for(node).await? else {
            return Ok(None);
        };
        let name = self
            .call_contract(resolver, IEnsResolver::nameCall { node })
            .await?;
        if name.trim().is_empty() {
            return Ok(None);
        }

        // A reverse record only counts if the name points back at the address.
        match self.resolve_name(&name).await? {
            Some(forward) if forward == address => Ok(Some(name)),
            _ => {
                debug!(%address, %name, "reverse record does not resolve back");
                Ok(None)
            }
        }
    }

    async fn token_balance_of(&self, token: Address, owner: Address) -> Result<U256> {
        self.call_contract(token, IERC20::balanceOfCall { account: owner })
            .await
    }

    async fn token_decimals(&self, token: Address) -> Result<u8> {
        self.call_contract(token, IERC20::decimalsCall {}).await
    }

    async fn token_symbol(&self, token: Address) -> Result<String> {
        self.call_contract(token, IERC20::symbolCall {}).await
    }

    fn endpoint_name(&self) -> String {
        self.endpoint.clone()
    }
}
