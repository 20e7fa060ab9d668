//! Lookup results

use alloy::primitives::Address;
use serde::Serialize;

use crate::domain::address::checksum_string;

/// Canonical address plus the ENS name it is known by, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub address: Address,
    pub ens_name: Option<String>,
}

/// One configured ERC-20 contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpec {
    pub address: String,
    pub name: String,
}

impl TokenSpec {
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
        }
    }
}

/// Balance of one token for the looked-up wallet.
///
/// A failed fetch keeps the address exactly as configured and leaves every
/// other field empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenBalanceResult {
    pub symbol: Option<String>,
    pub address: String,
    pub balance: Option<String>,
    pub decimals: Option<u8>,
    pub error: bool,
}

impl TokenBalanceResult {
    pub fn loaded(symbol: String, address: Address, balance: String, decimals: u8) -> Self {
        Self {
            symbol: Some(symbol),
            address: checksum_string(&address),
            balance: Some(balance),
            decimals: Some(decimals),
            error: false,
        }
    }

    pub fn failed(address: &str) -> Self {
        Self {
            symbol: None,
            address: address.to_string(),
            balance: None,
            decimals: None,
            error: true,
        }
    }
}

/// Everything shown in the result panel. Built once per successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletInfo {
    pub address: Address,
    pub ens_name: Option<String>,
    /// Native balance in ether as an unrounded decimal string
    pub balance: String,
    /// Same order as the configured token list
    pub token_balances: Vec<TokenBalanceResult>,
}

impl WalletInfo {
    pub fn checksum_address(&self) -> String {
        checksum_string(&self.address)
    }

    pub fn failed_tokens(&self) -> usize {
        self.token_balances.iter().filter(|t| t.error).count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
