//! In-memory wallet client shared across integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use alloy::primitives::{Address, U256};
use anyhow::{anyhow, Result};
use walletlens::infrastructure::WalletClient;

pub const VITALIK: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
pub const USDT: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";
pub const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

pub fn addr(value: &str) -> Address {
    value.parse().expect("valid address")
}

/// One ether in wei
pub fn ether(amount: u64) -> U256 {
    U256::from(amount) * U256::from(10u64).pow(U256::from(18u64))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Balance(Address),
    ResolveName(String),
    LookupAddress(Address),
    BalanceOf { token: Address, owner: Address },
    Decimals(Address),
    Symbol(Address),
}

#[derive(Debug, Clone)]
struct MockToken {
    symbol: String,
    decimals: u8,
    balances: HashMap<Address, U256>,
    failing: bool,
}

#[derive(Debug, Default)]
struct MockState {
    balances: HashMap<Address, U256>,
    names: HashMap<String, Address>,
    reverse: HashMap<Address, String>,
    tokens: HashMap<Address, MockToken>,
    balance_error: Option<String>,
    name_error: Option<String>,
    reverse_error: bool,
    calls: Vec<MockCall>,
}

#[derive(Debug, Default)]
pub struct MockClient {
    state: Mutex<MockState>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn with(self, f: impl FnOnce(&mut MockState)) -> Self {
        f(&mut self.state.lock().unwrap());
        self
    }

    pub fn with_balance(self, address: &str, wei: U256) -> Self {
        let address = addr(address);
        self.with(|s| {
            s.balances.insert(address, wei);
        })
    }

    pub fn with_name(self, name: &str, address: &str) -> Self {
        let address = addr(address);
        self.with(|s| {
            s.names.insert(name.to_string(), address);
        })
    }

    pub fn with_reverse(self, address: &str, name: &str) -> Self {
        let address = addr(address);
        self.with(|s| {
            s.reverse.insert(address, name.to_string());
        })
    }

    pub fn with_token(self, token: &str, symbol: &str, decimals: u8) -> Self {
        let token = addr(token);
        self.with(|s| {
            s.tokens.insert(
                token,
                MockToken {
                    symbol: symbol.to_string(),
                    decimals,
                    balances: HashMap::new(),
                    failing: false,
                },
            );
        })
    }

    pub fn with_token_balance(self, token: &str, owner: &str, amount: U256) -> Self {
        let (token, owner) = (addr(token), addr(owner));
        self.with(|s| {
            if let Some(t) = s.tokens.get_mut(&token) {
                t.balances.insert(owner, amount);
            }
        })
    }

    /// Make `decimals()` on this token revert
    pub fn failing_token(self, token: &str) -> Self {
        let token = addr(token);
        self.with(|s| {
            if let Some(t) = s.tokens.get_mut(&token) {
                t.failing = true;
            }
        })
    }

    pub fn failing_balance(self, message: &str) -> Self {
        let message = message.to_string();
        self.with(|s| s.balance_error = Some(message))
    }

    pub fn failing_names(self, message: &str) -> Self {
        let message = message.to_string();
        self.with(|s| s.name_error = Some(message))
    }

    pub fn failing_reverse(self) -> Self {
        self.with(|s| s.reverse_error = true)
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: MockCall) {
        self.state.lock().unwrap().calls.push(call);
    }

    fn token(&self, token: Address) -> Result<MockToken> {
        self.state
            .lock()
            .unwrap()
            .tokens
            .get(&token)
            .cloned()
            .ok_or_else(|| anyhow!("execution reverted"))
    }
}

#[async_trait::async_trait]
impl WalletClient for MockClient {
    async fn get_balance(&self, address: Address) -> Result<U256> {
        self.record(MockCall::Balance(address));
        let state = self.state.lock().unwrap();
        if let Some(message) = &state.balance_error {
            return Err(anyhow!(message.clone()));
        }
        Ok(state.balances.get(&address).copied().unwrap_or_default())
    }

    async fn resolve_name(&self, name: &str) -> Result<Option<Address>> {
        self.record(MockCall::ResolveName(name.to_string()));
        let state = self.state.lock().unwrap();
        if let Some(message) = &state.name_error {
            return Err(anyhow!(message.clone()));
        }
        Ok(state.names.get(name).copied())
    }

    async fn lookup_address(&self, address: Address) -> Result<Option<String>> {
        self.record(MockCall::LookupAddress(address));
        let state = self.state.lock().unwrap();
        if state.reverse_error {
            return Err(anyhow!("reverse resolver unavailable"));
        }
        Ok(state.reverse.get(&address).cloned())
    }

    async fn token_balance_of(&self, token: Address, owner: Address) -> Result<U256> {
        self.record(MockCall::BalanceOf { token, owner });
        let t = self.token(token)?;
        Ok(t.balances.get(&owner).copied().unwrap_or_default())
    }

    async fn token_decimals(&self, token: Address) -> Result<u8> {
        self.record(MockCall::Decimals(token));
        let t = self.token(token)?;
        if t.failing {
            return Err(anyhow!("execution reverted: decimals"));
        }
        Ok(t.decimals)
    }

    async fn token_symbol(&self, token: Address) -> Result<String> {
        self.record(MockCall::Symbol(token));
        Ok(self.token(token)?.symbol)
    }

    fn endpoint_name(&self) -> String {
        "mock://".to_string()
    }
}
