//! Ethereum infrastructure - Alloy client, contract bindings, ENS

pub mod bindings;
pub mod ens;
mod provider;

pub use provider::{create_client, AlloyClient, ProviderConfig, WalletClient};
