//! Infrastructure layer - External service integrations
//!
//! This layer contains:
//! - Alloy-based wallet client, contract bindings and ENS hashing
//! - Tokio runtime bridge for async operations

pub mod ethereum;
pub mod runtime;

pub use ethereum::{create_client, ProviderConfig, WalletClient};
pub use runtime::{RuntimeBridge, RuntimeCommand, RuntimeEvent};
