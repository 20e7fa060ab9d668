//! Lookup failures and the messages shown for them

use thiserror::Error;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a wallet address or ENS Name";
pub const INVALID_ADDRESS_MESSAGE: &str = "Invalid Ethereum address";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch wallet information";
const TRANSPORT_FALLBACK_MESSAGE: &str = "Failed to fetch wallet information. Please try again later.";

/// A submission that ended without a result.
///
/// Per-token failures never show up here; they are folded into
/// [`TokenBalanceResult::error`](crate::domain::TokenBalanceResult).
#[derive(Debug, Error)]
pub enum LookupError {
    /// Empty or whitespace-only submission, caught before any RPC call
    #[error("empty wallet query")]
    EmptyInput,

    /// Non-ENS input that is not a valid address
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// ENS forward resolution returned nothing or failed
    #[error("ENS name did not resolve: {0}")]
    UnresolvedName(String),

    /// Native balance fetch failed
    #[error("native balance fetch failed: {0:#}")]
    Transport(anyhow::Error),
}

impl LookupError {
    /// Text for the error panel
    pub fn user_message(&self) -> String {
        match self {
            LookupError::EmptyInput => EMPTY_INPUT_MESSAGE.to_string(),
            LookupError::InvalidAddress(_) => INVALID_ADDRESS_MESSAGE.to_string(),
            LookupError::UnresolvedName(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            LookupError::Transport(err) => {
                let message = err.to_string();
                let message = message.trim().trim_end_matches('.');
                if message.is_empty() {
                    TRANSPORT_FALLBACK_MESSAGE.to_string()
                } else {
                    format!("{message}. Please try again.")
                }
            }
        }
    }
}
