//! Services - the lookup pipeline built on top of [`WalletClient`]
//!
//! [`WalletClient`]: crate::infrastructure::ethereum::WalletClient

pub mod lookup;
pub mod resolver;
pub mod tokens;

pub use lookup::lookup;
pub use resolver::resolve;
pub use tokens::{default_tokens, fetch_all, fetch_token, DEFAULT_TOKENS};
