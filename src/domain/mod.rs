//! Domain layer - pure lookup logic with no I/O

pub mod address;
pub mod error;
pub mod format;
pub mod query;
pub mod wallet;

pub use address::{checksum_string, is_address_format, to_checksummed};
pub use error::LookupError;
pub use format::{format_balance, shorten_address};
pub use query::{classify, QueryKind};
pub use wallet::{ResolvedIdentity, TokenBalanceResult, TokenSpec, WalletInfo};
