//! Address format checks and EIP-55 canonicalization

use alloy::primitives::Address;

use crate::domain::error::LookupError;

/// `0x` followed by exactly 40 hex digits
pub fn is_address_format(value: &str) -> bool {
    hex_payload(value.trim())
        .map(|payload| payload.len() == 40 && payload.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}

/// Parse an address, rejecting mixed-case input whose checksum is wrong.
///
/// All-lowercase and all-uppercase payloads carry no checksum and are accepted.
pub fn to_checksummed(value: &str) -> Result<Address, LookupError> {
    let trimmed = value.trim();
    let invalid = || LookupError::InvalidAddress(trimmed.to_string());

    if !is_address_format(trimmed) {
        return Err(invalid());
    }
    let payload = hex_payload(trimmed).ok_or_else(invalid)?;
    let bytes = hex::decode(payload).map_err(|_| invalid())?;
    let address = Address::from_slice(&bytes);

    let has_lower = payload.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = payload.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && checksum_string(&address)[2..] != *payload {
        return Err(invalid());
    }

    Ok(address)
}

pub fn checksum_string(address: &Address) -> String {
    address.to_checksum(None)
}

fn hex_payload(value: &str) -> Option<&str> {
    value.strip_prefix("0x").or_else(|| value.strip_prefix("0X"))
}
