//! Display formatting for addresses and balances

use alloy::primitives::utils::{format_ether, format_units};
use alloy::primitives::U256;
use anyhow::{anyhow, Result};

const BALANCE_FRACTION_DIGITS: usize = 4;

/// `0x1234567890123456789012345678901234567890` -> `0x1234...7890`
pub fn shorten_address(value: &str) -> String {
    let value = value.trim();
    if value.chars().count() <= 10 {
        return value.to_string();
    }
    let start: String = value.chars().take(6).collect();
    let end: String = value
        .chars()
        .rev()
        .take(4)
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    format!("{}...{}", start, end)
}

/// Round a decimal string to four fraction digits and group thousands.
///
/// `"1000.123456"` -> `"1,000.1235"`. Input that is not a plain decimal is
/// returned as-is.
pub fn format_balance(value: &str) -> String {
    let trimmed = value.trim();
    let (whole, frac) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let whole = if whole.is_empty() { "0" } else { whole };

    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return value.to_string();
    }

    // One extra digit decides the rounding direction.
    let mut frac_digits: Vec<u8> = frac.bytes().map(|b| b - b'0').collect();
    frac_digits.resize(BALANCE_FRACTION_DIGITS + 1, 0);
    let round_up = frac_digits[BALANCE_FRACTION_DIGITS] >= 5;

    let mut digits: Vec<u8> = whole.bytes().map(|b| b - b'0').collect();
    digits.extend_from_slice(&frac_digits[..BALANCE_FRACTION_DIGITS]);

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if !carry {
                break;
            }
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - BALANCE_FRACTION_DIGITS;
    let whole_digits: String = digits[..split]
        .iter()
        .map(|d| char::from(b'0' + d))
        .collect();
    let frac_digits: String = digits[split..]
        .iter()
        .map(|d| char::from(b'0' + d))
        .collect();

    let whole_digits = whole_digits.trim_start_matches('0');
    let whole_digits = if whole_digits.is_empty() { "0" } else { whole_digits };

    format!("{}.{}", group_thousands(whole_digits), frac_digits)
}

/// Scale a raw token amount by its decimals
pub fn scale_to_decimal_string(raw: U256, decimals: u8) -> Result<String> {
    format_units(raw, decimals).map_err(|err| anyhow!("cannot scale by {decimals} decimals: {err}"))
}

/// Native balance in ether (18 decimals)
pub fn native_to_decimal_string(wei: U256) -> String {
    format_ether(wei)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
