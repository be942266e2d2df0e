//! Pure display conversions for hex quantities, wei amounts, hashes and times.

use alloy::primitives::U256;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// 10^18 wei per ETH
pub const WEI_PER_ETH: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Characters kept at the end of a shortened hex string
const SHORT_SUFFIX_LEN: usize = 6;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("missing 0x prefix: {0:?}")]
    MissingPrefix(String),
    #[error("invalid hex quantity: {0:?}")]
    InvalidHex(String),
}

fn strip_hex_prefix(hex: &str) -> Result<&str, FormatError> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .ok_or_else(|| FormatError::MissingPrefix(hex.to_string()))?;

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(FormatError::InvalidHex(hex.to_string()));
    }

    Ok(digits)
}

/// Parse a `0x`-prefixed base-16 quantity (block numbers, gas, nonces)
pub fn hex_to_int(hex: &str) -> Result<u64, FormatError> {
    let digits = strip_hex_prefix(hex)?;
    u64::from_str_radix(digits, 16).map_err(|_| FormatError::InvalidHex(hex.to_string()))
}

/// Encode a number as a JSON-RPC quantity (`0x` + minimal lowercase hex)
pub fn to_quantity(n: u64) -> String {
    format!("0x{n:x}")
}

/// Parse a hex wei amount at full 256-bit precision
pub fn parse_wei(hex: &str) -> Result<U256, FormatError> {
    let digits = strip_hex_prefix(hex)?;
    U256::from_str_radix(digits, 16).map_err(|_| FormatError::InvalidHex(hex.to_string()))
}

/// Whole ETH in a hex wei amount. Integer division: fractions are truncated.
pub fn wei_to_eth(wei_hex: &str) -> Result<U256, FormatError> {
    parse_wei(wei_hex).map(wei_to_eth_units)
}

pub fn wei_to_eth_units(wei: U256) -> U256 {
    wei / WEI_PER_ETH
}

/// `"N ETH"` with the truncated whole-ETH amount
pub fn format_eth(wei: U256) -> String {
    format!("{} ETH", wei_to_eth_units(wei))
}

/// First `keep` chars + `...` + last 6 chars. Empty in, empty out.
///
/// The ellipsis is always inserted, so inputs shorter than `keep + 6` come
/// back with head and tail overlapping (`"0x12"` becomes `"0x12...0x12"`).
pub fn shorten(hex: &str, keep: usize) -> String {
    if hex.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = hex.chars().collect();
    let head: String = chars.iter().take(keep).collect();
    let tail: String = chars[chars.len().saturating_sub(SHORT_SUFFIX_LEN)..]
        .iter()
        .collect();
    format!("{head}...{tail}")
}

pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Coarse relative time against the system clock
pub fn time_ago(ts: u64) -> String {
    time_ago_at(ts, unix_now())
}

pub fn time_ago_at(ts: u64, now: u64) -> String {
    let diff = now.saturating_sub(ts);

    if diff < 60 {
        format!("{diff}s ago")
    } else if diff < 3600 {
        format!("{}m ago", diff / 60)
    } else if diff < 86400 {
        format!("{}h ago", diff / 3600)
    } else {
        format!("{}d ago", diff / 86400)
    }
}
