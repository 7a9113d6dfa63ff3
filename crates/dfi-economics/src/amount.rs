//! Display-unit formatting and height parsing

use crate::constants::{COIN, DECIMALS};
use crate::error::{EconomicsError, Result};
use crate::Amount;

/// Render a base-unit amount as `<whole>.<fraction>` with eight fractional
/// digits, no separators and no symbol.
pub fn format_amount(amount: Amount) -> String {
    format!("{}.{:0width$}", amount / COIN, amount % COIN, width = DECIMALS)
}

/// Parse a block height given as a plain decimal integer.
///
/// Only ASCII digits are accepted: no sign, no whitespace, no separators.
pub fn parse_height(input: &str) -> Result<u64> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EconomicsError::InvalidHeight(input.to_string()));
    }
    input
        .parse::<u64>()
        .map_err(|_| EconomicsError::HeightOutOfRange(input.to_string()))
}
