//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits carried by every monetary value.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a monetary value to 2 decimal places, half-up, at scale 2.
///
/// The result always carries exactly two fractional digits, so whole
/// amounts display as `40.00`. Negative zero is reported as zero.
///
/// # Examples
///
/// ```
/// use delivery_fee_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("10.005").unwrap()).to_string(), "10.01");
/// assert_eq!(round_money(Decimal::from(40)).to_string(), "40.00");
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}
