//! Amount validation at the engine boundary.
//!
//! Every amount entering a calculation passes through [`validate_amount`].
//! Callers holding raw text or JSON numbers convert them with
//! [`parse_amount`] or [`amount_from_f64`], which reject anything that is
//! not a finite, non-negative number.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::warn;

use crate::error::{EngineError, EngineResult};

/// Field name used for order amounts in errors and logs.
pub const ORDER_AMOUNT_FIELD: &str = "order_amount";

/// Field name used for bonus amounts in errors and logs.
pub const BONUS_FIELD: &str = "bonus";

/// Rejects negative amounts.
///
/// # Examples
///
/// ```
/// use delivery_fee_engine::calculation::validate_amount;
/// use rust_decimal::Decimal;
///
/// assert!(validate_amount("order_amount", Decimal::new(15000, 2)).is_ok());
/// assert!(validate_amount("order_amount", Decimal::new(-1, 2)).is_err());
/// ```
pub fn validate_amount(field: &str, value: Decimal) -> EngineResult<Decimal> {
    if value < Decimal::ZERO {
        warn!(field = %field, value = %value, "Rejected negative amount");
        return Err(EngineError::invalid_amount(
            field,
            value,
            "must not be negative",
        ));
    }
    Ok(value)
}

/// Parses caller-supplied text into a validated amount.
///
/// Surrounding whitespace is ignored. Anything that is not a plain decimal
/// number (including `NaN` and `inf`) is rejected.
///
/// # Examples
///
/// ```
/// use delivery_fee_engine::calculation::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("order_amount", " 150.00 ").unwrap(), Decimal::new(15000, 2));
/// assert!(parse_amount("order_amount", "NaN").is_err());
/// ```
pub fn parse_amount(field: &str, raw: &str) -> EngineResult<Decimal> {
    let value = Decimal::from_str(raw.trim()).map_err(|e| {
        warn!(field = %field, value = %raw, error = %e, "Rejected non-numeric amount");
        EngineError::invalid_amount(field, raw, "not a valid decimal number")
    })?;
    validate_amount(field, value)
}

/// Converts a floating point amount received at the boundary into a decimal.
///
/// The float is converted once and never used in arithmetic.
pub fn amount_from_f64(field: &str, value: f64) -> EngineResult<Decimal> {
    if !value.is_finite() {
        warn!(field = %field, value = ?value, "Rejected non-finite amount");
        return Err(EngineError::invalid_amount(field, value, "must be finite"));
    }
    let decimal = Decimal::from_f64(value).ok_or_else(|| {
        warn!(field = %field, value = ?value, "Rejected out of range amount");
        EngineError::invalid_amount(field, value, "out of range")
    })?;
    validate_amount(field, decimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_is_valid() {
        assert_eq!(validate_amount(ORDER_AMOUNT_FIELD, Decimal::ZERO).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_zero_is_valid() {
        assert!(validate_amount(ORDER_AMOUNT_FIELD, dec("-0.00")).is_ok());
    }

    #[test]
    fn test_negative_amount_names_the_field() {
        let result = validate_amount(BONUS_FIELD, dec("-5.00"));

        match result {
            Err(EngineError::InvalidAmount { field, value, reason }) => {
                assert_eq!(field, "bonus");
                assert_eq!(value, "-5.00");
                assert!(reason.contains("negative"));
            }
            other => panic!("Expected InvalidAmount error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_amount_accepts_plain_decimal() {
        assert_eq!(parse_amount(ORDER_AMOUNT_FIELD, "199.00").unwrap(), dec("199.00"));
        assert_eq!(parse_amount(ORDER_AMOUNT_FIELD, "42").unwrap(), dec("42"));
    }

    #[test]
    fn test_parse_amount_rejects_non_numeric_text() {
        for raw in ["abc", "", "NaN", "inf", "-inf", "12.5.0"] {
            let result = parse_amount(ORDER_AMOUNT_FIELD, raw);
            match result {
                Err(EngineError::InvalidAmount { field, value, .. }) => {
                    assert_eq!(field, "order_amount");
                    assert_eq!(value, raw);
                }
                other => panic!("Expected InvalidAmount for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_parse_amount_rejects_negative_text() {
        assert!(matches!(
            parse_amount(ORDER_AMOUNT_FIELD, "-10.00"),
            Err(EngineError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_amount_from_f64_converts_finite_value() {
        assert_eq!(amount_from_f64(ORDER_AMOUNT_FIELD, 150.5).unwrap(), dec("150.5"));
    }

    #[test]
    fn test_amount_from_f64_rejects_non_finite_values() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match amount_from_f64(ORDER_AMOUNT_FIELD, value) {
                Err(EngineError::InvalidAmount { reason, .. }) => {
                    assert_eq!(reason, "must be finite");
                }
                other => panic!("Expected InvalidAmount for {}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_amount_from_f64_rejects_out_of_range_value() {
        match amount_from_f64(ORDER_AMOUNT_FIELD, 1e30) {
            Err(EngineError::InvalidAmount { reason, .. }) => assert_eq!(reason, "out of range"),
            other => panic!("Expected InvalidAmount error, got {:?}", other),
        }
    }

    #[test]
    fn test_amount_from_f64_rejects_negative_value() {
        assert!(matches!(
            amount_from_f64(BONUS_FIELD, -0.01),
            Err(EngineError::InvalidAmount { .. })
        ));
    }
}
