//! Free delivery classification.
//!
//! Fee and earnings calculations both classify orders through
//! [`qualifies_for_free_delivery`], so the two can never disagree about
//! whether an order shipped free.

use rust_decimal::Decimal;

use crate::config::FeePolicy;

/// Returns true if the order amount meets the free delivery threshold.
///
/// The threshold is inclusive.
///
/// # Examples
///
/// ```
/// use delivery_fee_engine::calculation::qualifies_for_free_delivery;
/// use delivery_fee_engine::config::FeePolicy;
/// use rust_decimal::Decimal;
///
/// let policy = FeePolicy::default();
/// assert!(qualifies_for_free_delivery(Decimal::new(19900, 2), &policy));
/// assert!(!qualifies_for_free_delivery(Decimal::new(19899, 2), &policy));
/// ```
pub fn qualifies_for_free_delivery(order_amount: Decimal, policy: &FeePolicy) -> bool {
    order_amount >= policy.free_threshold()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(qualifies_for_free_delivery(dec("199.00"), &FeePolicy::default()));
    }

    #[test]
    fn test_one_cent_below_threshold_is_paid() {
        assert!(!qualifies_for_free_delivery(dec("198.99"), &FeePolicy::default()));
    }

    #[test]
    fn test_zero_order_is_paid() {
        assert!(!qualifies_for_free_delivery(Decimal::ZERO, &FeePolicy::default()));
    }

    #[test]
    fn test_custom_threshold() {
        let policy =
            FeePolicy::new(dec("99.00"), dec("40.00"), dec("30.00"), dec("25.00")).unwrap();
        assert!(qualifies_for_free_delivery(dec("99.00"), &policy));
        assert!(!qualifies_for_free_delivery(dec("98.99"), &policy));
    }
}
