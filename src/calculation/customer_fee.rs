//! Customer delivery fee calculation.
//!
//! This module decides whether an order ships free and what the customer
//! pays in total.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::FeePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::FeeBreakdown;

use super::classification::qualifies_for_free_delivery;
use super::money::round_money;
use super::validation::{ORDER_AMOUNT_FIELD, validate_amount};

/// Calculates the delivery fee a customer pays for an order.
///
/// The order amount is compared with the free delivery threshold exactly as
/// supplied; only the returned fields are rounded. An order of `198.995` is
/// therefore a paid order even though it is reported as `199.00`.
///
/// # Arguments
///
/// * `order_amount` - The order's monetary amount, non-negative
/// * `policy` - The fee policy to apply
///
/// # Returns
///
/// Returns a `FeeBreakdown` with every monetary field at 2 decimal places,
/// or `InvalidAmount` if the order amount is negative or too large to add
/// the delivery fee to.
///
/// # Examples
///
/// ```
/// use delivery_fee_engine::calculation::calculate_customer_fee;
/// use delivery_fee_engine::config::FeePolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let fee = calculate_customer_fee(
///     Decimal::from_str("250.00").unwrap(),
///     &FeePolicy::default(),
/// ).unwrap();
///
/// assert!(fee.is_free_delivery);
/// assert_eq!(fee.delivery_fee, Decimal::ZERO);
/// assert_eq!(fee.savings, Decimal::from_str("40.00").unwrap());
/// ```
pub fn calculate_customer_fee(
    order_amount: Decimal,
    policy: &FeePolicy,
) -> EngineResult<FeeBreakdown> {
    let order_amount = validate_amount(ORDER_AMOUNT_FIELD, order_amount)?;
    let is_free = qualifies_for_free_delivery(order_amount, policy);

    let delivery_fee = if is_free {
        Decimal::ZERO
    } else {
        policy.standard_fee()
    };
    let savings = if is_free {
        policy.standard_fee()
    } else {
        Decimal::ZERO
    };
    // Clamped even though the paid branch is always below the threshold.
    let amount_needed_for_free = if is_free {
        Decimal::ZERO
    } else {
        (policy.free_threshold() - order_amount).max(Decimal::ZERO)
    };
    let total_amount = order_amount.checked_add(delivery_fee).ok_or_else(|| {
        warn!(order_amount = %order_amount, "Order amount overflows with delivery fee");
        EngineError::invalid_amount(ORDER_AMOUNT_FIELD, order_amount, "out of range")
    })?;

    let breakdown = FeeBreakdown {
        order_amount: round_money(order_amount),
        delivery_fee: round_money(delivery_fee),
        total_amount: round_money(total_amount),
        is_free_delivery: is_free,
        savings: round_money(savings),
        amount_needed_for_free: round_money(amount_needed_for_free),
    };

    debug!(
        order_amount = %breakdown.order_amount,
        is_free_delivery = breakdown.is_free_delivery,
        delivery_fee = %breakdown.delivery_fee,
        total_amount = %breakdown.total_amount,
        "Calculated customer delivery fee"
    );

    Ok(breakdown)
}
