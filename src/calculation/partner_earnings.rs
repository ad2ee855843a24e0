//! Partner earnings calculation.
//!
//! This module computes what a delivery partner earns on an order and the
//! resulting platform margin or subsidy.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::FeePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{DeliveryMode, EarningsBreakdown};

use super::classification::qualifies_for_free_delivery;
use super::money::round_money;
use super::validation::{BONUS_FIELD, ORDER_AMOUNT_FIELD, validate_amount};

/// Calculates partner earnings and platform revenue for an order.
///
/// On a paid delivery the customer's fee covers the partner's pay and the
/// platform keeps the difference. On a free delivery the platform pays the
/// partner a fixed subsidy, which does not depend on order size.
///
/// # Arguments
///
/// * `order_amount` - The order's monetary amount, non-negative
/// * `bonus` - Optional bonus paid to the partner, non-negative
/// * `policy` - The fee policy to apply
///
/// # Returns
///
/// Returns an `EarningsBreakdown` with every monetary field at 2 decimal
/// places, or `InvalidAmount` naming whichever input was negative or too
/// large to add to the base earnings.
///
/// The free delivery check uses the order amount exactly as supplied.
///
/// # Examples
///
/// ```
/// use delivery_fee_engine::calculation::calculate_partner_earnings;
/// use delivery_fee_engine::config::FeePolicy;
/// use delivery_fee_engine::models::DeliveryMode;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let earnings = calculate_partner_earnings(
///     Decimal::from_str("250.00").unwrap(),
///     Some(Decimal::from_str("5.00").unwrap()),
///     &FeePolicy::default(),
/// ).unwrap();
///
/// assert_eq!(earnings.delivery_mode, DeliveryMode::FreeDelivery);
/// assert_eq!(earnings.total_earnings, Decimal::from_str("30.00").unwrap());
/// assert_eq!(earnings.platform_revenue, Decimal::from_str("-25.00").unwrap());
/// ```
pub fn calculate_partner_earnings(
    order_amount: Decimal,
    bonus: Option<Decimal>,
    policy: &FeePolicy,
) -> EngineResult<EarningsBreakdown> {
    let order_amount = validate_amount(ORDER_AMOUNT_FIELD, order_amount)?;
    let total_bonuses = match bonus {
        Some(bonus) => round_money(validate_amount(BONUS_FIELD, bonus)?),
        None => round_money(Decimal::ZERO),
    };

    let is_free = qualifies_for_free_delivery(order_amount, policy);
    let delivery_mode = DeliveryMode::from_free(is_free);

    let (base_earnings, customer_paid, platform_paid_to_partner, platform_revenue) =
        match delivery_mode {
            DeliveryMode::FreeDelivery => (
                policy.partner_earnings_when_free(),
                Decimal::ZERO,
                policy.partner_earnings_when_free(),
                -policy.partner_earnings_when_free(),
            ),
            DeliveryMode::PaidDelivery => (
                policy.partner_earnings_when_paid(),
                policy.standard_fee(),
                Decimal::ZERO,
                policy.standard_fee() - policy.partner_earnings_when_paid(),
            ),
        };

    let base_earnings = round_money(base_earnings);
    let total_earnings = base_earnings.checked_add(total_bonuses).ok_or_else(|| {
        warn!(bonus = %total_bonuses, "Bonus overflows with base earnings");
        EngineError::invalid_amount(BONUS_FIELD, total_bonuses, "out of range")
    })?;

    let breakdown = EarningsBreakdown {
        order_amount: round_money(order_amount),
        delivery_mode,
        base_earnings,
        total_bonuses,
        total_earnings: round_money(total_earnings),
        customer_paid: round_money(customer_paid),
        platform_paid_to_partner: round_money(platform_paid_to_partner),
        platform_revenue: round_money(platform_revenue),
    };

    debug!(
        order_amount = %breakdown.order_amount,
        delivery_mode = %breakdown.delivery_mode,
        total_earnings = %breakdown.total_earnings,
        platform_revenue = %breakdown.platform_revenue,
        "Calculated partner earnings"
    );

    Ok(breakdown)
}
