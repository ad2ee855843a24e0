//! The fee policy engine.
//!
//! [`FeeEngine`] binds a validated [`FeePolicy`] to the calculation
//! functions so callers do not have to thread the policy through every call.

use rust_decimal::Decimal;

use crate::calculation::{
    ORDER_AMOUNT_FIELD, calculate_customer_fee, calculate_partner_earnings,
    qualifies_for_free_delivery, validate_amount,
};
use crate::config::{ConfigLoader, FeePolicy};
use crate::error::EngineResult;
use crate::models::{DeliveryMode, EarningsBreakdown, FeeBreakdown};

/// Computes customer fees and partner earnings under a single policy.
///
/// The engine holds no mutable state. It is `Send + Sync` and cheap to
/// clone, so one instance can serve any number of concurrent callers.
///
/// # Example
///
/// ```
/// use delivery_fee_engine::FeeEngine;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let engine = FeeEngine::default();
/// let order = Decimal::from_str("150.00").unwrap();
///
/// let fee = engine.compute_customer_fee(order).unwrap();
/// let earnings = engine.compute_partner_earnings(order, None).unwrap();
///
/// assert_eq!(fee.delivery_fee, earnings.customer_paid);
/// assert_eq!(earnings.platform_revenue, Decimal::from_str("10.00").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FeeEngine {
    policy: FeePolicy,
}

impl FeeEngine {
    /// Creates an engine for the given policy.
    pub fn new(policy: FeePolicy) -> Self {
        Self { policy }
    }

    /// Creates an engine from a loaded policy file.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(*config.policy())
    }

    /// Returns the policy this engine applies.
    pub fn policy(&self) -> FeePolicy {
        self.policy
    }

    /// Computes what the customer pays for delivery on an order.
    ///
    /// See [`calculate_customer_fee`].
    pub fn compute_customer_fee(&self, order_amount: Decimal) -> EngineResult<FeeBreakdown> {
        calculate_customer_fee(order_amount, &self.policy)
    }

    /// Computes what the partner earns on an order.
    ///
    /// See [`calculate_partner_earnings`].
    pub fn compute_partner_earnings(
        &self,
        order_amount: Decimal,
        bonus: Option<Decimal>,
    ) -> EngineResult<EarningsBreakdown> {
        calculate_partner_earnings(order_amount, bonus, &self.policy)
    }

    /// Classifies an order as free or paid delivery without computing a
    /// full breakdown.
    pub fn delivery_mode(&self, order_amount: Decimal) -> EngineResult<DeliveryMode> {
        let order_amount = validate_amount(ORDER_AMOUNT_FIELD, order_amount)?;
        Ok(DeliveryMode::from_free(qualifies_for_free_delivery(
            order_amount,
            &self.policy,
        )))
    }
}
