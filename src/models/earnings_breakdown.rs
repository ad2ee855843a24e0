//! Partner earnings and platform margin for a delivery.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether the customer paid for delivery.
///
/// # Example
///
/// ```
/// use delivery_fee_engine::models::DeliveryMode;
///
/// assert_eq!(DeliveryMode::FreeDelivery.to_string(), "FreeDelivery");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryMode {
    /// The order met the threshold; the platform subsidizes the partner.
    FreeDelivery,
    /// The customer paid the standard fee.
    PaidDelivery,
}

impl DeliveryMode {
    /// Returns the mode for a free/paid classification.
    pub fn from_free(is_free: bool) -> Self {
        if is_free {
            DeliveryMode::FreeDelivery
        } else {
            DeliveryMode::PaidDelivery
        }
    }
}

impl std::fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryMode::FreeDelivery => write!(f, "FreeDelivery"),
            DeliveryMode::PaidDelivery => write!(f, "PaidDelivery"),
        }
    }
}

/// What the delivery partner earns on an order and what it costs the platform.
///
/// `platform_revenue` is signed: negative when the platform pays the partner
/// out of pocket, positive when the customer's fee covers the partner with
/// margin left over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsBreakdown {
    /// The order amount the earnings were computed for.
    pub order_amount: Decimal,
    /// Free or paid delivery.
    pub delivery_mode: DeliveryMode,
    /// The partner's base pay for this delivery.
    pub base_earnings: Decimal,
    /// Bonuses added on top of the base pay.
    pub total_bonuses: Decimal,
    /// Base earnings plus bonuses.
    pub total_earnings: Decimal,
    /// The delivery fee the customer paid.
    pub customer_paid: Decimal,
    /// The subsidy the platform pays the partner on a free delivery.
    pub platform_paid_to_partner: Decimal,
    /// Net effect on the platform for this delivery.
    pub platform_revenue: Decimal,
}

impl EarningsBreakdown {
    /// Returns true if this was a free delivery.
    pub fn is_free_delivery(&self) -> bool {
        self.delivery_mode == DeliveryMode::FreeDelivery
    }
}
