//! Customer-facing fee breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What the customer pays for delivery on a single order.
///
/// All monetary fields are rounded to 2 decimal places.
///
/// # Example
///
/// ```
/// use delivery_fee_engine::FeeEngine;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let engine = FeeEngine::default();
/// let fee = engine.compute_customer_fee(Decimal::from_str("150.00").unwrap()).unwrap();
///
/// assert!(fee.is_paid());
/// assert_eq!(fee.total_amount, Decimal::from_str("190.00").unwrap());
/// assert_eq!(fee.amount_needed_for_free, Decimal::from_str("49.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    /// The order amount the fee was computed for.
    pub order_amount: Decimal,
    /// The delivery fee charged to the customer.
    pub delivery_fee: Decimal,
    /// Order amount plus delivery fee.
    pub total_amount: Decimal,
    /// True when the order met the free delivery threshold.
    pub is_free_delivery: bool,
    /// The fee waived on a free delivery, zero otherwise.
    pub savings: Decimal,
    /// How much more the customer must spend to get free delivery.
    pub amount_needed_for_free: Decimal,
}

impl FeeBreakdown {
    /// Returns true if the customer is charged a delivery fee.
    pub fn is_paid(&self) -> bool {
        !self.is_free_delivery
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn paid_breakdown() -> FeeBreakdown {
        FeeBreakdown {
            order_amount: dec("150.00"),
            delivery_fee: dec("40.00"),
            total_amount: dec("190.00"),
            is_free_delivery: false,
            savings: dec("0.00"),
            amount_needed_for_free: dec("49.00"),
        }
    }

    #[test]
    fn test_is_paid_mirrors_free_flag() {
        let paid = paid_breakdown();
        assert!(paid.is_paid());

        let free = FeeBreakdown {
            is_free_delivery: true,
            ..paid
        };
        assert!(!free.is_paid());
    }

    #[test]
    fn test_serializes_with_camel_case_fields_and_two_decimals() {
        let json = serde_json::to_value(paid_breakdown()).unwrap();

        assert_eq!(json["orderAmount"], "150.00");
        assert_eq!(json["deliveryFee"], "40.00");
        assert_eq!(json["totalAmount"], "190.00");
        assert_eq!(json["isFreeDelivery"], false);
        assert_eq!(json["savings"], "0.00");
        assert_eq!(json["amountNeededForFree"], "49.00");
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "orderAmount": "250.00",
            "deliveryFee": "0.00",
            "totalAmount": "250.00",
            "isFreeDelivery": true,
            "savings": "40.00",
            "amountNeededForFree": "0.00"
        }"#;

        let breakdown: FeeBreakdown = serde_json::from_str(json).unwrap();
        assert!(breakdown.is_free_delivery);
        assert_eq!(breakdown.savings, dec("40"));
        assert_eq!(breakdown.total_amount, dec("250"));
    }
}
