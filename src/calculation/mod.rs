//! Calculation logic for the Delivery Fee Engine.
//!
//! This module contains the free delivery classification shared by every
//! calculation, the customer fee calculation, the partner earnings
//! calculation, monetary rounding, and validation of incoming amounts.

mod classification;
mod customer_fee;
mod money;
mod partner_earnings;
mod validation;

pub use classification::qualifies_for_free_delivery;
pub use customer_fee::calculate_customer_fee;
pub use money::{MONEY_DECIMAL_PLACES, round_money};
pub use partner_earnings::calculate_partner_earnings;
pub use validation::{
    BONUS_FIELD, ORDER_AMOUNT_FIELD, amount_from_f64, parse_amount, validate_amount,
};
