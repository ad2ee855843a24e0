//! Core data models for the Delivery Fee Engine.
//!
//! This module contains the breakdown types returned by fee and earnings
//! calculations.

mod earnings_breakdown;
mod fee_breakdown;

pub use earnings_breakdown::{DeliveryMode, EarningsBreakdown};
pub use fee_breakdown::FeeBreakdown;
