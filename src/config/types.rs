//! Configuration types for the delivery fee policy.
//!
//! This module contains the strongly-typed policy value held by the engine
//! and the structures deserialized from `policy.yaml`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The delivery fee policy.
///
/// A policy is validated once when it is built and is immutable afterwards.
/// The engine holds its own copy, so every computation sees the same values.
///
/// # Invariants
///
/// - Every value is non-negative.
/// - Partner earnings on a paid delivery are less than the standard fee.
/// - Partner earnings on a free delivery are less than the standard fee.
///
/// # Example
///
/// ```
/// use delivery_fee_engine::config::FeePolicy;
/// use rust_decimal::Decimal;
///
/// let policy = FeePolicy::default();
/// assert_eq!(policy.free_threshold(), Decimal::new(19900, 2));
/// assert_eq!(policy.standard_fee(), Decimal::new(4000, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeePolicy {
    free_threshold: Decimal,
    standard_fee: Decimal,
    partner_earnings_when_paid: Decimal,
    partner_earnings_when_free: Decimal,
}

impl FeePolicy {
    /// Creates a policy from its component values, checking the invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] if any value is negative or if
    /// either partner earnings figure is not below the standard fee.
    pub fn new(
        free_threshold: Decimal,
        standard_fee: Decimal,
        partner_earnings_when_paid: Decimal,
        partner_earnings_when_free: Decimal,
    ) -> EngineResult<Self> {
        let policy = Self {
            free_threshold,
            standard_fee,
            partner_earnings_when_paid,
            partner_earnings_when_free,
        };
        policy.validate()?;
        Ok(policy)
    }

    fn validate(&self) -> EngineResult<()> {
        let values = [
            ("free_threshold", self.free_threshold),
            ("standard_fee", self.standard_fee),
            ("partner_earnings_when_paid", self.partner_earnings_when_paid),
            ("partner_earnings_when_free", self.partner_earnings_when_free),
        ];
        for (name, value) in values {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidPolicy {
                    message: format!("{} must not be negative, got {}", name, value),
                });
            }
        }

        if self.partner_earnings_when_paid >= self.standard_fee {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "partner_earnings_when_paid ({}) must be less than standard_fee ({})",
                    self.partner_earnings_when_paid, self.standard_fee
                ),
            });
        }

        if self.partner_earnings_when_free >= self.standard_fee {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "partner_earnings_when_free ({}) must be less than standard_fee ({})",
                    self.partner_earnings_when_free, self.standard_fee
                ),
            });
        }

        Ok(())
    }

    /// Order amount at or above which delivery is free.
    pub fn free_threshold(&self) -> Decimal {
        self.free_threshold
    }

    /// Fee charged on orders below the threshold.
    pub fn standard_fee(&self) -> Decimal {
        self.standard_fee
    }

    /// Partner base pay when the customer paid for delivery.
    pub fn partner_earnings_when_paid(&self) -> Decimal {
        self.partner_earnings_when_paid
    }

    /// Partner base pay on a free delivery, paid by the platform.
    pub fn partner_earnings_when_free(&self) -> Decimal {
        self.partner_earnings_when_free
    }
}

impl Default for FeePolicy {
    /// The standard policy: free over 199.00, otherwise 40.00; partners earn
    /// 30.00 on paid and 25.00 on free deliveries.
    fn default() -> Self {
        Self {
            free_threshold: Decimal::new(19900, 2),
            standard_fee: Decimal::new(4000, 2),
            partner_earnings_when_paid: Decimal::new(3000, 2),
            partner_earnings_when_free: Decimal::new(2500, 2),
        }
    }
}

/// Metadata about a policy file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PolicyMetadata {
    /// Human-readable name of the policy.
    pub name: String,
    /// The version label of the policy.
    pub version: String,
    /// The date from which the policy applies.
    pub effective_date: NaiveDate,
}

/// The `policy` section of `policy.yaml`, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicySection {
    /// Order amount at or above which delivery is free.
    pub free_threshold: Decimal,
    /// Fee charged on orders below the threshold.
    pub standard_fee: Decimal,
    /// Partner base pay on a paid delivery.
    pub partner_earnings_when_paid: Decimal,
    /// Partner base pay on a free delivery.
    pub partner_earnings_when_free: Decimal,
}

impl TryFrom<PolicySection> for FeePolicy {
    type Error = EngineError;

    fn try_from(section: PolicySection) -> EngineResult<Self> {
        FeePolicy::new(
            section.free_threshold,
            section.standard_fee,
            section.partner_earnings_when_paid,
            section.partner_earnings_when_free,
        )
    }
}

/// Structure of `policy.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Policy metadata.
    pub metadata: PolicyMetadata,
    /// Policy values.
    pub policy: PolicySection,
}
