//! Delivery Fee Engine for grocery delivery.
//!
//! This crate decides whether an order ships free, what the customer pays
//! for delivery, what the delivery partner earns, and what margin or subsidy
//! the platform is left with. All money is handled as exact decimals rounded
//! half-up to 2 places.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;

pub use engine::FeeEngine;
