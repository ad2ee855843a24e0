//! Configuration loading and management for the Delivery Fee Engine.
//!
//! This module provides the [`FeePolicy`] value and functionality to load
//! it from a YAML policy file.
//!
//! # Example
//!
//! ```no_run
//! use delivery_fee_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, POLICY_FILE_NAME};
pub use types::{FeePolicy, PolicyFile, PolicyMetadata, PolicySection};
