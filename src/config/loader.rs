//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a fee policy
//! from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{FeePolicy, PolicyFile, PolicyMetadata};

/// The file name read from a policy directory.
pub const POLICY_FILE_NAME: &str = "policy.yaml";

/// Loads and provides access to a fee policy.
///
/// The `ConfigLoader` reads `policy.yaml` from a directory, validates the
/// policy values and keeps the result alongside the file's metadata.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── policy.yaml   # Metadata and policy values
/// ```
///
/// # Example
///
/// ```no_run
/// use delivery_fee_engine::config::ConfigLoader;
/// use delivery_fee_engine::FeeEngine;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded policy: {}", loader.metadata().name);
///
/// let engine = FeeEngine::new(*loader.policy());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: PolicyMetadata,
    policy: FeePolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `policy.yaml` is missing
    /// - The file contains invalid YAML or is missing a required field
    /// - The policy values break an invariant
    ///
    /// # Example
    ///
    /// ```no_run
    /// use delivery_fee_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), delivery_fee_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE_NAME);
        let path_str = policy_path.display().to_string();

        let content = fs::read_to_string(&policy_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses a policy document held in memory.
    ///
    /// # Example
    ///
    /// ```
    /// use delivery_fee_engine::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let yaml = r#"
    /// metadata:
    ///   name: Weekend promo
    ///   version: "promo-1"
    ///   effective_date: "2025-06-01"
    /// policy:
    ///   free_threshold: "149.00"
    ///   standard_fee: "40.00"
    ///   partner_earnings_when_paid: "30.00"
    ///   partner_earnings_when_free: "25.00"
    /// "#;
    ///
    /// let loader = ConfigLoader::from_yaml_str(yaml)?;
    /// assert_eq!(loader.policy().free_threshold(), Decimal::new(14900, 2));
    /// # Ok::<(), delivery_fee_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, source: &str) -> EngineResult<Self> {
        let file: PolicyFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        let policy = FeePolicy::try_from(file.policy)?;

        info!(
            source = %source,
            policy = %file.metadata.name,
            version = %file.metadata.version,
            effective_date = %file.metadata.effective_date,
            "Loaded fee policy"
        );

        Ok(Self {
            metadata: file.metadata,
            policy,
        })
    }

    /// Returns the validated fee policy.
    pub fn policy(&self) -> &FeePolicy {
        &self.policy
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn policy_yaml(paid: &str, free: &str) -> String {
        format!(
            r#"
metadata:
  name: Test policy
  version: "test"
  effective_date: "2025-01-01"
policy:
  free_threshold: "199.00"
  standard_fee: "40.00"
  partner_earnings_when_paid: "{}"
  partner_earnings_when_free: "{}"
"#,
            paid, free
        )
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().name, "Standard grocery delivery");
        assert_eq!(loader.metadata().version, "2025-01");
        assert_eq!(
            loader.metadata().effective_date,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_shipped_policy_matches_default() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(*loader.policy(), FeePolicy::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_str_parses_policy() {
        let loader = ConfigLoader::from_yaml_str(&policy_yaml("32.00", "20.00")).unwrap();

        assert_eq!(loader.policy().partner_earnings_when_paid(), dec("32.00"));
        assert_eq!(loader.policy().partner_earnings_when_free(), dec("20.00"));
    }

    #[test]
    fn test_numeric_yaml_values_are_accepted() {
        let yaml = r#"
metadata:
  name: Numeric
  version: "1"
  effective_date: "2025-01-01"
policy:
  free_threshold: 199
  standard_fee: 40
  partner_earnings_when_paid: 30
  partner_earnings_when_free: 25
"#;
        let loader = ConfigLoader::from_yaml_str(yaml).unwrap();
        assert_eq!(loader.policy().free_threshold(), dec("199"));
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("metadata: [unclosed");

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert_eq!(path, "<inline>");
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_returns_parse_error() {
        let yaml = r#"
metadata:
  name: Incomplete
  version: "1"
  effective_date: "2025-01-01"
policy:
  free_threshold: "199.00"
  standard_fee: "40.00"
"#;
        let result = ConfigLoader::from_yaml_str(yaml);

        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("partner_earnings_when_paid"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_policy_breaking_invariant_is_rejected() {
        let result = ConfigLoader::from_yaml_str(&policy_yaml("45.00", "25.00"));
        assert!(matches!(result, Err(EngineError::InvalidPolicy { .. })));
    }
}
