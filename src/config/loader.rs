//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading fee schedules
//! from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::fees::FeeSchedule;

use super::types::{ScheduleConfig, ScheduleMetadata};

/// Name of the schedule file inside a configuration directory.
pub const SCHEDULE_FILE: &str = "schedule.yaml";

/// Loads and provides access to a fee schedule configuration.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// └── schedule.yaml   # Metadata and fee parameters
/// ```
///
/// # Example
///
/// ```no_run
/// use transfer_fee_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// println!("Loaded schedule: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: ScheduleMetadata,
    schedule: FeeSchedule,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `schedule.yaml` is missing
    /// - the file contains invalid YAML or is missing a required field
    /// - a fee parameter is negative
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let schedule_path = path.as_ref().join(SCHEDULE_FILE);
        let path_str = schedule_path.display().to_string();

        let content =
            fs::read_to_string(&schedule_path).map_err(|_| EngineError::ConfigNotFound {
                path: path_str.clone(),
            })?;

        let loader = Self::parse(&content, &path_str)?;
        debug!(
            path = %path_str,
            code = %loader.metadata.code,
            version = %loader.metadata.version,
            "Loaded fee schedule"
        );
        Ok(loader)
    }

    /// Parses a schedule from an in-memory YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use transfer_fee_engine::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let yaml = r#"
    /// metadata:
    ///   code: promo
    ///   name: Promotional
    ///   version: "2026-01"
    /// fees:
    ///   base_rate: "0.005"
    ///   weekend_surcharge: "0"
    ///   minimum_fee: "1.00"
    ///   weekend_limit: "5000"
    /// "#;
    ///
    /// let loader = ConfigLoader::from_yaml_str(yaml)?;
    /// assert_eq!(loader.schedule().minimum_fee, Decimal::new(1, 0));
    /// assert_eq!(loader.metadata().currency, "USD");
    /// # Ok::<(), transfer_fee_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(yaml: &str) -> EngineResult<Self> {
        Self::parse(yaml, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        let config: ScheduleConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        config.fees.validate()?;

        Ok(Self {
            metadata: config.metadata,
            schedule: config.fees,
        })
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the fee schedule.
    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config_path() -> &'static str {
        "./config/standard"
    }

    #[test]
    fn test_load_standard_config() {
        let loader = ConfigLoader::load(config_path()).expect("Failed to load config");
        assert_eq!(loader.metadata().code, "standard");
        assert_eq!(loader.metadata().currency, "USD");
    }

    #[test]
    fn test_standard_config_matches_builtin_schedule() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(*loader.schedule(), FeeSchedule::standard());
    }

    #[test]
    fn test_missing_directory_returns_config_not_found() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.ends_with("schedule.yaml"));
            }
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("metadata: [unclosed");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_missing_field_returns_parse_error() {
        let yaml = r#"
metadata:
  code: broken
  name: Broken
  version: "1"
fees:
  base_rate: "0.01"
  weekend_surcharge: "5.00"
  minimum_fee: "2.00"
"#;
        match ConfigLoader::from_yaml_str(yaml) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert_eq!(path, "<inline>");
                assert!(message.contains("weekend_limit"));
            }
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_parameter_is_rejected() {
        let yaml = r#"
metadata:
  code: broken
  name: Broken
  version: "1"
fees:
  base_rate: "0.01"
  weekend_surcharge: "-5.00"
  minimum_fee: "2.00"
  weekend_limit: "1000"
"#;
        match ConfigLoader::from_yaml_str(yaml) {
            Err(EngineError::InvalidSchedule { field, .. }) => {
                assert_eq!(field, "weekend_surcharge");
            }
            other => panic!("expected InvalidSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_yaml_values_are_accepted() {
        let yaml = r#"
metadata:
  code: numeric
  name: Numeric
  version: "1"
  currency: USD
fees:
  base_rate: 0.02
  weekend_surcharge: 7.5
  minimum_fee: 3
  weekend_limit: 750
"#;
        let loader = ConfigLoader::from_yaml_str(yaml).unwrap();
        assert_eq!(loader.schedule().base_rate, dec("0.02"));
        assert_eq!(loader.schedule().weekend_surcharge, dec("7.5"));
        assert_eq!(loader.schedule().minimum_fee, dec("3"));
        assert_eq!(loader.schedule().weekend_limit, dec("750"));
    }
}
