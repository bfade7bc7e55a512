//! Configuration types for fee schedules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::fees::FeeSchedule;

/// Metadata about a fee schedule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleMetadata {
    /// Short code identifying the schedule (e.g., "standard").
    pub code: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version or effective date of the schedule.
    pub version: String,
    /// ISO 4217 currency the amounts are expressed in.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Schedule configuration file structure (`schedule.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Schedule metadata.
    pub metadata: ScheduleMetadata,
    /// Fee rule parameters.
    pub fees: FeeSchedule,
}
