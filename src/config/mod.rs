//! Configuration loading and management for the Transfer Fee Engine.
//!
//! This module provides functionality to load fee schedules from YAML files.
//! The standard schedule is also compiled in as [`crate::fees::FeeSchedule::standard`],
//! so loading configuration is only needed to run a different schedule.
//!
//! # Example
//!
//! ```no_run
//! use transfer_fee_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Loaded schedule: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, SCHEDULE_FILE};
pub use types::{ScheduleConfig, ScheduleMetadata};
