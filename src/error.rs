//! Error types for the Transfer Fee Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while configuring fee schedules
//! and scheduling transfers.
//!
//! Note that a fee rule returning "unavailable" is not an error in itself.
//! It only becomes [`EngineError::NoApplicableFee`] when a caller tries to
//! schedule a transfer that has no fee.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Message shown to the user when a transfer has no applicable fee.
pub const NO_APPLICABLE_FEE_MESSAGE: &str =
    "No applicable fee exists for this transfer date and amount combination";

/// The main error type for the Transfer Fee Engine.
///
/// # Example
///
/// ```
/// use transfer_fee_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/schedule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schedule.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A fee schedule parameter is out of range.
    #[error("Invalid fee schedule field '{field}': {message}")]
    InvalidSchedule {
        /// The schedule field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A required request field was not provided.
    #[error("Missing field '{field}': {message}")]
    MissingField {
        /// The field that was missing.
        field: String,
        /// The user-facing message for the missing field.
        message: String,
    },

    /// An account number was not exactly 10 digits.
    #[error("Invalid account field '{field}': {message}")]
    InvalidAccount {
        /// The request field holding the account number.
        field: String,
        /// A description of what made the account number invalid.
        message: String,
    },

    /// The transfer amount was zero, negative or not a number.
    #[error("Invalid amount: {message}")]
    InvalidAmount {
        /// A description of what made the amount invalid.
        message: String,
    },

    /// The transfer date cannot be scheduled.
    #[error("Invalid transfer date {date}: {message}")]
    InvalidTransferDate {
        /// The requested transfer date.
        date: NaiveDate,
        /// A description of what made the date invalid.
        message: String,
    },

    /// The fee rule returned no fee for this amount and date.
    #[error("No applicable fee exists for this transfer date and amount combination")]
    NoApplicableFee {
        /// The requested transfer amount.
        amount: Decimal,
        /// The requested transfer date.
        date: NaiveDate,
    },

    /// No transfer with the given id exists in the book.
    #[error("Transfer not found with id: {id}")]
    TransferNotFound {
        /// The id that was looked up.
        id: Uuid,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/schedule.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/schedule.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_schedule_displays_field_and_message() {
        let error = EngineError::InvalidSchedule {
            field: "minimum_fee".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid fee schedule field 'minimum_fee': must not be negative"
        );
    }

    #[test]
    fn test_invalid_account_displays_field_and_message() {
        let error = EngineError::InvalidAccount {
            field: "origin_account".to_string(),
            message: "Origin account must be exactly 10 digits".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid account field 'origin_account': Origin account must be exactly 10 digits"
        );
    }

    #[test]
    fn test_missing_field_displays_field_and_message() {
        let error = EngineError::MissingField {
            field: "transfer_date".to_string(),
            message: "Transfer date is required".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Missing field 'transfer_date': Transfer date is required"
        );
    }

    #[test]
    fn test_invalid_transfer_date_displays_date() {
        let error = EngineError::InvalidTransferDate {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            message: "must be after 2025-01-01".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid transfer date 2025-01-01: must be after 2025-01-01"
        );
    }

    #[test]
    fn test_no_applicable_fee_uses_user_facing_message() {
        let error = EngineError::NoApplicableFee {
            amount: Decimal::new(150000, 2),
            date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
        };
        assert_eq!(error.to_string(), NO_APPLICABLE_FEE_MESSAGE);
    }

    #[test]
    fn test_transfer_not_found_displays_id() {
        let id = Uuid::nil();
        let error = EngineError::TransferNotFound { id };
        assert_eq!(
            error.to_string(),
            "Transfer not found with id: 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_amount_error() -> EngineResult<()> {
            Err(EngineError::InvalidAmount {
                message: "Amount must be a positive number".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_amount_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
