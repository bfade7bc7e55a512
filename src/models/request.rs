//! Transfer request model and its validation.
//!
//! A [`TransferRequest`] holds what a user entered. [`TransferRequest::validate`]
//! turns it into a [`ValidatedTransfer`] with typed fields, or reports the first
//! field that is wrong with the message the user should see.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::AccountNumber;

/// A transfer as entered by the user, before validation.
///
/// # Example
///
/// ```
/// use transfer_fee_engine::models::TransferRequest;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = TransferRequest {
///     origin_account: "1234567890".to_string(),
///     destination_account: "0987654321".to_string(),
///     amount: Decimal::new(500, 0),
///     transfer_date: NaiveDate::from_ymd_opt(2026, 1, 20),
/// };
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let validated = request.validate(today).unwrap();
/// assert_eq!(validated.origin_account.as_str(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// The account the money leaves.
    pub origin_account: String,
    /// The account the money arrives in.
    pub destination_account: String,
    /// The amount to transfer.
    pub amount: Decimal,
    /// The date the transfer should execute.
    #[serde(default)]
    pub transfer_date: Option<NaiveDate>,
}

/// A transfer request whose fields passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedTransfer {
    /// The account the money leaves.
    pub origin_account: AccountNumber,
    /// The account the money arrives in.
    pub destination_account: AccountNumber,
    /// The amount to transfer, strictly positive.
    pub amount: Decimal,
    /// The date the transfer executes, strictly after the scheduling date.
    pub transfer_date: NaiveDate,
}

impl TransferRequest {
    /// Validates the request against the scheduling date `today`.
    ///
    /// Fields are checked in order origin, destination, amount, date, and the
    /// first failure is returned:
    ///
    /// - origin and destination must be exactly 10 digits
    /// - the amount must be positive
    /// - the transfer date must be present and later than `today`
    pub fn validate(&self, today: NaiveDate) -> EngineResult<ValidatedTransfer> {
        let origin_account = AccountNumber::parse(&self.origin_account).ok_or_else(|| {
            EngineError::InvalidAccount {
                field: "origin_account".to_string(),
                message: "Origin account must be exactly 10 digits".to_string(),
            }
        })?;

        let destination_account =
            AccountNumber::parse(&self.destination_account).ok_or_else(|| {
                EngineError::InvalidAccount {
                    field: "destination_account".to_string(),
                    message: "Destination account must be exactly 10 digits".to_string(),
                }
            })?;

        if self.amount <= Decimal::ZERO {
            return Err(EngineError::InvalidAmount {
                message: "Amount must be a positive number".to_string(),
            });
        }

        let transfer_date = self.transfer_date.ok_or_else(|| EngineError::MissingField {
            field: "transfer_date".to_string(),
            message: "Transfer date is required".to_string(),
        })?;

        if transfer_date <= today {
            return Err(EngineError::InvalidTransferDate {
                date: transfer_date,
                message: format!("Transfer date must be after {}", today),
            });
        }

        Ok(ValidatedTransfer {
            origin_account,
            destination_account,
            amount: self.amount,
            transfer_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
    }

    fn create_test_request() -> TransferRequest {
        TransferRequest {
            origin_account: "1234567890".to_string(),
            destination_account: "0987654321".to_string(),
            amount: dec("500"),
            transfer_date: NaiveDate::from_ymd_opt(2026, 1, 20),
        }
    }

    #[test]
    fn test_valid_request() {
        let validated = create_test_request().validate(today()).unwrap();

        assert_eq!(validated.origin_account.as_str(), "1234567890");
        assert_eq!(validated.destination_account.as_str(), "0987654321");
        assert_eq!(validated.amount, dec("500"));
        assert_eq!(
            validated.transfer_date,
            NaiveDate::from_ymd_opt(2026, 1, 20).unwrap()
        );
    }

    #[test]
    fn test_invalid_origin_account() {
        let mut request = create_test_request();
        request.origin_account = "12345".to_string();

        match request.validate(today()) {
            Err(EngineError::InvalidAccount { field, message }) => {
                assert_eq!(field, "origin_account");
                assert_eq!(message, "Origin account must be exactly 10 digits");
            }
            other => panic!("expected InvalidAccount, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_destination_account() {
        let mut request = create_test_request();
        request.destination_account = "abcdefghij".to_string();

        match request.validate(today()) {
            Err(EngineError::InvalidAccount { field, message }) => {
                assert_eq!(field, "destination_account");
                assert_eq!(message, "Destination account must be exactly 10 digits");
            }
            other => panic!("expected InvalidAccount, got {:?}", other),
        }
    }

    #[test]
    fn test_origin_is_reported_before_destination() {
        let mut request = create_test_request();
        request.origin_account = String::new();
        request.destination_account = String::new();

        match request.validate(today()) {
            Err(EngineError::InvalidAccount { field, .. }) => assert_eq!(field, "origin_account"),
            other => panic!("expected InvalidAccount, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_and_negative_amounts_rejected() {
        for amount in ["0", "-0.01", "-500"] {
            let mut request = create_test_request();
            request.amount = dec(amount);
            assert!(
                matches!(
                    request.validate(today()),
                    Err(EngineError::InvalidAmount { .. })
                ),
                "amount {} should be rejected",
                amount
            );
        }
    }

    #[test]
    fn test_smallest_positive_amount_accepted() {
        let mut request = create_test_request();
        request.amount = dec("0.01");
        assert!(request.validate(today()).is_ok());
    }

    #[test]
    fn test_missing_transfer_date() {
        let mut request = create_test_request();
        request.transfer_date = None;

        match request.validate(today()) {
            Err(EngineError::MissingField { field, message }) => {
                assert_eq!(field, "transfer_date");
                assert_eq!(message, "Transfer date is required");
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_today_and_past_dates_rejected() {
        for day in [today(), today().pred_opt().unwrap()] {
            let mut request = create_test_request();
            request.transfer_date = Some(day);
            assert!(matches!(
                request.validate(today()),
                Err(EngineError::InvalidTransferDate { .. })
            ));
        }
    }

    #[test]
    fn test_tomorrow_accepted() {
        let mut request = create_test_request();
        request.transfer_date = today().succ_opt();
        assert!(request.validate(today()).is_ok());
    }

    #[test]
    fn test_deserialize_request_without_date() {
        let json = r#"{
            "origin_account": "1234567890",
            "destination_account": "0987654321",
            "amount": "250.00"
        }"#;

        let request: TransferRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.amount, dec("250.00"));
        assert!(request.transfer_date.is_none());
    }
}
