//! Transfer confirmation summary.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AccountNumber, ValidatedTransfer, format_usd};

/// The details a user reviews before confirming a transfer.
///
/// # Example
///
/// ```
/// use transfer_fee_engine::models::{TransferConfirmation, TransferRequest};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = TransferRequest {
///     origin_account: "1234567890".to_string(),
///     destination_account: "0987654321".to_string(),
///     amount: Decimal::new(1000, 0),
///     transfer_date: NaiveDate::from_ymd_opt(2026, 1, 20),
/// };
/// let validated = request.validate(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()).unwrap();
///
/// let confirmation = TransferConfirmation::new(&validated, Decimal::new(10, 0));
/// assert_eq!(confirmation.total(), Decimal::new(1010, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferConfirmation {
    /// The account the money leaves.
    pub origin_account: AccountNumber,
    /// The account the money arrives in.
    pub destination_account: AccountNumber,
    /// The transferred amount.
    pub amount: Decimal,
    /// The fee to be charged.
    pub fee: Decimal,
    /// The date the transfer executes.
    pub transfer_date: NaiveDate,
}

impl TransferConfirmation {
    /// Builds a confirmation from a validated request and its fee.
    pub fn new(transfer: &ValidatedTransfer, fee: Decimal) -> Self {
        Self {
            origin_account: transfer.origin_account.clone(),
            destination_account: transfer.destination_account.clone(),
            amount: transfer.amount,
            fee,
            transfer_date: transfer.transfer_date,
        }
    }

    /// Amount plus fee.
    pub fn total(&self) -> Decimal {
        self.amount + self.fee
    }
}

impl fmt::Display for TransferConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "From: {}", self.origin_account)?;
        writeln!(f, "To: {}", self.destination_account)?;
        writeln!(f, "Amount: {}", format_usd(self.amount))?;
        writeln!(f, "Fee: {}", format_usd(self.fee))?;
        writeln!(f, "Transfer Date: {}", self.transfer_date.format("%B %-d, %Y"))?;
        write!(f, "Total: {}", format_usd(self.total()))
    }
}
