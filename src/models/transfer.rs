//! Scheduled transfer model and its status.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AccountNumber;

/// Lifecycle status of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    /// Scheduled, not yet executed.
    Pending,
    /// Executed.
    Completed,
    /// Cancelled before execution.
    Cancelled,
}

impl TransferStatus {
    /// Returns the lowercase name used in JSON and in status filters.
    pub fn as_str(self) -> &'static str {
        match self {
            TransferStatus::Pending => "pending",
            TransferStatus::Completed => "completed",
            TransferStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferStatus::Pending => write!(f, "Pending"),
            TransferStatus::Completed => write!(f, "Completed"),
            TransferStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl FromStr for TransferStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(TransferStatus::Pending),
            "completed" => Ok(TransferStatus::Completed),
            "cancelled" => Ok(TransferStatus::Cancelled),
            other => Err(format!("unknown transfer status: {}", other)),
        }
    }
}

/// A transfer that has been priced and scheduled.
///
/// # Example
///
/// ```
/// use transfer_fee_engine::models::{AccountNumber, Transfer, TransferStatus};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let transfer = Transfer {
///     id: Uuid::new_v4(),
///     origin_account: AccountNumber::parse("1234567890").unwrap(),
///     destination_account: AccountNumber::parse("0987654321").unwrap(),
///     amount: Decimal::new(1000, 0),
///     fee: Decimal::new(15, 0),
///     transfer_date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
///     scheduled_at: Utc::now(),
///     status: TransferStatus::Pending,
/// };
/// assert_eq!(transfer.total(), Decimal::new(1015, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Unique identifier of the transfer.
    pub id: Uuid,
    /// The account the money leaves.
    pub origin_account: AccountNumber,
    /// The account the money arrives in.
    pub destination_account: AccountNumber,
    /// The transferred amount.
    pub amount: Decimal,
    /// The fee charged, as returned by the fee rule.
    pub fee: Decimal,
    /// The date the transfer executes.
    pub transfer_date: NaiveDate,
    /// When the transfer was scheduled.
    pub scheduled_at: DateTime<Utc>,
    /// Current status.
    pub status: TransferStatus,
}

impl Transfer {
    /// The amount debited from the origin account: amount plus fee.
    pub fn total(&self) -> Decimal {
        self.amount + self.fee
    }

    /// Returns true if the account is the origin or the destination.
    pub fn involves(&self, account: &str) -> bool {
        self.origin_account.as_str() == account || self.destination_account.as_str() == account
    }
}
