//! Display-only fee previews.
//!
//! A preview is evaluated again each time the amount or date changes, before
//! anything is submitted. It uses the same rule as scheduling, so the fee a
//! user sees is always the fee that gets charged.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::NO_APPLICABLE_FEE_MESSAGE;
use crate::models::format_usd;

use super::fee_rule::FeeOutcome;
use super::schedule::FeeSchedule;

/// A fee evaluated for display.
///
/// # Example
///
/// ```
/// use transfer_fee_engine::fees::{FeePreview, FeeSchedule};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// let schedule = FeeSchedule::standard();
///
/// let preview = FeePreview::new(Decimal::new(500, 0), saturday, &schedule);
/// assert_eq!(preview.to_string(), "$10.00");
///
/// let blocked = FeePreview::new(Decimal::new(5000, 0), saturday, &schedule);
/// assert_eq!(blocked.to_string(), "Not Available");
/// assert!(!blocked.can_submit());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeePreview {
    /// The amount the preview was evaluated for.
    pub amount: Decimal,
    /// The transfer date the preview was evaluated for.
    pub date: NaiveDate,
    /// The fee rule outcome.
    pub outcome: FeeOutcome,
}

impl FeePreview {
    /// Evaluates the fee rule for display.
    pub fn new(amount: Decimal, date: NaiveDate, schedule: &FeeSchedule) -> Self {
        Self {
            amount,
            date,
            outcome: schedule.evaluate(amount, date),
        }
    }

    /// Returns true when the transfer may be submitted.
    pub fn can_submit(&self) -> bool {
        self.outcome.is_available()
    }

    /// The amount plus the fee, when a fee applies.
    pub fn total(&self) -> Option<Decimal> {
        self.outcome.fee().map(|fee| self.amount + fee)
    }

    /// The explanation to show when no fee applies.
    pub fn message(&self) -> Option<&'static str> {
        match self.outcome {
            FeeOutcome::Fee(_) => None,
            FeeOutcome::Unavailable => Some(NO_APPLICABLE_FEE_MESSAGE),
        }
    }
}

impl fmt::Display for FeePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            FeeOutcome::Fee(fee) => f.write_str(&format_usd(fee)),
            FeeOutcome::Unavailable => f.write_str("Not Available"),
        }
    }
}
