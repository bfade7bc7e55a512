//! The transfer fee rule.
//!
//! A transfer fee depends only on the amount and the calendar date:
//!
//! - weekend transfers above the weekend limit have no fee and cannot be scheduled
//! - otherwise the fee is the base rate times the amount, plus the weekend
//!   surcharge on Saturdays and Sundays
//! - the result is raised to the minimum fee if it falls below it
//!
//! The rule is a pure function. It keeps no state, does not log and cannot fail,
//! so it is safe to call on every keystroke of a form or from many threads.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::day_detection::get_day_type;
use super::schedule::FeeSchedule;

/// The result of evaluating the fee rule.
///
/// `Unavailable` is a business outcome, not an error: it means no fee
/// schedule exists for the amount and date, and the transfer must not be
/// submitted.
///
/// # Example
///
/// ```
/// use transfer_fee_engine::fees::FeeOutcome;
/// use rust_decimal::Decimal;
///
/// let outcome = FeeOutcome::Fee(Decimal::new(1500, 2));
/// assert_eq!(outcome.fee(), Some(Decimal::new(15, 0)));
/// assert!(FeeOutcome::Unavailable.fee().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "fee", rename_all = "snake_case")]
pub enum FeeOutcome {
    /// The fee charged for the transfer.
    Fee(Decimal),
    /// No fee applies to this amount and date combination.
    Unavailable,
}

impl FeeOutcome {
    /// Returns the fee, or `None` when unavailable.
    pub fn fee(&self) -> Option<Decimal> {
        match self {
            FeeOutcome::Fee(fee) => Some(*fee),
            FeeOutcome::Unavailable => None,
        }
    }

    /// Returns true when a fee applies.
    pub fn is_available(&self) -> bool {
        matches!(self, FeeOutcome::Fee(_))
    }
}

impl From<FeeOutcome> for Option<Decimal> {
    fn from(outcome: FeeOutcome) -> Self {
        outcome.fee()
    }
}

impl FeeSchedule {
    /// Evaluates the fee rule for an amount and a transfer date.
    ///
    /// The amount is not validated: zero and negative amounts are run through
    /// the same formula. Arithmetic saturates instead of overflowing.
    ///
    /// # Example
    ///
    /// ```
    /// use transfer_fee_engine::fees::{FeeOutcome, FeeSchedule};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let schedule = FeeSchedule::standard();
    /// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
    ///
    /// assert_eq!(
    ///     schedule.evaluate(Decimal::new(1000, 0), saturday),
    ///     FeeOutcome::Fee(Decimal::new(15, 0))
    /// );
    /// assert_eq!(
    ///     schedule.evaluate(Decimal::new(100001, 2), saturday),
    ///     FeeOutcome::Unavailable
    /// );
    /// ```
    pub fn evaluate(&self, amount: Decimal, date: NaiveDate) -> FeeOutcome {
        let is_weekend = get_day_type(date).is_weekend();

        if is_weekend && amount > self.weekend_limit {
            return FeeOutcome::Unavailable;
        }

        let base_fee = amount.saturating_mul(self.base_rate);
        let surcharge = if is_weekend {
            self.weekend_surcharge
        } else {
            Decimal::ZERO
        };

        FeeOutcome::Fee(base_fee.saturating_add(surcharge).max(self.minimum_fee))
    }
}

/// Evaluates the standard fee rule.
///
/// Shorthand for `FeeSchedule::standard().evaluate(amount, date)`.
///
/// # Example
///
/// ```
/// use transfer_fee_engine::fees::{evaluate, FeeOutcome};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // 2026-01-13 is a Tuesday: 1% of $50 is $0.50, raised to the $2.00 floor
/// let tuesday = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
/// assert_eq!(evaluate(Decimal::new(50, 0), tuesday), FeeOutcome::Fee(Decimal::new(2, 0)));
/// ```
pub fn evaluate(amount: Decimal, date: NaiveDate) -> FeeOutcome {
    FeeSchedule::standard().evaluate(amount, date)
}
