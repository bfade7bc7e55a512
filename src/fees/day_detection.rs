//! Day detection for the weekend fee rules.
//!
//! This module determines the day type (weekday, Saturday, Sunday) for a
//! transfer date. Only the calendar date matters; time of day and time zone
//! play no part in the fee decision.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Weekday or weekend classification of a transfer date.
///
/// Saturday and Sunday transfers carry a weekend surcharge and are subject
/// to the weekend amount limit. They are kept apart so audit output can
/// name the day.
///
/// ```
/// use transfer_fee_engine::fees::DayType;
///
/// assert!(DayType::Sunday.is_weekend());
/// assert_eq!(DayType::Sunday.label(), "Sunday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday - the base fee applies.
    Weekday,
    /// Saturday - weekend surcharge and weekend limit apply.
    Saturday,
    /// Sunday - weekend surcharge and weekend limit apply.
    Sunday,
}

impl DayType {
    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        self != DayType::Weekday
    }

    /// Capitalized name used in audit reasoning.
    pub fn label(self) -> &'static str {
        match self {
            DayType::Weekday => "Weekday",
            DayType::Saturday => "Saturday",
            DayType::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a transfer date by its Gregorian day of week.
///
/// ```
/// use transfer_fee_engine::fees::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// let friday = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
/// let saturday = friday.succ_opt().unwrap();
///
/// assert_eq!(get_day_type(friday), DayType::Weekday);
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
/// assert_eq!(get_day_type(saturday.succ_opt().unwrap()), DayType::Sunday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => {
            DayType::Weekday
        }
    }
}
