//! Fee logic for the Transfer Fee Engine.
//!
//! This module contains the transfer fee rule and everything built directly on
//! it: day detection for the weekend rules, the schedule parameters, an audited
//! assessment that explains a fee, and display-only previews.
//!
//! Every consumer in the crate prices transfers through [`FeeSchedule::evaluate`],
//! so there is exactly one copy of the formula.

mod assessment;
mod day_detection;
mod fee_rule;
mod preview;
mod schedule;

pub use assessment::{FeeAssessment, FeeBreakdown, TRANSFER_FEE_RULE_ID, assess_fee};
pub use day_detection::{DayType, get_day_type};
pub use fee_rule::{FeeOutcome, evaluate};
pub use preview::FeePreview;
pub use schedule::{
    FeeSchedule, STANDARD_BASE_RATE, STANDARD_MINIMUM_FEE, STANDARD_WEEKEND_LIMIT,
    STANDARD_WEEKEND_SURCHARGE,
};
