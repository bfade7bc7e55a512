//! Audited fee assessment.
//!
//! [`assess_fee`] evaluates the same rule as [`FeeSchedule::evaluate`] but also
//! returns the intermediate amounts and an [`AuditStep`] explaining the
//! decision. It is still pure; the audit step is data, not a log entry.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, format_usd};

use super::day_detection::{DayType, get_day_type};
use super::fee_rule::FeeOutcome;
use super::schedule::FeeSchedule;

/// Rule id recorded on every fee audit step.
pub const TRANSFER_FEE_RULE_ID: &str = "transfer_fee";

/// How a fee was put together.
///
/// For an unavailable outcome the amounts are zero and `floor_applied` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// The day type of the transfer date.
    pub day_type: DayType,
    /// Base rate times amount.
    pub base_fee: Decimal,
    /// Weekend surcharge, zero on weekdays.
    pub surcharge: Decimal,
    /// True when the minimum fee replaced `base_fee + surcharge`.
    pub floor_applied: bool,
}

/// The result of an audited fee assessment.
#[derive(Debug, Clone)]
pub struct FeeAssessment {
    /// The fee outcome, identical to [`FeeSchedule::evaluate`].
    pub outcome: FeeOutcome,
    /// The intermediate amounts.
    pub breakdown: FeeBreakdown,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Assesses the fee for a transfer and records how it was reached.
///
/// # Example
///
/// ```
/// use transfer_fee_engine::fees::{assess_fee, FeeOutcome, FeeSchedule};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
/// let assessment = assess_fee(Decimal::new(100, 0), sunday, &FeeSchedule::standard());
///
/// assert_eq!(assessment.outcome, FeeOutcome::Fee(Decimal::new(6, 0)));
/// assert_eq!(assessment.breakdown.surcharge, Decimal::new(5, 0));
/// assert!(!assessment.breakdown.floor_applied);
/// ```
pub fn assess_fee(amount: Decimal, date: NaiveDate, schedule: &FeeSchedule) -> FeeAssessment {
    let day_type = get_day_type(date);
    let outcome = schedule.evaluate(amount, date);

    let input = serde_json::json!({
        "amount": amount.normalize().to_string(),
        "transfer_date": date.to_string(),
        "day_type": day_type,
        "base_rate": schedule.base_rate.normalize().to_string(),
        "weekend_surcharge": schedule.weekend_surcharge.normalize().to_string(),
        "minimum_fee": schedule.minimum_fee.normalize().to_string(),
        "weekend_limit": schedule.weekend_limit.normalize().to_string()
    });

    let FeeOutcome::Fee(fee) = outcome else {
        let audit_step = AuditStep {
            rule_id: TRANSFER_FEE_RULE_ID.to_string(),
            rule_name: "Transfer Fee".to_string(),
            input,
            output: serde_json::json!({
                "available": false
            }),
            reasoning: format!(
                "{} transfer of {} exceeds the weekend limit of {} - no applicable fee",
                day_type,
                format_usd(amount),
                format_usd(schedule.weekend_limit)
            ),
        };

        return FeeAssessment {
            outcome,
            breakdown: FeeBreakdown {
                day_type,
                base_fee: Decimal::ZERO,
                surcharge: Decimal::ZERO,
                floor_applied: false,
            },
            audit_step,
        };
    };

    let base_fee = amount.saturating_mul(schedule.base_rate);
    let surcharge = if day_type.is_weekend() {
        schedule.weekend_surcharge
    } else {
        Decimal::ZERO
    };
    let subtotal = base_fee.saturating_add(surcharge);
    let floor_applied = subtotal < schedule.minimum_fee;

    let mut reasoning = format!(
        "{}% of {} = {}",
        schedule.base_rate.saturating_mul(Decimal::ONE_HUNDRED).normalize(),
        format_usd(amount),
        format_usd(base_fee)
    );
    if day_type.is_weekend() {
        reasoning.push_str(&format!(
            " + {} weekend surcharge = {}",
            format_usd(surcharge),
            format_usd(subtotal)
        ));
    }
    if floor_applied {
        reasoning.push_str(&format!(
            " (raised to minimum fee {})",
            format_usd(schedule.minimum_fee)
        ));
    }

    let audit_step = AuditStep {
        rule_id: TRANSFER_FEE_RULE_ID.to_string(),
        rule_name: "Transfer Fee".to_string(),
        input,
        output: serde_json::json!({
            "available": true,
            "base_fee": base_fee.normalize().to_string(),
            "surcharge": surcharge.normalize().to_string(),
            "floor_applied": floor_applied,
            "fee": fee.normalize().to_string()
        }),
        reasoning,
    };

    FeeAssessment {
        outcome,
        breakdown: FeeBreakdown {
            day_type,
            base_fee,
            surcharge,
            floor_applied,
        },
        audit_step,
    }
}
