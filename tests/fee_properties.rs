//! Property tests for the transfer fee rule.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;
use rust_decimal::Decimal;

use transfer_fee_engine::fees::{FeeOutcome, FeeSchedule, assess_fee, evaluate};

fn amount(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn date(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .checked_add_days(Days::new(offset))
        .unwrap()
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn rate() -> Decimal {
    Decimal::new(1, 2)
}

fn minimum() -> Decimal {
    Decimal::new(2, 0)
}

proptest! {
    #[test]
    fn prop_weekday_fee_is_percentage_with_floor(
        cents in 1i64..=100_000_000,
        offset in 0u64..3650,
    ) {
        let day = date(offset);
        prop_assume!(!is_weekend(day));

        let a = amount(cents);
        let expected = (a * rate()).max(minimum());
        prop_assert_eq!(evaluate(a, day), FeeOutcome::Fee(expected));
    }

    #[test]
    fn prop_weekend_fee_within_limit_adds_surcharge(
        cents in 1i64..=100_000,
        offset in 0u64..3650,
    ) {
        let day = date(offset);
        prop_assume!(is_weekend(day));

        let a = amount(cents);
        let expected = (a * rate() + Decimal::new(5, 0)).max(minimum());
        prop_assert_eq!(evaluate(a, day), FeeOutcome::Fee(expected));
    }

    #[test]
    fn prop_weekend_over_limit_is_unavailable(
        cents in 100_001i64..=100_000_000,
        offset in 0u64..3650,
    ) {
        let day = date(offset);
        prop_assume!(is_weekend(day));

        prop_assert_eq!(evaluate(amount(cents), day), FeeOutcome::Unavailable);
    }

    #[test]
    fn prop_available_fee_is_at_least_minimum(
        cents in -100_000_000i64..=100_000_000,
        offset in 0u64..3650,
    ) {
        if let FeeOutcome::Fee(fee) = evaluate(amount(cents), date(offset)) {
            prop_assert!(fee >= minimum());
        }
    }

    #[test]
    fn prop_only_weekends_can_be_unavailable(
        cents in 1i64..=100_000_000,
        offset in 0u64..3650,
    ) {
        let day = date(offset);
        if evaluate(amount(cents), day) == FeeOutcome::Unavailable {
            prop_assert!(is_weekend(day));
            prop_assert!(amount(cents) > Decimal::new(1000, 0));
        }
    }

    #[test]
    fn prop_assessment_agrees_with_rule(
        cents in 1i64..=100_000_000,
        offset in 0u64..3650,
    ) {
        let a = amount(cents);
        let day = date(offset);
        let assessment = assess_fee(a, day, &FeeSchedule::standard());

        prop_assert_eq!(assessment.outcome, evaluate(a, day));
    }

    #[test]
    fn prop_evaluation_is_deterministic(
        cents in any::<i64>(),
        scale in 0u32..=8,
        offset in 0u64..3650,
    ) {
        let a = Decimal::new(cents, scale);
        let day = date(offset);

        let first = evaluate(a, day);
        let second = evaluate(a, day);
        prop_assert_eq!(first, second);
        if let (FeeOutcome::Fee(x), FeeOutcome::Fee(y)) = (first, second) {
            prop_assert_eq!(x.serialize(), y.serialize());
        }
    }
}
