//! Fee schedule parameters.
//!
//! A [`FeeSchedule`] holds the four numbers the fee rule is built from. The
//! standard schedule is compiled in; other schedules are loaded through
//! [`crate::config::ConfigLoader`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Base fee rate of the standard schedule: 1% of the amount.
pub const STANDARD_BASE_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Weekend surcharge of the standard schedule: $5.00.
pub const STANDARD_WEEKEND_SURCHARGE: Decimal = Decimal::from_parts(500, 0, 0, false, 2);

/// Fee floor of the standard schedule: $2.00.
pub const STANDARD_MINIMUM_FEE: Decimal = Decimal::from_parts(200, 0, 0, false, 2);

/// Largest weekend amount the standard schedule prices: $1,000.
pub const STANDARD_WEEKEND_LIMIT: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// The parameters of the transfer fee rule.
///
/// # Example
///
/// ```
/// use transfer_fee_engine::fees::FeeSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = FeeSchedule::standard();
/// assert_eq!(schedule.minimum_fee, Decimal::new(2, 0));
/// assert_eq!(schedule.weekend_limit, Decimal::new(1000, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Fraction of the amount charged as the base fee (0.01 = 1%).
    pub base_rate: Decimal,
    /// Flat amount added to the fee on Saturdays and Sundays.
    pub weekend_surcharge: Decimal,
    /// The fee never drops below this amount.
    pub minimum_fee: Decimal,
    /// Weekend transfers strictly above this amount have no fee.
    pub weekend_limit: Decimal,
}

impl FeeSchedule {
    /// Returns the standard schedule: 1%, $5.00 weekend surcharge,
    /// $2.00 minimum, $1,000 weekend limit.
    pub const fn standard() -> Self {
        Self {
            base_rate: STANDARD_BASE_RATE,
            weekend_surcharge: STANDARD_WEEKEND_SURCHARGE,
            minimum_fee: STANDARD_MINIMUM_FEE,
            weekend_limit: STANDARD_WEEKEND_LIMIT,
        }
    }

    /// Checks that no parameter is negative.
    ///
    /// Schedules loaded from configuration files go through this check before
    /// they are used.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("base_rate", self.base_rate),
            ("weekend_surcharge", self.weekend_surcharge),
            ("minimum_fee", self.minimum_fee),
            ("weekend_limit", self.weekend_limit),
        ];

        for (field, value) in fields {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(EngineError::InvalidSchedule {
                    field: field.to_string(),
                    message: format!("must not be negative (got {})", value),
                });
            }
        }

        Ok(())
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::standard()
    }
}
