//! US dollar formatting for display strings.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as US dollars with two decimals and thousands separators.
///
/// Rounds half away from zero, the way the history and confirmation views
/// display money.
///
/// # Example
///
/// ```
/// use transfer_fee_engine::models::format_usd;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_usd(Decimal::new(12345, 1)), "$1,234.50");
/// assert_eq!(format_usd(Decimal::new(-5, 0)), "-$5.00");
/// ```
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{}${}.{}", sign, grouped, cents)
}
