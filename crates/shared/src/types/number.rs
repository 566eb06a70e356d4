//! Number formatting for statements and diagnostics.
//!
//! Amounts are shown as whole numbers grouped by thousands with a space,
//! percentages with one decimal place. Rounding is half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Thousands separator used in formatted amounts.
pub const GROUP_SEPARATOR: char = ' ';

/// Rounds to a whole number, half away from zero.
#[must_use]
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as a thousands-grouped integer (`1 234 567`).
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    let rounded = round_whole(value);
    if rounded.is_zero() {
        return "0".to_string();
    }

    let digits = rounded.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats a percentage value with one decimal place (`12.5%`).
#[must_use]
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", fixed(value, 1))
}

/// Formats a multiple with two decimal places (`1.50`).
#[must_use]
pub fn format_multiple(value: Decimal) -> String {
    fixed(value, 2)
}

/// Formats a day count as a whole number of days (`45 jours`).
#[must_use]
pub fn format_days(value: Decimal) -> String {
    format!("{} jours", fixed(value, 0))
}

fn fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(dp);
    rounded.to_string()
}
