//! Display formatting helpers.
//!
//! Presentation layered on top of the raw valuation numbers: rounding,
//! grouping, and sign handling for the card labels. Locale-aware symbol
//! selection stays in the UI layer; here the currency code is the label.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Formats a monetary amount with its currency code, e.g. `1,234.56 USD`.
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let formatted = group_number_string(&pad_to_dp(rounded, DISPLAY_DECIMAL_PRECISION));
    if currency.is_empty() {
        formatted
    } else {
        format!("{formatted} {currency}")
    }
}

/// Formats a 0-100 scaled percentage with a leading sign, e.g. `+6.67%`.
pub fn format_percent(percent: Decimal) -> String {
    let rounded = percent.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let body = pad_to_dp(rounded.abs(), DISPLAY_DECIMAL_PRECISION);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{body}%")
    } else {
        format!("+{body}%")
    }
}

/// Renders a decimal with exactly `dp` fraction digits.
fn pad_to_dp(value: Decimal, dp: u32) -> String {
    let s = value.normalize().to_string();
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (s, String::new()),
    };
    if dp == 0 {
        return int_part;
    }
    let mut frac: String = frac_part.chars().take(dp as usize).collect();
    while frac.len() < dp as usize {
        frac.push('0');
    }
    format!("{int_part}.{frac}")
}

/// Inserts thousands separators into the integer part.
fn group_number_string(s: &str) -> String {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        grouped.push(ch);
        let remaining = len - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
