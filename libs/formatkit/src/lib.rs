//! Display formatting helpers for dates, counts and money amounts.
//!
//! Everything here is presentation-only: pure string production, no locale
//! negotiation, US-style separators. The calling layer decides what to do
//! with the strings.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// `1234567` becomes `"1,234,567"`.
pub fn group_thousands(value: i64) -> String {
    let grouped = group_digits(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// `1234.5` becomes `"$1,234.50"`; negatives get a leading minus sign.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let rendered = format!("{:.2}", rounded.abs());
    let (units, cents) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), "00"));
    let grouped = group_digits(units);
    if rounded.is_sign_negative() {
        format!("-${grouped}.{cents}")
    } else {
        format!("${grouped}.{cents}")
    }
}

/// Human label for a date relative to `today`: "today", "tomorrow",
/// "yesterday", "in N days" or "N days ago".
pub fn relative_day_label(date: NaiveDate, today: NaiveDate) -> String {
    let delta = (date - today).num_days();
    match delta {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        d if d > 1 => format!("in {d} days"),
        d => format!("{} days ago", -d),
    }
}

/// `Mar 4, 2026` style date.
pub fn short_date(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
