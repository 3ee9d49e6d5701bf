//! Display formatting for quote and series fields.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Two decimal places with `,` thousands grouping. No currency symbol.
///
/// `format_currency(dec!(1234.5)) == "1,234.50"`
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{}.{frac_part}", group_thousands(int_part))
}

/// Abbreviates large volumes: `1.5M`, `2.5K`, otherwise a grouped integer.
#[allow(clippy::cast_precision_loss)]
pub fn format_volume(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        group_thousands(&value.to_string())
    }
}

/// Short axis label, e.g. `Jan 5`.
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Full date, e.g. `2024/1/5`.
pub fn format_date_localized(date: NaiveDate) -> String {
    date.format("%Y/%-m/%-d").to_string()
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(char::from(*b));
    }
    out
}
