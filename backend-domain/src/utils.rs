// Shared domain helpers: case-id tokens and display formatting

use chrono::{DateTime, Utc};

const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Short sortable token for a creation instant: the millisecond
/// timestamp in uppercase base-36. Shared by the id prefixes below.
pub fn time_token(now: DateTime<Utc>) -> String {
    to_base36(now.timestamp_millis())
}

/// Builds a short, sortable case id from a creation instant:
/// `CASE-` followed by the uppercase base-36 millisecond timestamp.
pub fn case_id(now: DateTime<Utc>) -> String {
    format!("CASE-{}", time_token(now))
}

fn to_base36(value: i64) -> String {
    let mut value = value.max(0) as u64;
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Formats a currency amount with thousands separators,
/// keeping cents only when they are non-zero.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let cents = total_cents % 100;
    let whole = total_cents / 100;
    let mut grouped = String::new();
    let digits = whole.to_string();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if negative { "-" } else { "" };
    if cents == 0 {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{:02}", sign, grouped, cents)
    }
}

/// Formats a kilometer distance without a trailing fraction when whole.
pub fn format_distance(km: f64) -> String {
    if km.fract() == 0.0 {
        format!("{}", km as i64)
    } else {
        format!("{}", km)
    }
}
