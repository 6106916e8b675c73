//! Turkish-locale display helpers for the session list and car cards.

use chrono::{DateTime, Local, Utc};
use serde_json::Value;

use crate::models::display_value;

/// Formats a price the way `toLocaleString('tr-TR')` does: `.` between
/// thousands, `,` before at most three decimals. Strings pass through.
pub fn price(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                group_thousands(i < 0, i.unsigned_abs())
            } else if let Some(u) = n.as_u64() {
                group_thousands(false, u)
            } else {
                n.as_f64().map(format_decimal).unwrap_or_default()
            }
        }
        Some(other) => display_value(other),
    }
}

fn format_decimal(f: f64) -> String {
    let rounded = format!("{:.3}", f.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((&rounded, ""));
    let frac_part = frac_part.trim_end_matches('0');
    let int_value: u64 = int_part.parse().unwrap_or(0);
    let mut out = group_thousands(f < 0.0, int_value);
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(negative: bool, value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Creation date shown under each session title, `dd.mm.yyyy`.
pub fn session_date(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_get_dot_separators() {
        assert_eq!(price(Some(&json!(850000))), "850.000");
        assert_eq!(price(Some(&json!(1250000))), "1.250.000");
        assert_eq!(price(Some(&json!(999))), "999");
        assert_eq!(price(Some(&json!(-4500))), "-4.500");
    }

    #[test]
    fn decimals_use_comma() {
        assert_eq!(price(Some(&json!(1234.5))), "1.234,5");
        assert_eq!(price(Some(&json!(1000.0))), "1.000");
    }

    #[test]
    fn strings_pass_through() {
        assert_eq!(price(Some(&json!("Pazarlıklı"))), "Pazarlıklı");
        assert_eq!(price(None), "");
    }

    #[test]
    fn dates_are_day_first() {
        let ts = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z").unwrap().with_timezone(&Utc);
        assert_eq!(session_date(ts), "01.05.2024");
    }
}
