//! Presentation formatting for currency amounts and percentages.
//!
//! This is where NaN and infinite values coming out of the engines turn
//! into "n/a"; the engines themselves never special-case them.

/// Format a currency amount with thousands separators, abbreviating past a
/// million. Codes with a known symbol are prefixed, others suffixed:
/// `$1,250` vs `1,250 SEK`.
pub fn format_currency(amount: f64, code: &str) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }

    let rounded = amount.round() as i64;
    let digits = if rounded.abs() >= 1_000_000 {
        format!("{:.1}M", amount / 1_000_000.0)
    } else {
        group_thousands(rounded)
    };

    match currency_symbol(code) {
        Some(symbol) => format!("{symbol}{digits}"),
        None => format!("{digits} {code}"),
    }
}

/// Format a 0..1 fraction as a percentage with one decimal.
pub fn format_percentage(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "n/a".to_string();
    }

    format!("{:.1}%", fraction * 100.0)
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("\u{20ac}"),
        "GBP" => Some("\u{a3}"),
        "JPY" => Some("\u{a5}"),
        _ => None,
    }
}

fn group_thousands(value: i64) -> String {
    let plain = format!("{value}");
    let mut grouped = String::new();
    for (i, c) in plain.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}
