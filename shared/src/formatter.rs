//! Pure string helpers shared by the dashboard views.

use chrono::NaiveDate;

/// Build a `YYYY-MM-DD` string from calendar components
pub fn iso_date(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Clean up whatever was typed into the amount field.
///
/// Keeps ASCII digits and the first `.`; later dots are dropped and their
/// digits joined onto the fraction, which is cut to two places.
pub fn sanitize_currency_input(raw: &str) -> String {
    let mut whole = String::new();
    let mut fraction: Option<String> = None;

    for c in raw.chars() {
        match c {
            '0'..='9' => match fraction.as_mut() {
                Some(digits) if digits.len() < 2 => digits.push(c),
                Some(_) => {}
                None => whole.push(c),
            },
            '.' if fraction.is_none() => fraction = Some(String::new()),
            _ => {}
        }
    }

    match fraction {
        Some(digits) => format!("{}.{}", whole, digits),
        None => whole,
    }
}

/// "2024-01-05" (optionally followed by a time part) -> "Jan 5".
/// Anything unparseable is returned unchanged.
pub fn format_chart_label(raw: &str) -> String {
    let date_part = raw.split('T').next().unwrap_or(raw).trim();
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn format_balance(balance: f64) -> String {
    format!("{:.2}", balance)
}

pub fn format_transaction_count(count: u64) -> String {
    if count == 1 {
        "1 transaction".to_string()
    } else {
        format!("{} transactions", count)
    }
}

/// Y axis tick text, whole dollars
pub fn format_axis_tick(value: f64) -> String {
    format!("${:.0}", value)
}

/// Hover readout for a single chart point
pub fn format_tooltip(value: f64) -> String {
    format!("Balance: ${:.2}", value)
}
