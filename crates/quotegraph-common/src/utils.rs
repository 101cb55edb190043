//! Shared utility functions for text formatting and input normalization.

use crate::error::{QuoteGraphError, Result};

/// Formats a value as US dollars with thousands separators and two decimals.
pub fn format_usd(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let fraction = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${}.{:02}", grouped, fraction)
    } else {
        format!("${}.{:02}", grouped, fraction)
    }
}

/// Formats a traded-volume figure as a plain integer string, not currency.
pub fn format_volume(value: f64) -> String {
    format!("{:.0}", value.round())
}

/// Normalizes a user-supplied ticker symbol.
///
/// Symbols are upper-cased and limited to alphanumerics plus `.` and `-`
/// so malformed input is rejected before any provider call.
pub fn normalize_symbol(input: &str) -> Result<String> {
    let symbol = input.trim().to_uppercase();

    if symbol.is_empty() || symbol.len() > 12 {
        return Err(QuoteGraphError::invalid_input_field(
            format!("invalid symbol '{}'", input.trim()),
            "symbol",
        ));
    }

    if !symbol
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return Err(QuoteGraphError::invalid_input_field(
            format!("invalid symbol '{}'", input.trim()),
            "symbol",
        ));
    }

    Ok(symbol)
}
