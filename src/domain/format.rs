//! Display precision and raw-text parsing for pricing fields.

use super::pricing::{FieldKind, PricingField};

pub fn decimals(field: PricingField) -> usize {
    match field.kind() {
        FieldKind::Percent => 1,
        FieldKind::Currency => 2,
    }
}

/// Formats a value at the precision shown for `field` (1 dp percent, 2 dp currency).
pub fn format_value(field: PricingField, value: f64) -> String {
    format!("{:.*}", decimals(field), value)
}

/// `$12.50` or `25.0%`, zero included.
pub fn format_with_unit(field: PricingField, value: f64) -> String {
    match field.kind() {
        FieldKind::Currency => format!("${}", format_value(field, value)),
        FieldKind::Percent => format!("{}%", format_value(field, value)),
    }
}

/// Like [`format_with_unit`], but zero renders as an empty string so blank inputs stay blank.
pub fn format_with_symbol(field: PricingField, value: f64) -> String {
    if value == 0.0 {
        return String::new();
    }
    format_with_unit(field, value)
}

/// Parses user text, dropping everything but digits and the decimal point.
/// Anything unparseable becomes `0.0`.
pub fn parse_input(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    parse_leading_number(&cleaned).unwrap_or(0.0)
}

// "1.2.3" parses as 1.2, the way a lenient float parser reads the longest valid prefix.
fn parse_leading_number(cleaned: &str) -> Option<f64> {
    let end = cleaned
        .char_indices()
        .filter(|(_, ch)| *ch == '.')
        .nth(1)
        .map(|(idx, _)| idx)
        .unwrap_or(cleaned.len());
    let value = cleaned[..end].parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Rounds a committed entry to the precision it is displayed at.
pub fn round_entry(field: PricingField, value: f64) -> f64 {
    let factor = 10f64.powi(decimals(field) as i32);
    (value * factor).round() / factor
}
