use crate::catalog::types::Price;

/// Parses a displayed rupee amount such as `₹1,499` or `₹ 999.50`
///
/// Returns `Price::Whole` when the amount has no fractional part and
/// `Price::Fractional` otherwise. Text that is not a finite number after the
/// currency symbol and thousands separators are removed yields `None`.
pub fn parse_price(text: &str) -> Option<Price> {
    let cleaned: String = text.chars().filter(|c| *c != '₹' && *c != ',').collect();
    let value: f64 = cleaned.trim().parse().ok()?;

    if !value.is_finite() {
        return None;
    }

    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(Price::Whole(value as i64))
    } else {
        Some(Price::Fractional(value))
    }
}
