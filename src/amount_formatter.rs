//! # Amount Formatter
//!
//! Renders decimal amounts the way a recipe card shows them: whole numbers,
//! common fractions ("1 1/2"), or a single decimal place.
//!
//! The fraction lookup uses a loose tolerance, so the output is a display
//! approximation and must not be parsed back as an exact value.
//!
//! ```rust
//! use meal_prep::amount_formatter::format_amount;
//!
//! assert_eq!(format_amount(2.0), "2");
//! assert_eq!(format_amount(1.5), "1 1/2");
//! assert_eq!(format_amount(0.25), "1/4");
//! assert_eq!(format_amount(2.9), "2.9");
//! ```

/// Common fractions and their display text
const FRACTIONS: [(f64, &str); 6] = [
    (0.125, "1/8"),
    (0.25, "1/4"),
    (0.333, "1/3"),
    (0.5, "1/2"),
    (0.667, "2/3"),
    (0.75, "3/4"),
];

/// Maximum distance between a fractional part and a table entry
pub const FRACTION_TOLERANCE: f64 = 0.1;

/// Format an amount for display
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    if amount.fract() == 0.0 {
        return format!("{}", amount as i64);
    }

    let whole = amount.floor();
    let fraction = amount - whole;

    match nearest_fraction(fraction) {
        Some(text) if whole == 0.0 => text.to_string(),
        Some(text) => format!("{} {}", whole as i64, text),
        None => format!("{:.1}", amount),
    }
}

/// Closest table entry within tolerance
fn nearest_fraction(fraction: f64) -> Option<&'static str> {
    FRACTIONS
        .iter()
        .map(|(value, text)| ((fraction - value).abs(), *text))
        .filter(|(distance, _)| *distance < FRACTION_TOLERANCE)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, text)| text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(4.0), "4");
        assert_eq!(format_amount(12.0), "12");
    }

    #[test]
    fn test_exact_fractions() {
        assert_eq!(format_amount(0.5), "1/2");
        assert_eq!(format_amount(0.125), "1/8");
        assert_eq!(format_amount(2.75), "2 3/4");
        assert_eq!(format_amount(1.0 / 3.0), "1/3");
        assert_eq!(format_amount(2.0 + 2.0 / 3.0), "2 2/3");
    }

    #[test]
    fn test_nearest_fraction_within_tolerance() {
        // 0.3 is closer to 1/3 than to 1/4
        assert_eq!(format_amount(1.3), "1 1/3");
        // 0.6 lies between 1/2 and 2/3 and snaps to the closer one
        assert_eq!(format_amount(0.6), "2/3");
        // The loose tolerance also snaps small remainders up to 1/8
        assert_eq!(format_amount(2.05), "2 1/8");
    }

    #[test]
    fn test_decimal_fallback() {
        assert_eq!(format_amount(2.9), "2.9");
        assert_eq!(format_amount(0.9), "0.9");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_amount(f64::INFINITY), "inf");
        assert_eq!(format_amount(f64::NAN), "NaN");
    }
}
