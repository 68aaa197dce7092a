//! # Quantity Parser
//!
//! This module turns free-text ingredient lines into structured quantities.
//!
//! ## Features
//!
//! - Mixed fractions ("1 1/2 cups flour")
//! - Simple fractions ("1/2 cup sugar")
//! - Decimals and whole numbers with a known unit ("1.5 lb chicken", "2 cups rice")
//! - Bare counts without a unit ("3 eggs")
//! - A total fallback: a line that matches nothing becomes `1 piece <line>`
//!
//! ## Usage
//!
//! ```rust
//! use meal_prep::quantity_parser::parse_ingredient_quantity;
//!
//! let parsed = parse_ingredient_quantity("1/2 cup sugar");
//! assert_eq!(parsed.amount, 0.5);
//! assert_eq!(parsed.unit, "cup");
//! assert_eq!(parsed.ingredient_name, "sugar");
//! ```

use crate::measurement_patterns::{
    normalize_unit, BARE_COUNT_REGEX, DECIMAL_REGEX, DEFAULT_UNIT, MIXED_FRACTION_REGEX,
    SIMPLE_FRACTION_REGEX, WHOLE_NUMBER_REGEX,
};
use crate::recipe_model::ParsedQuantity;
use log::{debug, trace};
use regex::{Captures, Regex};

/// The shape of the leading quantity a strategy recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityForm {
    MixedFraction,
    SimpleFraction,
    Decimal,
    WholeNumber,
    BareCount,
}

/// A pattern paired with the function that turns its captures into a quantity
struct ParseStrategy {
    form: QuantityForm,
    pattern: &'static Regex,
    extract: fn(&Captures<'_>) -> Option<ParsedQuantity>,
}

/// Strategies in priority order; more specific shapes come first
fn strategies() -> [ParseStrategy; 5] {
    [
        ParseStrategy {
            form: QuantityForm::MixedFraction,
            pattern: &MIXED_FRACTION_REGEX,
            extract: extract_mixed_fraction,
        },
        ParseStrategy {
            form: QuantityForm::SimpleFraction,
            pattern: &SIMPLE_FRACTION_REGEX,
            extract: extract_simple_fraction,
        },
        ParseStrategy {
            form: QuantityForm::Decimal,
            pattern: &DECIMAL_REGEX,
            extract: extract_number_with_unit,
        },
        ParseStrategy {
            form: QuantityForm::WholeNumber,
            pattern: &WHOLE_NUMBER_REGEX,
            extract: extract_number_with_unit,
        },
        ParseStrategy {
            form: QuantityForm::BareCount,
            pattern: &BARE_COUNT_REGEX,
            extract: extract_bare_count,
        },
    ]
}

/// Parse a single ingredient line
///
/// Never fails: a line without a recognisable leading quantity comes back as
/// `{ amount: 1, unit: "piece", ingredient_name: <whole line> }` with
/// `fallback` set.
pub fn parse_ingredient_quantity(line: &str) -> ParsedQuantity {
    let line = line.trim();

    match match_line(line) {
        Some((form, parsed)) => {
            debug!(
                "Parsed '{}' as {:?}: amount={}, unit='{}', name='{}'",
                line, form, parsed.amount, parsed.unit, parsed.ingredient_name
            );
            parsed
        }
        None => {
            debug!("No quantity pattern matched '{}', using fallback", line);
            ParsedQuantity::fallback(line)
        }
    }
}

/// Report which quantity shape a line was recognised as, if any
pub fn detect_quantity_form(line: &str) -> Option<QuantityForm> {
    match_line(line.trim()).map(|(form, _)| form)
}

/// Parse a multi-line ingredient block
///
/// Blank lines and section headers ending in ':' (e.g., "Ingredients:") are skipped.
pub fn parse_ingredient_list(text: &str) -> Vec<ParsedQuantity> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.ends_with(':'))
        .map(parse_ingredient_quantity)
        .collect()
}

fn match_line(line: &str) -> Option<(QuantityForm, ParsedQuantity)> {
    for strategy in strategies() {
        let Some(captures) = strategy.pattern.captures(line) else {
            continue;
        };
        match (strategy.extract)(&captures) {
            Some(parsed) => return Some((strategy.form, parsed)),
            None => trace!(
                "Pattern {:?} matched '{}' but produced no usable amount",
                strategy.form,
                line
            ),
        }
    }
    None
}

fn extract_mixed_fraction(captures: &Captures<'_>) -> Option<ParsedQuantity> {
    let whole: f64 = captures[1].parse().ok()?;
    let fraction = fraction_value(&captures[2], &captures[3])?;
    build_quantity(whole + fraction, &captures[4], &captures[5])
}

fn extract_simple_fraction(captures: &Captures<'_>) -> Option<ParsedQuantity> {
    let fraction = fraction_value(&captures[1], &captures[2])?;
    build_quantity(fraction, &captures[3], &captures[4])
}

fn extract_number_with_unit(captures: &Captures<'_>) -> Option<ParsedQuantity> {
    let amount: f64 = captures[1].parse().ok()?;
    build_quantity(amount, &captures[2], &captures[3])
}

fn extract_bare_count(captures: &Captures<'_>) -> Option<ParsedQuantity> {
    let amount: f64 = captures[1].parse().ok()?;
    build_quantity(amount, DEFAULT_UNIT, &captures[2])
}

fn fraction_value(numerator: &str, denominator: &str) -> Option<f64> {
    let numerator: u32 = numerator.parse().ok()?;
    let denominator: u32 = denominator.parse().ok()?;
    if denominator == 0 {
        return None;
    }
    Some(numerator as f64 / denominator as f64)
}

fn build_quantity(amount: f64, unit: &str, name: &str) -> Option<ParsedQuantity> {
    if !amount.is_finite() || amount <= 0.0 {
        return None;
    }
    let ingredient_name = name.trim();
    if ingredient_name.is_empty() {
        return None;
    }
    Some(ParsedQuantity {
        amount,
        unit: normalize_unit(unit),
        ingredient_name: ingredient_name.to_string(),
        fallback: false,
    })
}
