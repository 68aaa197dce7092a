//! # Measurement Patterns Module
//!
//! This module contains the regex patterns and unit vocabulary used to split an
//! ingredient line into amount, unit and ingredient name.

use lazy_static::lazy_static;
use regex::Regex;

/// Known unit spellings, matched case-insensitively.
///
/// Longer spellings come before their prefixes so the alternation prefers them.
pub const UNIT_PATTERNS: &[&str] = &[
    // Volume units
    r"cups?",
    r"tablespoons?",
    r"tbsps?",
    r"teaspoons?",
    r"tsps?",
    r"fl\.?\s*oz",
    r"pints?",
    r"quarts?",
    r"gallons?",
    r"ml",
    r"l",
    // Weight units
    r"lbs?",
    r"pounds?",
    r"ounces?",
    r"oz",
    r"kg",
    r"kilograms?",
    r"grams?",
    r"g",
    // Count units
    r"pieces?",
    r"items?",
    r"each",
    r"whole",
    r"heads?",
    r"bunch(?:es)?",
    r"cloves?",
];

/// Unit used when a line has a leading number but no recognised unit, and for fallbacks
pub const DEFAULT_UNIT: &str = "piece";

fn unit_alternation() -> String {
    UNIT_PATTERNS.join("|")
}

lazy_static! {
    /// `1 1/2 cups flour`
    pub static ref MIXED_FRACTION_REGEX: Regex = Regex::new(&format!(
        r"(?i)^(\d+)\s+(\d+)/(\d+)\s*({})\s+(.+)$",
        unit_alternation()
    ))
    .expect("Mixed fraction pattern should be valid");

    /// `1/2 cup sugar`
    pub static ref SIMPLE_FRACTION_REGEX: Regex = Regex::new(&format!(
        r"(?i)^(\d+)/(\d+)\s*({})\s+(.+)$",
        unit_alternation()
    ))
    .expect("Simple fraction pattern should be valid");

    /// `1.5 lb chicken`
    pub static ref DECIMAL_REGEX: Regex = Regex::new(&format!(
        r"(?i)^(\d*\.\d+)\s*({})\s+(.+)$",
        unit_alternation()
    ))
    .expect("Decimal pattern should be valid");

    /// `2 cups rice`
    pub static ref WHOLE_NUMBER_REGEX: Regex = Regex::new(&format!(
        r"(?i)^(\d+)\s*({})\s+(.+)$",
        unit_alternation()
    ))
    .expect("Whole number pattern should be valid");

    /// `3 eggs`
    pub static ref BARE_COUNT_REGEX: Regex =
        Regex::new(r"^(\d+)\s+(.+)$").expect("Bare count pattern should be valid");

    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").expect("Whitespace pattern should be valid");
}

/// Normalize a matched unit token: lowercase, inner whitespace collapsed to one space
pub fn normalize_unit(raw: &str) -> String {
    WHITESPACE_REGEX
        .replace_all(raw.trim(), " ")
        .to_lowercase()
}
