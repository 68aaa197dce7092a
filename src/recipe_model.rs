//! # Recipe and Quantity Data Model
//!
//! This module defines the data structures flowing through the planning pipeline:
//! the input recipe, parsed ingredient quantities, and the scaled recipe output.
//!
//! ## Core Concepts
//!
//! - **Recipe**: servings, free-text ingredient lines and macro totals
//! - **ParsedQuantity**: one ingredient line split into amount, unit and name
//! - **ScaledIngredient**: an ingredient line after rescaling
//! - **ScaledRecipe**: the whole recipe after rescaling
//!
//! ## Usage
//!
//! ```rust
//! use meal_prep::recipe_model::Recipe;
//!
//! let recipe = Recipe::new(4.0, vec!["2 cups flour".to_string()])
//!     .with_macros(400.0, 12.0, 80.0, 4.0)
//!     .with_fiber(6.0);
//!
//! assert_eq!(recipe.ingredients.len(), 1);
//! assert_eq!(recipe.fiber, Some(6.0));
//! assert_eq!(recipe.sugar, None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recipe as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,

    /// Number of servings the recipe yields; treated as 1 when absent
    #[serde(default)]
    pub servings: Option<f64>,

    /// Free-text ingredient lines (e.g., "2 cups flour")
    pub ingredients: Vec<String>,

    /// Total calories for the whole recipe
    pub calories: f64,

    /// Total protein in grams
    pub protein: f64,

    /// Total carbohydrates in grams
    pub carbs: f64,

    /// Total fat in grams
    pub fat: f64,

    /// Total fiber in grams, if known
    #[serde(default)]
    pub fiber: Option<f64>,

    /// Total sugar in grams, if known
    #[serde(default)]
    pub sugar: Option<f64>,
}

/// One ingredient line split into amount, unit and ingredient name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuantity {
    /// Numeric amount, always positive for a successful parse
    pub amount: f64,

    /// Lowercased unit token (e.g., "cup", "tbsp", "piece")
    pub unit: String,

    /// Ingredient name with original casing, trimmed
    pub ingredient_name: String,

    /// True when no numeric pattern matched and the whole line became the name
    pub fallback: bool,
}

/// An ingredient line after rescaling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledIngredient {
    /// The line as written in the source recipe
    pub original_text: String,

    /// The rescaled line (e.g., "4 cups flour")
    pub scaled_text: String,

    /// Parsed amount before scaling
    pub original_amount: f64,

    /// Parsed amount multiplied by the scale factor
    pub scaled_amount: f64,

    /// Unit as parsed, never converted
    pub unit: String,

    /// Ingredient name as parsed
    pub ingredient_name: String,

    /// Carried over from the parse, marks lines whose quantity was not understood
    pub fallback: bool,
}

/// A recipe rescaled to a new serving count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledRecipe {
    /// Target serving count
    pub servings: f64,

    /// Serving count used as the divisor
    pub original_servings: f64,

    /// `servings / original_servings`
    pub scale_factor: f64,

    /// One entry per input line, in input order
    pub ingredients: Vec<ScaledIngredient>,

    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
}

impl Recipe {
    /// Create a recipe with the given servings and ingredient lines and zeroed macros
    pub fn new(servings: f64, ingredients: Vec<String>) -> Self {
        Self {
            name: None,
            servings: Some(servings),
            ingredients,
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            fiber: None,
            sugar: None,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Set the four mandatory macro totals
    pub fn with_macros(mut self, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        self.calories = calories;
        self.protein = protein;
        self.carbs = carbs;
        self.fat = fat;
        self
    }

    pub fn with_fiber(mut self, fiber: f64) -> Self {
        self.fiber = Some(fiber);
        self
    }

    pub fn with_sugar(mut self, sugar: f64) -> Self {
        self.sugar = Some(sugar);
        self
    }
}

impl ParsedQuantity {
    /// Fallback quantity for a line without a recognisable leading number
    pub fn fallback(line: &str) -> Self {
        Self {
            amount: 1.0,
            unit: crate::measurement_patterns::DEFAULT_UNIT.to_string(),
            ingredient_name: line.to_string(),
            fallback: true,
        }
    }
}

impl ScaledRecipe {
    /// Number of ingredient lines that went through the fallback parse
    pub fn fallback_count(&self) -> usize {
        self.ingredients.iter().filter(|i| i.fallback).count()
    }
}

impl fmt::Display for ScaledIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scaled_text)
    }
}

impl fmt::Display for ScaledRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Scaled Recipe ({} servings, x{:.2}):",
            self.servings, self.scale_factor
        )?;

        for ingredient in &self.ingredients {
            writeln!(f, "  • {}", ingredient)?;
        }

        write!(
            f,
            "Calories: {} | Protein: {}g | Carbs: {}g | Fat: {}g",
            self.calories, self.protein, self.carbs, self.fat
        )?;
        if let Some(fiber) = self.fiber {
            write!(f, " | Fiber: {}g", fiber)?;
        }
        if let Some(sugar) = self.sugar {
            write!(f, " | Sugar: {}g", sugar)?;
        }

        Ok(())
    }
}
