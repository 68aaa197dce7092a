//! # Recipe Scaler
//!
//! Rescales a recipe to a new serving count. Every ingredient line is parsed,
//! multiplied and re-rendered; macro totals are multiplied and rounded to whole
//! numbers. Units are preserved, never converted.
//!
//! ```rust
//! use meal_prep::recipe_model::Recipe;
//! use meal_prep::recipe_scaler::scale_recipe;
//!
//! let recipe = Recipe::new(4.0, vec!["2 cups flour".to_string()])
//!     .with_macros(400.0, 12.0, 80.0, 4.0);
//! let scaled = scale_recipe(&recipe, 8.0);
//!
//! assert_eq!(scaled.calories, 800.0);
//! assert_eq!(scaled.ingredients[0].scaled_amount, 4.0);
//! assert_eq!(scaled.ingredients[0].scaled_text, "4 cups flour");
//! ```

use crate::amount_formatter::format_amount;
use crate::measurement_patterns::DEFAULT_UNIT;
use crate::quantity_parser::parse_ingredient_quantity;
use crate::recipe_model::{Recipe, ScaledIngredient, ScaledRecipe};
use log::{debug, warn};

/// Scale a recipe to `new_servings`
///
/// A recipe without a servings count is treated as serving one. An explicit
/// zero makes the scale factor infinite, and that value propagates through
/// every amount and macro untouched.
pub fn scale_recipe(recipe: &Recipe, new_servings: f64) -> ScaledRecipe {
    let original_servings = recipe.servings.unwrap_or(1.0);
    let factor = new_servings / original_servings;

    if !factor.is_finite() {
        warn!(
            "Scale factor is not finite ({} / {}), amounts will propagate it",
            new_servings, original_servings
        );
    }
    debug!(
        "Scaling recipe from {} to {} servings (factor {})",
        original_servings, new_servings, factor
    );

    let ingredients = recipe
        .ingredients
        .iter()
        .map(|line| scale_ingredient(line, factor))
        .collect();

    ScaledRecipe {
        servings: new_servings,
        original_servings,
        scale_factor: factor,
        ingredients,
        calories: scale_macro(recipe.calories, factor),
        protein: scale_macro(recipe.protein, factor),
        carbs: scale_macro(recipe.carbs, factor),
        fat: scale_macro(recipe.fat, factor),
        fiber: recipe.fiber.map(|value| scale_macro(value, factor)),
        sugar: recipe.sugar.map(|value| scale_macro(value, factor)),
    }
}

/// Scale a single ingredient line by `factor`
pub fn scale_ingredient(line: &str, factor: f64) -> ScaledIngredient {
    let parsed = parse_ingredient_quantity(line);
    let scaled_amount = parsed.amount * factor;
    let scaled_text = format!(
        "{} {} {}",
        format_amount(scaled_amount),
        display_unit(&parsed.unit, scaled_amount),
        parsed.ingredient_name
    );

    ScaledIngredient {
        original_text: line.to_string(),
        scaled_text,
        original_amount: parsed.amount,
        scaled_amount,
        unit: parsed.unit,
        ingredient_name: parsed.ingredient_name,
        fallback: parsed.fallback,
    }
}

/// Only the default count unit is pluralized; other units are shown as written
fn display_unit(unit: &str, amount: f64) -> String {
    if unit == DEFAULT_UNIT && amount != 1.0 {
        format!("{}s", unit)
    } else {
        unit.to_string()
    }
}

fn scale_macro(value: f64, factor: f64) -> f64 {
    (value * factor).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe::new(
            4.0,
            vec![
                "2 cups flour".to_string(),
                "1/2 cup sugar".to_string(),
                "3 eggs".to_string(),
                "salt to taste".to_string(),
            ],
        )
        .with_macros(1000.0, 30.0, 150.0, 25.0)
        .with_fiber(9.0)
    }

    #[test]
    fn test_scale_up() {
        let scaled = scale_recipe(&sample_recipe(), 8.0);

        assert_eq!(scaled.scale_factor, 2.0);
        assert_eq!(scaled.servings, 8.0);
        assert_eq!(scaled.calories, 2000.0);
        assert_eq!(scaled.fiber, Some(18.0));
        assert_eq!(scaled.sugar, None);
        assert_eq!(scaled.ingredients[0].scaled_text, "4 cups flour");
        assert_eq!(scaled.ingredients[1].scaled_text, "1 cup sugar");
        assert_eq!(scaled.ingredients[2].scaled_text, "6 pieces eggs");
    }

    #[test]
    fn test_scale_down_uses_fractions() {
        let scaled = scale_recipe(&sample_recipe(), 2.0);

        assert_eq!(scaled.ingredients[0].scaled_text, "1 cups flour");
        assert_eq!(scaled.ingredients[1].scaled_text, "1/4 cup sugar");
        assert_eq!(scaled.ingredients[2].scaled_text, "1 1/2 pieces eggs");
        assert_eq!(scaled.calories, 500.0);
        assert_eq!(scaled.protein, 15.0);
    }

    #[test]
    fn test_macros_are_rounded() {
        let recipe = Recipe::new(3.0, Vec::new()).with_macros(100.0, 10.0, 20.0, 5.0);
        let scaled = scale_recipe(&recipe, 1.0);

        assert_eq!(scaled.calories, 33.0);
        assert_eq!(scaled.protein, 3.0);
        assert_eq!(scaled.carbs, 7.0);
        assert_eq!(scaled.fat, 2.0);
    }

    #[test]
    fn test_fallback_line_is_kept_and_scaled() {
        let scaled = scale_recipe(&sample_recipe(), 8.0);
        let salt = &scaled.ingredients[3];

        assert!(salt.fallback);
        assert_eq!(salt.original_text, "salt to taste");
        assert_eq!(salt.original_amount, 1.0);
        assert_eq!(salt.scaled_amount, 2.0);
        assert_eq!(salt.scaled_text, "2 pieces salt to taste");
        assert_eq!(scaled.fallback_count(), 1);
    }

    #[test]
    fn test_single_piece_is_not_pluralized() {
        let scaled = scale_ingredient("2 onions", 0.5);
        assert_eq!(scaled.scaled_text, "1 piece onions");
    }

    #[test]
    fn test_missing_servings_defaults_to_one() {
        let mut recipe = sample_recipe();
        recipe.servings = None;
        let scaled = scale_recipe(&recipe, 3.0);

        assert_eq!(scaled.original_servings, 1.0);
        assert_eq!(scaled.scale_factor, 3.0);
        assert_eq!(scaled.calories, 3000.0);
    }

    #[test]
    fn test_zero_new_servings_keeps_structure() {
        let scaled = scale_recipe(&sample_recipe(), 0.0);

        assert_eq!(scaled.servings, 0.0);
        assert_eq!(scaled.calories, 0.0);
        assert_eq!(scaled.fiber, Some(0.0));
        assert_eq!(scaled.ingredients.len(), 4);
        assert!(scaled.ingredients.iter().all(|i| i.scaled_amount == 0.0));
        assert_eq!(scaled.ingredients[0].scaled_text, "0 cups flour");
    }

    #[test]
    fn test_zero_original_servings_propagates_infinity() {
        let mut recipe = sample_recipe();
        recipe.servings = Some(0.0);
        let scaled = scale_recipe(&recipe, 4.0);

        assert_eq!(scaled.servings, 4.0);
        assert!(scaled.scale_factor.is_infinite());
        assert!(scaled.calories.is_infinite());
        assert!(scaled.ingredients[0].scaled_amount.is_infinite());
        assert_eq!(scaled.ingredients.len(), 4);
    }
}
