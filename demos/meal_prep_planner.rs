//! # Meal Prep Planner Example
//!
//! This example walks through the planning pipeline for a weeknight chili:
//! parsing ingredient lines, scaling the recipe, estimating batch cooking time,
//! and choosing storage containers. Run with `RUST_LOG=debug` to see the
//! decisions each step makes.

use meal_prep::batch_time::{
    estimate_batch_cooking_time, format_time_estimate, get_time_savings_message, Difficulty,
};
use meal_prep::container_advisor::{
    format_container_recommendation, get_container_recommendations, RecipeType,
};
use meal_prep::quantity_parser::parse_ingredient_list;
use meal_prep::recipe_model::Recipe;
use meal_prep::recipe_scaler::scale_recipe;

fn main() {
    env_logger::init();

    println!("🍲 Meal Prep Planner Example");
    println!("============================\n");

    let ingredient_text = r#"
    Ingredients:
    1 1/2 lb ground beef
    2 cups kidney beans
    1 onion
    3 cloves garlic
    1/2 tsp cumin
    chili powder to taste
    "#;

    // Example 1: Parsing
    println!("📖 Example 1: Parsing Ingredient Lines");
    println!("--------------------------------------");
    let parsed = parse_ingredient_list(ingredient_text);
    for (i, quantity) in parsed.iter().enumerate() {
        let note = if quantity.fallback { " (no quantity found)" } else { "" };
        println!(
            "  {}. {} {} → \"{}\"{}",
            i + 1,
            quantity.amount,
            quantity.unit,
            quantity.ingredient_name,
            note
        );
    }
    println!();

    // Example 2: Scaling
    println!("⚖️ Example 2: Scaling 4 Servings to 10");
    println!("---------------------------------------");
    let lines = ingredient_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.ends_with(':'))
        .map(str::to_string)
        .collect();
    let recipe = Recipe::new(4.0, lines)
        .with_name("Weeknight Chili")
        .with_macros(1800.0, 130.0, 110.0, 80.0)
        .with_fiber(32.0);
    let scaled = scale_recipe(&recipe, 10.0);
    println!("{}\n", scaled);

    // Example 3: Timing
    println!("⏱️ Example 3: Batch Cooking Time");
    println!("--------------------------------");
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let estimate = estimate_batch_cooking_time(75.0, 4.0, 10.0, difficulty);
        println!(
            "  {:<6} {} → {} | {}",
            difficulty.label(),
            format_time_estimate(estimate.original_time),
            format_time_estimate(estimate.estimated_time),
            get_time_savings_message(&estimate)
        );
    }
    println!();

    // Example 4: Containers
    println!("📦 Example 4: Containers for 6 Frozen and 4 Fresh Servings");
    println!("-----------------------------------------------------------");
    let plan = get_container_recommendations(10, 6, 4, RecipeType::Stew, true);
    println!("Freezer:");
    for rec in &plan.freeze {
        println!("  • {}", format_container_recommendation(rec));
    }
    println!("Fridge:");
    for rec in &plan.fresh {
        println!("  • {}", format_container_recommendation(rec));
    }
    if let Some(all) = &plan.all {
        println!("Whole batch: {}", format_container_recommendation(all));
    }
}
