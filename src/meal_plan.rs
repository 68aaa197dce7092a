//! # Meal Prep Plan
//!
//! Composes the scaler, the batch time estimator and the container advisor into
//! one plan for a recipe, after validating the request. This is the only layer
//! that reports errors; the calculations underneath always return a value.

use crate::batch_time::{
    estimate_batch_cooking_time, format_time_estimate, get_time_savings_message,
    BatchCookingTimeEstimate, Difficulty,
};
use crate::container_advisor::{
    format_container_recommendation, get_container_recommendations, ContainerPlan, RecipeType,
};
use crate::container_catalog::StorageKind;
use crate::plan_errors::PlanError;
use crate::recipe_model::{Recipe, ScaledRecipe};
use crate::recipe_scaler::scale_recipe;
use crate::storage_window::{storage_window, StorageWindow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// What the caller wants from a meal-prep session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPrepRequest {
    pub target_servings: f64,
    #[serde(default)]
    pub freeze_servings: u32,
    #[serde(default)]
    pub fresh_servings: u32,
    pub cook_time_minutes: f64,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub recipe_type: RecipeType,
    #[serde(default)]
    pub prefer_single_serve: bool,
    #[serde(default)]
    pub prep_date: Option<NaiveDate>,
}

/// Everything computed for one meal-prep session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealPrepPlan {
    pub recipe_name: Option<String>,
    pub scaled_recipe: ScaledRecipe,
    pub time_estimate: BatchCookingTimeEstimate,
    pub savings_message: String,
    pub containers: ContainerPlan,
    /// Use-by windows, present only when a prep date was given
    pub storage: Vec<StorageWindow>,
}

/// Read a recipe from a JSON file
pub fn load_recipe_file<P: AsRef<Path>>(path: P) -> Result<Recipe, PlanError> {
    let path = path.as_ref();
    debug!("Loading recipe from {}", path.display());

    let content = fs::read_to_string(path)
        .map_err(|e| PlanError::RecipeLoad(format!("cannot read {}: {e}", path.display())))?;
    let recipe: Recipe = serde_json::from_str(&content)?;

    info!(
        "Loaded recipe {:?} with {} ingredient lines",
        recipe.name.as_deref().unwrap_or("unnamed"),
        recipe.ingredients.len()
    );
    Ok(recipe)
}

/// Check a request and recipe before planning
pub fn validate_request(recipe: &Recipe, request: &MealPrepRequest) -> Result<(), PlanError> {
    if let Some(servings) = recipe.servings {
        if !servings.is_finite() || servings <= 0.0 {
            return Err(PlanError::Validation(format!(
                "recipe servings must be a positive number, got {servings}"
            )));
        }
    }
    if !request.target_servings.is_finite() || request.target_servings < 0.0 {
        return Err(PlanError::Validation(format!(
            "target servings must be a non-negative number, got {}",
            request.target_servings
        )));
    }
    if !request.cook_time_minutes.is_finite() || request.cook_time_minutes < 0.0 {
        return Err(PlanError::Validation(format!(
            "cook time must be a non-negative number of minutes, got {}",
            request.cook_time_minutes
        )));
    }

    let stored = request.freeze_servings as u64 + request.fresh_servings as u64;
    if stored > container_servings(request.target_servings) as u64 {
        return Err(PlanError::Validation(format!(
            "freezer ({}) and fridge ({}) servings exceed the {} target servings",
            request.freeze_servings, request.fresh_servings, request.target_servings
        )));
    }

    Ok(())
}

/// Build a full meal-prep plan for `recipe`
pub fn plan_meal_prep(recipe: &Recipe, request: &MealPrepRequest) -> Result<MealPrepPlan, PlanError> {
    validate_request(recipe, request)?;

    info!(
        "Planning {} servings ({} freezer, {} fridge), {} difficulty",
        request.target_servings,
        request.freeze_servings,
        request.fresh_servings,
        request.difficulty.label()
    );

    let scaled_recipe = scale_recipe(recipe, request.target_servings);
    let unparsed = scaled_recipe.fallback_count();
    if unparsed > 0 {
        warn!(
            "{} ingredient lines had no recognisable quantity and were scaled as single pieces",
            unparsed
        );
    }

    let time_estimate = estimate_batch_cooking_time(
        request.cook_time_minutes,
        scaled_recipe.original_servings,
        request.target_servings,
        request.difficulty,
    );
    let savings_message = get_time_savings_message(&time_estimate);

    let containers = get_container_recommendations(
        container_servings(request.target_servings),
        request.freeze_servings,
        request.fresh_servings,
        request.recipe_type,
        request.prefer_single_serve,
    );

    let storage = match request.prep_date {
        Some(date) => {
            let mut windows = Vec::new();
            if request.freeze_servings > 0 {
                windows.push(storage_window(date, StorageKind::Freezer));
            }
            if request.fresh_servings > 0 {
                windows.push(storage_window(date, StorageKind::Fridge));
            }
            windows
        }
        None => Vec::new(),
    };

    info!(
        "Plan ready: {} estimated, {} freezer options, {} fridge options",
        format_time_estimate(time_estimate.estimated_time),
        containers.freeze.len(),
        containers.fresh.len()
    );

    Ok(MealPrepPlan {
        recipe_name: recipe.name.clone(),
        scaled_recipe,
        time_estimate,
        savings_message,
        containers,
        storage,
    })
}

/// Render a plan as a text report
pub fn format_plan_for_display(plan: &MealPrepPlan) -> String {
    let mut output = String::new();
    let recipe = &plan.scaled_recipe;

    let title = plan.recipe_name.as_deref().unwrap_or("Meal Prep Plan");
    output.push_str(&format!("🍲 {} ({} servings)\n\n", title, recipe.servings));

    output.push_str("📝 Ingredients\n");
    for ingredient in &recipe.ingredients {
        let marker = if ingredient.fallback { " (?)" } else { "" };
        output.push_str(&format!("• {}{}\n", ingredient.scaled_text, marker));
    }

    output.push_str(&format!(
        "\n🔥 {} kcal | {}g protein | {}g carbs | {}g fat",
        recipe.calories, recipe.protein, recipe.carbs, recipe.fat
    ));
    if let Some(fiber) = recipe.fiber {
        output.push_str(&format!(" | {}g fiber", fiber));
    }
    if let Some(sugar) = recipe.sugar {
        output.push_str(&format!(" | {}g sugar", sugar));
    }
    output.push('\n');

    let estimate = &plan.time_estimate;
    output.push_str(&format!(
        "\n⏱️ Cooking time: {} (prep {}, active {}, passive {})\n",
        format_time_estimate(estimate.estimated_time),
        format_time_estimate(estimate.breakdown.prep_time),
        format_time_estimate(estimate.breakdown.active_cooking_time),
        format_time_estimate(estimate.breakdown.passive_cooking_time)
    ));
    output.push_str(&format!("{}\n", plan.savings_message));
    for tip in &estimate.tips {
        output.push_str(&format!("  - {}\n", tip));
    }

    output.push_str("\n📦 Containers\n");
    if !plan.containers.freeze.is_empty() {
        output.push_str("Freezer:\n");
        for rec in &plan.containers.freeze {
            output.push_str(&format!("  • {}\n", format_container_recommendation(rec)));
        }
    }
    if !plan.containers.fresh.is_empty() {
        output.push_str("Fridge:\n");
        for rec in &plan.containers.fresh {
            output.push_str(&format!("  • {}\n", format_container_recommendation(rec)));
        }
    }
    if let Some(all) = &plan.containers.all {
        output.push_str(&format!(
            "Whole batch: {}\n",
            format_container_recommendation(all)
        ));
    }

    if !plan.storage.is_empty() {
        output.push_str("\n📅 Use by\n");
        for window in &plan.storage {
            let kind = match window.kind {
                StorageKind::Freezer => "Freezer",
                _ => "Fridge",
            };
            output.push_str(&format!("  • {}: {}\n", kind, window.use_by.format("%Y-%m-%d")));
        }
    }

    output
}

/// Servings to pack: partial servings still need room
fn container_servings(target_servings: f64) -> u32 {
    target_servings.ceil() as u32
}
