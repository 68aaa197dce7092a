//! # Planner Configuration Module
//!
//! This module defines the defaults used to build meal-prep requests and how
//! they are read from the environment.

use crate::batch_time::Difficulty;
use crate::container_advisor::RecipeType;
use crate::meal_plan::MealPrepRequest;
use crate::plan_errors::PlanError;
use chrono::NaiveDate;

// Constants for planner configuration
pub const DEFAULT_COOK_TIME_MINUTES: f64 = 60.0;
pub const DEFAULT_FREEZE_SHARE: f64 = 0.5;
pub const DEFAULT_PREFER_SINGLE_SERVE: bool = true;

pub const ENV_DIFFICULTY: &str = "MEAL_PREP_DIFFICULTY";
pub const ENV_RECIPE_TYPE: &str = "MEAL_PREP_RECIPE_TYPE";
pub const ENV_COOK_TIME: &str = "MEAL_PREP_COOK_TIME";
pub const ENV_SINGLE_SERVE: &str = "MEAL_PREP_SINGLE_SERVE";
pub const ENV_FREEZE_SHARE: &str = "MEAL_PREP_FREEZE_SHARE";
pub const ENV_LOG_JSON: &str = "MEAL_PREP_LOG_JSON";

/// Configuration structure for meal-prep planning
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Difficulty used when a request does not name one
    pub difficulty: Difficulty,
    /// Recipe type used for container sizing
    pub recipe_type: RecipeType,
    /// Cook time of the original recipe in minutes
    pub cook_time_minutes: f64,
    /// Whether single-serve containers are offered
    pub prefer_single_serve: bool,
    /// Share of the target servings that goes to the freezer (0.0 to 1.0)
    pub freeze_share: f64,
    /// Emit logs as JSON lines
    pub json_logs: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            recipe_type: RecipeType::default(),
            cook_time_minutes: DEFAULT_COOK_TIME_MINUTES,
            prefer_single_serve: DEFAULT_PREFER_SINGLE_SERVE,
            freeze_share: DEFAULT_FREEZE_SHARE,
            json_logs: false,
        }
    }
}

impl PlannerConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, PlanError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; missing keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PlanError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_DIFFICULTY) {
            config.difficulty = Difficulty::from_label(&value);
        }
        if let Some(value) = lookup(ENV_RECIPE_TYPE) {
            config.recipe_type = RecipeType::from_label(&value);
        }
        if let Some(value) = lookup(ENV_COOK_TIME) {
            config.cook_time_minutes = parse_number(ENV_COOK_TIME, &value)?;
            if config.cook_time_minutes < 0.0 {
                return Err(PlanError::Config(format!(
                    "{ENV_COOK_TIME} must not be negative, got {value}"
                )));
            }
        }
        if let Some(value) = lookup(ENV_SINGLE_SERVE) {
            config.prefer_single_serve = parse_flag(ENV_SINGLE_SERVE, &value)?;
        }
        if let Some(value) = lookup(ENV_FREEZE_SHARE) {
            let share = parse_number(ENV_FREEZE_SHARE, &value)?;
            if !(0.0..=1.0).contains(&share) {
                return Err(PlanError::Config(format!(
                    "{ENV_FREEZE_SHARE} must be between 0 and 1, got {value}"
                )));
            }
            config.freeze_share = share;
        }
        if let Some(value) = lookup(ENV_LOG_JSON) {
            config.json_logs = parse_flag(ENV_LOG_JSON, &value)?;
        }

        Ok(config)
    }

    /// Build a request for `target_servings`, split between freezer and fridge by `freeze_share`
    pub fn request_for(&self, target_servings: u32, prep_date: Option<NaiveDate>) -> MealPrepRequest {
        let freeze_servings = (target_servings as f64 * self.freeze_share).floor() as u32;
        MealPrepRequest {
            target_servings: target_servings as f64,
            freeze_servings,
            fresh_servings: target_servings - freeze_servings,
            cook_time_minutes: self.cook_time_minutes,
            difficulty: self.difficulty,
            recipe_type: self.recipe_type,
            prefer_single_serve: self.prefer_single_serve,
            prep_date,
        }
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64, PlanError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| PlanError::Config(format!("{key} must be a number, got '{value}'")))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, PlanError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(PlanError::Config(format!(
            "{key} must be true or false, got '{value}'"
        ))),
    }
}
