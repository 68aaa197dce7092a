//! # Meal Prep Planner
//!
//! A calculator for batch cooking: parses ingredient lines, rescales recipes to
//! a new serving count, estimates how long the bigger batch takes to cook, and
//! recommends storage containers for the result.
//!
//! Every calculation is a pure function of its inputs. The [`meal_plan`] module
//! composes them for a caller and is the only place that validates input.

pub mod amount_formatter;
pub mod batch_time;
pub mod container_advisor;
pub mod container_catalog;
pub mod meal_plan;
pub mod measurement_patterns;
pub mod plan_errors;
pub mod planner_config;
pub mod quantity_parser;
pub mod recipe_model;
pub mod recipe_scaler;
pub mod storage_window;
