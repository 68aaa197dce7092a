//! # Plan Error Types Module
//!
//! Errors reported by the meal-prep planning layer. The calculation modules
//! never fail; these cover request validation, recipe loading and configuration.

/// Error types for meal-prep planning
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Request validation errors (negative servings, bad storage split, ...)
    Validation(String),
    /// Recipe file read or decode errors
    RecipeLoad(String),
    /// Configuration value errors
    Config(String),
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::Validation(msg) => write!(f, "Validation error: {msg}"),
            PlanError::RecipeLoad(msg) => write!(f, "Recipe load error: {msg}"),
            PlanError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for PlanError {}

impl From<anyhow::Error> for PlanError {
    fn from(err: anyhow::Error) -> Self {
        PlanError::RecipeLoad(err.to_string())
    }
}

impl From<std::io::Error> for PlanError {
    fn from(err: std::io::Error) -> Self {
        PlanError::RecipeLoad(err.to_string())
    }
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        PlanError::RecipeLoad(format!("invalid recipe JSON: {err}"))
    }
}
