//! # Container Advisor
//!
//! Recommends storage containers for a batch of servings. For each storage
//! kind up to three packing strategies are evaluated, in preference order:
//!
//! - **single-serve**: one serving per container, only when single servings are
//!   preferred and there are at most 12 servings
//! - **multi-serve**: two servings per container, from 2 servings up
//! - **bulk**: up to 8 servings per container, from 4 servings up, kept only
//!   when the chosen container holds at least 32 oz
//!
//! Containers are chosen by best fit: the smallest eligible catalog entry with
//! 10% headroom over the target volume, or the largest eligible entry when
//! nothing is big enough.
//!
//! ```rust
//! use meal_prep::container_advisor::{format_container_recommendation, get_container_recommendations, RecipeType};
//!
//! let plan = get_container_recommendations(6, 4, 2, RecipeType::Mixed, true);
//! assert!(!plan.freeze.is_empty());
//! assert!(!plan.fresh.is_empty());
//!
//! let all = plan.all.expect("six servings fit at least one strategy");
//! assert_eq!(format_container_recommendation(&all), "2x 24 oz (multi serve)");
//! ```

use crate::container_catalog::{containers_for, ContainerSize, StorageKind};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

const HEADROOM: f64 = 1.1;
const SINGLE_SERVE_MAX_SERVINGS: u32 = 12;
const MULTI_SERVE_SERVINGS: u32 = 2;
const BULK_MIN_SERVINGS: u32 = 4;
const BULK_MAX_SERVINGS_PER_CONTAINER: u32 = 8;
const BULK_MIN_CONTAINER_OZ: f64 = 32.0;

/// Broad recipe consistency, which decides the volume of one serving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeType {
    Soup,
    Stew,
    Solid,
    Liquid,
    #[default]
    Mixed,
}

/// Packing strategy of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerType {
    SingleServe,
    MultiServe,
    Bulk,
}

/// A container choice for a number of servings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerRecommendation {
    pub servings: u32,
    pub container_size: ContainerSize,
    pub container_type: ContainerType,
    /// Number of containers needed
    pub quantity: u32,
    /// Total food volume in ounces
    pub volume: f64,
    pub recommendations: Vec<String>,
}

/// Recommendations for the freezer portion, the fridge portion and the whole batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerPlan {
    pub freeze: Vec<ContainerRecommendation>,
    pub fresh: Vec<ContainerRecommendation>,
    /// Best fridge option for the whole batch; `None` below two servings
    pub all: Option<ContainerRecommendation>,
}

impl RecipeType {
    /// Parse a recipe type label; unknown labels fall back to mixed
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "soup" => RecipeType::Soup,
            "stew" => RecipeType::Stew,
            "solid" => RecipeType::Solid,
            "liquid" => RecipeType::Liquid,
            _ => RecipeType::Mixed,
        }
    }

    /// Ounces taken by one serving
    pub const fn volume_per_serving(&self) -> f64 {
        match self {
            RecipeType::Soup => 12.0,
            RecipeType::Stew => 10.0,
            RecipeType::Liquid => 12.0,
            RecipeType::Solid => 6.0,
            RecipeType::Mixed => 8.0,
        }
    }
}

impl ContainerType {
    pub fn label(&self) -> &'static str {
        match self {
            ContainerType::SingleServe => "single-serve",
            ContainerType::MultiServe => "multi-serve",
            ContainerType::Bulk => "bulk",
        }
    }
}

impl ContainerRecommendation {
    /// Servings that fit in one container of this size
    pub fn servings_per_container(&self, volume_per_serving: f64) -> u32 {
        servings_per_container(&self.container_size, volume_per_serving)
    }
}

/// Smallest eligible container with headroom over `target_volume`, else the largest eligible one
pub fn find_best_fit(target_volume: f64, kind: StorageKind) -> Option<ContainerSize> {
    let eligible = containers_for(kind);
    let required = target_volume * HEADROOM;

    match eligible.clone().find(|size| size.volume_oz >= required) {
        Some(size) => Some(*size),
        None => {
            let largest = eligible.last().copied();
            if let Some(size) = &largest {
                debug!(
                    "No {:?} container holds {:.1} oz, falling back to {}",
                    kind, required, size.label
                );
            }
            largest
        }
    }
}

/// Evaluate every applicable packing strategy for `servings` in `kind` storage
pub fn recommend_for(
    servings: u32,
    kind: StorageKind,
    recipe_type: RecipeType,
    prefer_single_serve: bool,
) -> Vec<ContainerRecommendation> {
    let mut recommendations = Vec::new();
    if servings == 0 {
        return recommendations;
    }

    let per_serving = recipe_type.volume_per_serving();

    if prefer_single_serve && servings <= SINGLE_SERVE_MAX_SERVINGS {
        if let Some(size) = find_best_fit(per_serving, kind) {
            recommendations.push(build_recommendation(
                servings,
                size,
                ContainerType::SingleServe,
                per_serving,
                kind,
            ));
        }
    }

    if servings >= MULTI_SERVE_SERVINGS {
        let target = MULTI_SERVE_SERVINGS as f64 * per_serving;
        if let Some(size) = find_best_fit(target, kind) {
            recommendations.push(build_recommendation(
                servings,
                size,
                ContainerType::MultiServe,
                per_serving,
                kind,
            ));
        }
    }

    if servings >= BULK_MIN_SERVINGS {
        let target = servings.min(BULK_MAX_SERVINGS_PER_CONTAINER) as f64 * per_serving;
        match find_best_fit(target, kind) {
            Some(size) if size.volume_oz >= BULK_MIN_CONTAINER_OZ => {
                recommendations.push(build_recommendation(
                    servings,
                    size,
                    ContainerType::Bulk,
                    per_serving,
                    kind,
                ));
            }
            _ => trace!("Bulk packing skipped for {} servings", servings),
        }
    }

    debug!(
        "{} {:?} servings of {:?}: {} container options",
        servings,
        kind,
        recipe_type,
        recommendations.len()
    );
    recommendations
}

/// Container recommendations for a meal-prep batch split between freezer and fridge
pub fn get_container_recommendations(
    total_servings: u32,
    freeze_servings: u32,
    fresh_servings: u32,
    recipe_type: RecipeType,
    prefer_single_serve: bool,
) -> ContainerPlan {
    ContainerPlan {
        freeze: recommend_for(
            freeze_servings,
            StorageKind::Freezer,
            recipe_type,
            prefer_single_serve,
        ),
        fresh: recommend_for(
            fresh_servings,
            StorageKind::Fridge,
            recipe_type,
            prefer_single_serve,
        ),
        all: recommend_for(total_servings, StorageKind::Fridge, recipe_type, false)
            .into_iter()
            .next(),
    }
}

/// One-line summary such as "3x 16 oz (1 pint) (multi serve)"
pub fn format_container_recommendation(recommendation: &ContainerRecommendation) -> String {
    format!(
        "{}x {} ({})",
        recommendation.quantity,
        recommendation.container_size.label,
        recommendation.container_type.label().replace('-', " ")
    )
}

fn servings_per_container(size: &ContainerSize, volume_per_serving: f64) -> u32 {
    ((size.volume_oz / volume_per_serving).floor() as u32).max(1)
}

fn build_recommendation(
    servings: u32,
    size: ContainerSize,
    container_type: ContainerType,
    volume_per_serving: f64,
    kind: StorageKind,
) -> ContainerRecommendation {
    let per_container = servings_per_container(&size, volume_per_serving);
    let quantity = servings.div_ceil(per_container);

    trace!(
        "{} x {} ({} servings each) for {} {} servings",
        quantity,
        size.label,
        per_container,
        servings,
        container_type.label()
    );

    ContainerRecommendation {
        servings,
        container_size: size,
        container_type,
        quantity,
        volume: servings as f64 * volume_per_serving,
        recommendations: storage_tips(kind, container_type, quantity),
    }
}

fn storage_tips(kind: StorageKind, container_type: ContainerType, quantity: u32) -> Vec<String> {
    let mut tips: Vec<String> = match kind {
        StorageKind::Freezer => vec![
            "Leave 1/2 inch of headspace for expansion when freezing".to_string(),
            "Thaw overnight in the fridge before reheating".to_string(),
        ],
        _ => vec![
            "Leave a little headspace so lids seal without pressing on the food".to_string(),
            "Reheat until steaming hot all the way through".to_string(),
        ],
    };

    tips.push(
        match container_type {
            ContainerType::SingleServe => "Single portions make grab and go meals easy",
            ContainerType::MultiServe => "Sized for a family meal or dinner for two",
            ContainerType::Bulk => "Store in bulk and portion later as needed",
        }
        .to_string(),
    );

    if quantity > 1 {
        tips.push(format!("You will need {} containers", quantity));
    }

    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_per_serving() {
        assert_eq!(RecipeType::Soup.volume_per_serving(), 12.0);
        assert_eq!(RecipeType::Stew.volume_per_serving(), 10.0);
        assert_eq!(RecipeType::Liquid.volume_per_serving(), 12.0);
        assert_eq!(RecipeType::Solid.volume_per_serving(), 6.0);
        assert_eq!(RecipeType::Mixed.volume_per_serving(), 8.0);
        assert_eq!(RecipeType::from_label("casserole"), RecipeType::Mixed);
        assert_eq!(RecipeType::from_label("Soup"), RecipeType::Soup);
    }

    #[test]
    fn test_best_fit_uses_headroom() {
        // 8 oz needs 8.8 oz, so the 8 oz container is too small
        let size = find_best_fit(8.0, StorageKind::Fridge).unwrap();
        assert_eq!(size.volume_oz, 12.0);

        // 20 oz needs 22 oz
        let size = find_best_fit(20.0, StorageKind::Freezer).unwrap();
        assert_eq!(size.volume_oz, 24.0);
    }

    #[test]
    fn test_best_fit_overflow_returns_largest_eligible() {
        let size = find_best_fit(500.0, StorageKind::Freezer).unwrap();
        assert_eq!(size.volume_oz, 64.0);

        let size = find_best_fit(500.0, StorageKind::Fridge).unwrap();
        assert_eq!(size.volume_oz, 128.0);
    }

    #[test]
    fn test_strategy_order_and_quantities() {
        let recs = recommend_for(4, StorageKind::Freezer, RecipeType::Mixed, true);

        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].container_type, ContainerType::SingleServe);
        assert_eq!(recs[0].container_size.volume_oz, 12.0);
        assert_eq!(recs[0].quantity, 4);

        assert_eq!(recs[1].container_type, ContainerType::MultiServe);
        assert_eq!(recs[1].container_size.volume_oz, 24.0);
        assert_eq!(recs[1].quantity, 2);

        assert_eq!(recs[2].container_type, ContainerType::Bulk);
        assert_eq!(recs[2].container_size.volume_oz, 48.0);
        assert_eq!(recs[2].quantity, 1);
        assert_eq!(recs[2].volume, 32.0);
    }

    #[test]
    fn test_single_serve_requires_preference_and_small_batch() {
        let recs = recommend_for(4, StorageKind::Fridge, RecipeType::Mixed, false);
        assert!(recs.iter().all(|r| r.container_type != ContainerType::SingleServe));

        let recs = recommend_for(13, StorageKind::Fridge, RecipeType::Mixed, true);
        assert!(recs.iter().all(|r| r.container_type != ContainerType::SingleServe));
    }

    #[test]
    fn test_one_serving_only_gets_single_serve() {
        let recs = recommend_for(1, StorageKind::Fridge, RecipeType::Soup, true);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].container_type, ContainerType::SingleServe);
        assert_eq!(recs[0].container_size.volume_oz, 16.0);

        assert!(recommend_for(1, StorageKind::Fridge, RecipeType::Soup, false).is_empty());
        assert!(recommend_for(0, StorageKind::Fridge, RecipeType::Soup, true).is_empty());
    }

    #[test]
    fn test_bulk_dropped_when_container_small() {
        // 4 solid servings need 24 oz * 1.1 = 26.4 oz -> 32 oz, kept
        let recs = recommend_for(4, StorageKind::Fridge, RecipeType::Solid, false);
        assert_eq!(recs.last().unwrap().container_type, ContainerType::Bulk);
        assert_eq!(recs.last().unwrap().container_size.volume_oz, 32.0);
    }

    #[test]
    fn test_bulk_overflow_in_freezer() {
        // 8 soup servings need 105.6 oz; the freezer tops out at 64 oz (5 servings)
        let recs = recommend_for(10, StorageKind::Freezer, RecipeType::Soup, false);
        let bulk = recs
            .iter()
            .find(|r| r.container_type == ContainerType::Bulk)
            .unwrap();
        assert_eq!(bulk.container_size.volume_oz, 64.0);
        assert_eq!(bulk.servings_per_container(12.0), 5);
        assert_eq!(bulk.quantity, 2);
    }

    #[test]
    fn test_tips_follow_storage_and_type() {
        let freezer = recommend_for(3, StorageKind::Freezer, RecipeType::Stew, true);
        assert!(freezer[0].recommendations[0].contains("headspace for expansion"));
        assert!(freezer[0].recommendations.iter().any(|t| t.contains("grab and go")));
        assert!(freezer[0]
            .recommendations
            .iter()
            .any(|t| t == "You will need 3 containers"));

        let fridge = recommend_for(2, StorageKind::Fridge, RecipeType::Stew, false);
        assert_eq!(fridge.len(), 1);
        assert!(fridge[0].recommendations.iter().any(|t| t.contains("Reheat")));
        assert!(fridge[0].recommendations.iter().any(|t| t.contains("family meal")));
        // 2 stew servings need 22 oz -> one 24 oz container, no count note
        assert_eq!(fridge[0].quantity, 1);
        assert!(!fridge[0].recommendations.iter().any(|t| t.contains("You will need")));
    }

    #[test]
    fn test_all_ignores_single_serve_preference() {
        let plan = get_container_recommendations(6, 4, 2, RecipeType::Mixed, true);
        assert_eq!(plan.freeze.len(), 3);
        assert_eq!(plan.fresh.len(), 2);

        let all = plan.all.unwrap();
        assert_eq!(all.container_type, ContainerType::MultiServe);
        assert_eq!(all.servings, 6);
        assert_eq!(all.quantity, 2);
    }

    #[test]
    fn test_all_absent_for_single_serving() {
        let plan = get_container_recommendations(1, 0, 1, RecipeType::Mixed, true);
        assert!(plan.freeze.is_empty());
        assert_eq!(plan.fresh.len(), 1);
        assert!(plan.all.is_none());
    }

    #[test]
    fn test_format_container_recommendation() {
        let recs = recommend_for(6, StorageKind::Fridge, RecipeType::Mixed, true);
        assert_eq!(format_container_recommendation(&recs[0]), "6x 12 oz (single serve)");
        assert_eq!(format_container_recommendation(&recs[2]), "1x 64 oz (half gallon) (bulk)");
    }
}
