//! # Batch Cooking Time Estimator
//!
//! Cooking time does not scale linearly with batch size. This module splits a
//! recipe's cook time into prep, active and passive phases, scales each phase
//! at its own efficiency, and adds a flat buffer for organising large batches.
//!
//! ## Model
//!
//! | difficulty | prep | active | passive |
//! |------------|------|--------|---------|
//! | easy       | 0.20 | 0.30   | 0.50    |
//! | medium     | 0.30 | 0.40   | 0.30    |
//! | hard       | 0.40 | 0.50   | 0.10    |
//!
//! Prep scales at 0.80x linear, active cooking at 0.65x, and passive cooking
//! by `max(1, scale * 0.20)` since oven and stove capacity is roughly fixed.
//!
//! ```rust
//! use meal_prep::batch_time::{estimate_batch_cooking_time, format_time_estimate, Difficulty};
//!
//! let estimate = estimate_batch_cooking_time(60.0, 4.0, 8.0, Difficulty::Medium);
//! assert_eq!(estimate.scale_factor, 2.0);
//! assert!(estimate.estimated_time > 60.0 && estimate.estimated_time < 120.0);
//! assert_eq!(format_time_estimate(90.0), "1 hr 30 min");
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

const PREP_EFFICIENCY: f64 = 0.80;
const ACTIVE_EFFICIENCY: f64 = 0.65;
const PASSIVE_EFFICIENCY: f64 = 0.20;

const LARGE_BATCH_SCALE: f64 = 5.0;
const LARGE_BATCH_BUFFER_MINUTES: f64 = 15.0;
const MEDIUM_BATCH_SCALE: f64 = 3.0;
const MEDIUM_BATCH_BUFFER_MINUTES: f64 = 10.0;

/// Recipe difficulty tier, which decides how cook time splits into phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Share of the original cook time spent in each phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseRatios {
    pub prep: f64,
    pub active: f64,
    pub passive: f64,
}

/// Per-phase minutes after scaling, rounded to whole minutes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBreakdown {
    pub prep_time: f64,
    pub active_cooking_time: f64,
    pub passive_cooking_time: f64,
}

/// Result of a batch cooking time estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchCookingTimeEstimate {
    /// Cook time of the recipe at its original size, in minutes
    pub original_time: f64,
    /// Estimated cook time for the scaled batch including buffer, in minutes
    pub estimated_time: f64,
    pub scale_factor: f64,
    pub breakdown: TimeBreakdown,
    /// Percentage saved compared to cooking the original recipe `scale_factor` times
    pub efficiency_gain: f64,
    pub tips: Vec<String>,
}

impl Difficulty {
    /// Parse a difficulty label; unknown labels fall back to medium
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub const fn phase_ratios(&self) -> PhaseRatios {
        match self {
            Difficulty::Easy => PhaseRatios {
                prep: 0.20,
                active: 0.30,
                passive: 0.50,
            },
            Difficulty::Medium => PhaseRatios {
                prep: 0.30,
                active: 0.40,
                passive: 0.30,
            },
            Difficulty::Hard => PhaseRatios {
                prep: 0.40,
                active: 0.50,
                passive: 0.10,
            },
        }
    }
}

impl BatchCookingTimeEstimate {
    /// Minutes saved compared to cooking the original recipe repeatedly
    pub fn time_saved(&self) -> f64 {
        self.original_time * self.scale_factor - self.estimated_time
    }
}

/// Estimate how long cooking a scaled batch takes
pub fn estimate_batch_cooking_time(
    original_cook_time: f64,
    original_servings: f64,
    scaled_servings: f64,
    difficulty: Difficulty,
) -> BatchCookingTimeEstimate {
    let scale_factor = scaled_servings / original_servings;
    let ratios = difficulty.phase_ratios();

    let prep = original_cook_time * ratios.prep * scale_factor * PREP_EFFICIENCY;
    let active = original_cook_time * ratios.active * scale_factor * ACTIVE_EFFICIENCY;
    let passive = original_cook_time * ratios.passive * (scale_factor * PASSIVE_EFFICIENCY).max(1.0);

    let buffer = buffer_minutes(scale_factor);
    let estimated_time = (prep + active + passive).round() + buffer;

    let linear_time = original_cook_time * scale_factor;
    let efficiency_gain = if linear_time == 0.0 {
        0.0
    } else {
        round_to_tenth((linear_time - estimated_time) / linear_time * 100.0)
    };

    debug!(
        "Batch estimate ({}): {} min x{} -> {} min (prep {:.1}, active {:.1}, passive {:.1}, buffer {})",
        difficulty.label(),
        original_cook_time,
        scale_factor,
        estimated_time,
        prep,
        active,
        passive,
        buffer
    );

    BatchCookingTimeEstimate {
        original_time: original_cook_time,
        estimated_time,
        scale_factor,
        breakdown: TimeBreakdown {
            prep_time: prep.round(),
            active_cooking_time: active.round(),
            passive_cooking_time: passive.round(),
        },
        efficiency_gain,
        tips: batch_tips(scale_factor, &ratios, buffer),
    }
}

/// Flat organisation overhead; the thresholds are checked largest first
fn buffer_minutes(scale_factor: f64) -> f64 {
    if scale_factor >= LARGE_BATCH_SCALE {
        LARGE_BATCH_BUFFER_MINUTES
    } else if scale_factor >= MEDIUM_BATCH_SCALE {
        MEDIUM_BATCH_BUFFER_MINUTES
    } else {
        0.0
    }
}

fn batch_tips(scale_factor: f64, ratios: &PhaseRatios, buffer: f64) -> Vec<String> {
    let mut tips = Vec::new();

    if scale_factor >= 3.0 {
        tips.push("Use multiple pans or sheet trays to cook in parallel".to_string());
        tips.push("Prep all ingredients before you start cooking".to_string());
    }
    if scale_factor >= 2.0 {
        tips.push("Batch similar tasks together, like chopping all vegetables at once".to_string());
    }
    if ratios.passive > 0.3 {
        tips.push("This recipe is mostly passive cooking, so larger batches add little time".to_string());
    }
    if ratios.active > 0.4 {
        tips.push("This recipe needs a lot of hands-on time, so monitor closely when cooking larger batches".to_string());
    }
    if scale_factor >= 4.0 {
        tips.push("Allow extra time for organizing and portioning a large batch".to_string());
    }
    if buffer > 0.0 {
        tips.push(format!(
            "Includes a {} minute buffer for batch organization",
            buffer as i64
        ));
    }

    tips
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format minutes as "45 min", "1 hr", "2 hrs 15 min"
pub fn format_time_estimate(minutes: f64) -> String {
    if !minutes.is_finite() {
        return format!("{} min", minutes);
    }

    let total = minutes.round() as i64;
    if total < 60 {
        return format!("{} min", total);
    }

    let hours = total / 60;
    let remaining = total % 60;
    let hour_label = if hours == 1 { "hr" } else { "hrs" };

    if remaining == 0 {
        format!("{} {}", hours, hour_label)
    } else {
        format!("{} {} {} min", hours, hour_label, remaining)
    }
}

/// Describe the time saved by cooking one batch instead of several rounds
pub fn get_time_savings_message(estimate: &BatchCookingTimeEstimate) -> String {
    let saved = estimate.time_saved();
    if saved > 0.0 {
        format!(
            "Saves ~{} ({}% efficiency gain)",
            format_time_estimate(saved),
            format_percentage(estimate.efficiency_gain)
        )
    } else {
        "Batch cooking time is similar to cooking multiple times".to_string()
    }
}

fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
