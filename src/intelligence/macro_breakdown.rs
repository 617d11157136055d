// ABOUTME: Macronutrient breakdown from a calorie budget in grams, calories, and percentages
// ABOUTME: Generic protein-per-kg form with carb/fat split and goal-driven default splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Breakdown Calculator
//!
//! Energy factors: protein and carbohydrate 4 kcal/g, fat 9 kcal/g.
//!
//! Percentages always sum to exactly 100. Protein and carbohydrate percentages are rounded
//! independently and fat absorbs the rounding remainder.

use super::percentages::normalize_percentage_array;
use crate::config::MacroSplitConfig;
use pierre_nutrition_core::constants::{energy, percent};
use pierre_nutrition_core::errors::NutritionError;
use pierre_nutrition_core::models::DietGoal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Daily macronutrient breakdown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroBreakdown {
    /// Protein (g)
    pub protein_grams: f64,
    /// Carbohydrate (g)
    pub carb_grams: f64,
    /// Fat (g)
    pub fat_grams: f64,
    /// Calories from protein
    pub protein_calories: f64,
    /// Calories from carbohydrate
    pub carb_calories: f64,
    /// Calories from fat
    pub fat_calories: f64,
    /// Protein share of total calories
    pub protein_pct: u8,
    /// Carbohydrate share of total calories
    pub carb_pct: u8,
    /// Fat share of total calories
    pub fat_pct: u8,
    /// Protein alone met or exceeded the budget; carbohydrate and fat are zero
    pub protein_clamped: bool,
}

impl MacroBreakdown {
    /// Sum of the three calorie figures
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.protein_calories + self.carb_calories + self.fat_calories
    }

    fn from_calories(
        protein_calories: f64,
        carb_calories: f64,
        fat_calories: f64,
        total_calories: f64,
    ) -> Self {
        let [protein_pct, carb_pct, fat_pct] = normalize_percentage_array(
            [protein_calories, carb_calories, fat_calories],
            total_calories,
        );
        Self {
            protein_grams: protein_calories / energy::CALORIES_PER_GRAM_PROTEIN,
            carb_grams: carb_calories / energy::CALORIES_PER_GRAM_CARB,
            fat_grams: fat_calories / energy::CALORIES_PER_GRAM_FAT,
            protein_calories,
            carb_calories,
            fat_calories,
            protein_pct,
            carb_pct,
            fat_pct,
            protein_clamped: false,
        }
    }
}

/// Compute a breakdown from a protein target and a carbohydrate share of the remainder
///
/// Protein is `body_weight_kg x protein_g_per_kg`. The calories left after protein are
/// split between carbohydrate (`carb_fraction_of_remainder`) and fat (the rest). When
/// protein alone reaches the budget it is capped at `total_calories` and the breakdown is
/// flagged with `protein_clamped`.
///
/// # Errors
///
/// Returns `MissingRequiredInput` if the total, weight, or protein factor is not positive,
/// and `ValueOutOfRange` if the carbohydrate fraction is outside `0..=1`
pub fn compute_macro_breakdown(
    total_calories: f64,
    protein_g_per_kg: f64,
    body_weight_kg: f64,
    carb_fraction_of_remainder: f64,
) -> Result<MacroBreakdown, NutritionError> {
    NutritionError::require_positive("total_calories", total_calories)?;
    NutritionError::require_positive("protein_g_per_kg", protein_g_per_kg)?;
    NutritionError::require_positive("body_weight_kg", body_weight_kg)?;
    NutritionError::require_within(
        "carb_fraction_of_remainder",
        carb_fraction_of_remainder,
        0.0,
        1.0,
    )?;

    let requested_protein_calories =
        body_weight_kg * protein_g_per_kg * energy::CALORIES_PER_GRAM_PROTEIN;

    if requested_protein_calories >= total_calories {
        warn!(
            requested_protein_calories,
            total_calories, "Protein target meets or exceeds calorie budget, clamping"
        );
        let mut breakdown = MacroBreakdown::from_calories(total_calories, 0.0, 0.0, total_calories);
        breakdown.protein_clamped = true;
        return Ok(breakdown);
    }

    let remainder = total_calories - requested_protein_calories;
    let carb_calories = remainder * carb_fraction_of_remainder;
    let fat_calories = remainder - carb_calories;

    let breakdown = MacroBreakdown::from_calories(
        requested_protein_calories,
        carb_calories,
        fat_calories,
        total_calories,
    );
    debug!(
        total_calories,
        protein_pct = breakdown.protein_pct,
        carb_pct = breakdown.carb_pct,
        fat_pct = breakdown.fat_pct,
        "Computed macro breakdown"
    );
    Ok(breakdown)
}

/// Compute a breakdown from the default percentage split for a diet goal
///
/// # Errors
///
/// Returns `MissingRequiredInput` if the total is not positive
pub fn compute_default_macro_breakdown(
    total_calories: f64,
    diet_goal: DietGoal,
    config: &MacroSplitConfig,
) -> Result<MacroBreakdown, NutritionError> {
    NutritionError::require_positive("total_calories", total_calories)?;

    let split = config.for_goal(diet_goal);
    let share = |pct: u8| total_calories * f64::from(pct) / percent::WHOLE;

    let breakdown = MacroBreakdown::from_calories(
        share(split.protein_pct),
        share(split.carbs_pct),
        share(split.fat_pct),
        total_calories,
    );
    debug!(
        goal = %diet_goal,
        total_calories,
        "Computed default macro breakdown"
    );
    Ok(breakdown)
}
