// ABOUTME: Quick profile-based daily targets and selection of the meal-splitter input totals
// ABOUTME: Priority order is manual breakdown, then planner result, then profile estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal_distribution::DailyTotals;
use super::nutrition_calculator::estimate_energy;
use crate::config::NutritionConfig;
use pierre_nutrition_core::constants::{energy, percent};
use pierre_nutrition_core::errors::NutritionError;
use pierre_nutrition_core::models::{ActivityLevel, BiometricProfile, DietGoal};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Rounded daily targets estimated from a profile alone
///
/// Carbohydrate and fat are `None` when the calories left after protein do not cover them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProfileEstimate {
    /// Target calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrate (g)
    pub carbs_g: Option<f64>,
    /// Fat (g)
    pub fat_g: Option<f64>,
}

impl ProfileEstimate {
    /// Complete totals, when carbohydrate and fat are both available
    #[must_use]
    pub fn daily_totals(&self) -> Option<DailyTotals> {
        Some(DailyTotals {
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g?,
            fat_g: self.fat_g?,
        })
    }
}

/// Estimate daily targets from a profile without a goal weight
///
/// Target calories are TDEE plus a fixed goal adjustment, protein follows a per-goal g/kg
/// recommendation, fat takes a fixed share of calories, and carbohydrate fills the rest.
///
/// # Errors
///
/// Returns `MissingRequiredInput` if any profile measurement is not positive
pub fn estimate_daily_targets(
    profile: &BiometricProfile,
    activity_level: ActivityLevel,
    diet_goal: DietGoal,
    config: &NutritionConfig,
) -> Result<ProfileEstimate, NutritionError> {
    let energy_estimate = estimate_energy(
        profile,
        activity_level,
        &config.bmr,
        &config.activity_factors,
    )?;
    let quick = &config.quick_estimate;

    let target_calories = energy_estimate.tdee + quick.adjustment_for(diet_goal);
    let protein_g = profile.current_weight_kg * quick.protein_g_per_kg_for(diet_goal);
    let fat_g = (target_calories * quick.fat_share_pct / percent::WHOLE
        / energy::CALORIES_PER_GRAM_FAT)
        .round();
    let carbs_g = ((target_calories
        - protein_g * energy::CALORIES_PER_GRAM_PROTEIN
        - fat_g * energy::CALORIES_PER_GRAM_FAT)
        / energy::CALORIES_PER_GRAM_CARB)
        .round();

    let estimate = ProfileEstimate {
        calories: target_calories.round(),
        protein_g: protein_g.round(),
        carbs_g: (carbs_g > 0.0).then_some(carbs_g),
        fat_g: (fat_g > 0.0).then_some(fat_g),
    };
    debug!(goal = %diet_goal, calories = estimate.calories, "Estimated profile targets");
    Ok(estimate)
}

/// Where the daily totals fed to the meal distributor came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DailyTotalsSource {
    /// User-entered macro breakdown
    Manual,
    /// Calorie planner result
    Planner,
    /// Quick profile estimate
    ProfileEstimate,
}

/// Daily totals together with their source
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SelectedTotals {
    /// Totals to distribute
    pub totals: DailyTotals,
    /// Which input supplied them
    pub source: DailyTotalsSource,
}

/// Pick the first available totals: manual, then planner, then a complete profile estimate
#[must_use]
pub fn select_daily_totals(
    manual: Option<DailyTotals>,
    planner: Option<DailyTotals>,
    estimate: Option<&ProfileEstimate>,
) -> Option<SelectedTotals> {
    let candidates = [
        (manual, DailyTotalsSource::Manual),
        (planner, DailyTotalsSource::Planner),
        (
            estimate.and_then(ProfileEstimate::daily_totals),
            DailyTotalsSource::ProfileEstimate,
        ),
    ];
    candidates
        .into_iter()
        .find_map(|(totals, source)| totals.map(|totals| SelectedTotals { totals, source }))
}
