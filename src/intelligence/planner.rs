// ABOUTME: End-to-end daily planning from a profile request to calories and macros
// ABOUTME: Runs estimator, resolver, and macro breakdown, with a parallel batch variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::calorie_target::{resolve_calorie_target, CalorieTarget, CalorieTargetRequest};
use super::macro_breakdown::{
    compute_default_macro_breakdown, compute_macro_breakdown, MacroBreakdown,
};
use super::meal_distribution::DailyTotals;
use super::nutrition_calculator::{estimate_energy, EnergyEstimate};
use crate::config::NutritionConfig;
use pierre_nutrition_core::errors::NutritionError;
use pierre_nutrition_core::models::{ActivityLevel, BiometricProfile, DietGoal, GoalSignals};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

/// User-chosen protein factor and carbohydrate share replacing the default split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroOverride {
    /// Protein (g per kg of body weight)
    pub protein_g_per_kg: f64,
    /// Carbohydrate share of the calories left after protein (0-1)
    pub carb_fraction_of_remainder: f64,
}

/// One planning request, as supplied by a caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRequest {
    /// Body metrics
    pub profile: BiometricProfile,
    /// Activity level key; unknown keys use the sedentary factor
    pub activity_level: String,
    /// Diet goal key; required
    #[serde(default)]
    pub diet_goal: Option<String>,
    /// Optional goal signals; the one-month goal weight is required
    #[serde(default)]
    pub signals: GoalSignals,
    /// Replaces the default macro split when present
    #[serde(default)]
    pub macro_override: Option<MacroOverride>,
}

/// Result of planning one request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyPlan {
    /// Diet goal applied
    pub diet_goal: DietGoal,
    /// BMR and TDEE
    pub energy: EnergyEstimate,
    /// Resolved calorie target
    pub target: CalorieTarget,
    /// Macro breakdown of the final target
    pub macros: MacroBreakdown,
}

impl DailyPlan {
    /// Totals for the meal distributor
    #[must_use]
    pub fn daily_totals(&self) -> DailyTotals {
        DailyTotals::from(&self.macros)
    }
}

/// Plan calories and macros for one request
///
/// # Errors
///
/// Returns `MissingRequiredInput` for a missing diet goal, goal weight, or non-positive
/// profile measurement, `UnrecognizedKey` for an unknown diet goal key, and
/// `ValueOutOfRange` for out-of-domain signals or overrides
pub fn plan_daily_targets(
    request: &PlanRequest,
    config: &NutritionConfig,
) -> Result<DailyPlan, NutritionError> {
    let diet_goal = DietGoal::from_optional_key(request.diet_goal.as_deref())?;
    let activity_level = ActivityLevel::from_key_or_default(&request.activity_level);

    let energy = estimate_energy(
        &request.profile,
        activity_level,
        &config.bmr,
        &config.activity_factors,
    )?;

    let target = resolve_calorie_target(
        &CalorieTargetRequest {
            bmr: energy.bmr,
            tdee: energy.tdee,
            current_weight_kg: request.profile.current_weight_kg,
            signals: request.signals,
            diet_goal,
        },
        config,
    )?;

    let macros = match request.macro_override {
        Some(custom) => compute_macro_breakdown(
            target.final_target_calories,
            custom.protein_g_per_kg,
            request.profile.current_weight_kg,
            custom.carb_fraction_of_remainder,
        )?,
        None => compute_default_macro_breakdown(
            target.final_target_calories,
            diet_goal,
            &config.macro_splits,
        )?,
    };

    debug!(
        goal = %diet_goal,
        final_target_calories = target.final_target_calories,
        custom_macros = request.macro_override.is_some(),
        "Planned daily targets"
    );

    Ok(DailyPlan {
        diet_goal,
        energy,
        target,
        macros,
    })
}

/// Plan independent requests in parallel; results keep the request order
#[must_use]
pub fn plan_batch(
    requests: &[PlanRequest],
    config: &NutritionConfig,
) -> Vec<Result<DailyPlan, NutritionError>> {
    let _span = info_span!("plan_batch", request_count = requests.len()).entered();
    requests
        .par_iter()
        .map(|request| plan_daily_targets(request, config))
        .collect()
}
