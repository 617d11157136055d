// ABOUTME: Nutrition target calculation engine built from pure, stateless stages
// ABOUTME: Estimator, calorie resolver, macro breakdown, meal distributor, and planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Data flows one way through the engine:
//! reference tables → estimator → resolver → macro breakdown → meal distributor.
//! Every stage is a pure function of its inputs and configuration; nothing is retained
//! between calls, so any stage may be invoked concurrently.

/// Calorie target resolution from goal signals
pub mod calorie_target;
/// Macronutrient breakdown of a calorie budget
pub mod macro_breakdown;
/// Meal-level distribution and adherence
pub mod meal_distribution;
/// BMR and TDEE estimation
pub mod nutrition_calculator;
/// Shared percentage normalizer
pub mod percentages;
/// End-to-end planning pipeline
pub mod planner;
/// Quick profile estimate and daily totals selection
pub mod profile_estimate;

pub use calorie_target::{
    resolve_calorie_target, CalorieTarget, CalorieTargetRequest, TargetWarning,
};
pub use macro_breakdown::{
    compute_default_macro_breakdown, compute_macro_breakdown, MacroBreakdown,
};
pub use meal_distribution::{
    assess_adherence, distribute_across_meals, validate_column_sums, AdherenceStatus,
    ColumnSumCheck, DailyTotals, MealAllocation, MealDistributionPlan, MealPercentageTable,
    MealPercentages, PlanTotals,
};
pub use nutrition_calculator::{
    estimate_bmr, estimate_energy, estimate_tdee, estimate_tdee_for_key, EnergyEstimate,
};
pub use percentages::{normalize_percentage_array, normalize_percentages};
pub use planner::{plan_batch, plan_daily_targets, DailyPlan, MacroOverride, PlanRequest};
pub use profile_estimate::{
    estimate_daily_targets, select_daily_totals, DailyTotalsSource, ProfileEstimate,
    SelectedTotals,
};
