// ABOUTME: Calorie target resolver combining TDEE with weight, body-fat, and waist goal signals
// ABOUTME: Ordered refinement pipeline with per-diet-goal floor and ceiling policies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Target Resolver
//!
//! The resolver turns a TDEE and a set of optional goal signals into one daily calorie
//! target. Each signal is handled by one refinement step; steps run in a fixed order over
//! an accumulator that lives only for the duration of the call:
//!
//! 1. weight goal: baseline from the one-month weight change
//! 2. goal bounds: floor and ceiling policy for the diet goal
//! 3. body fat: averaged with the bounded baseline when a reduction is requested
//! 4. waist: reported as an informational alternative, never merged
//!
//! Alternatives and the final target never drop below the safety floor: the diet goal's
//! floor when it has one, and BMR plus the final margin in every case.
//!
//! Energy conversions use 7700 kcal per kilogram of body mass spread over 30 days.

use crate::config::{CalorieBoundsConfig, EnergyBalanceConfig, NutritionConfig};
use pierre_nutrition_core::constants::{body_mass, percent};
use pierre_nutrition_core::errors::NutritionError;
use pierre_nutrition_core::models::{DietGoal, GoalSignals};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Inputs to the calorie target resolver
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalorieTargetRequest {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Current body weight (kg)
    pub current_weight_kg: f64,
    /// Optional goal signals; the one-month goal weight is required
    pub signals: GoalSignals,
    /// Diet goal driving the bounds policy
    pub diet_goal: DietGoal,
}

/// Non-fatal conditions noticed while resolving a target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetWarning {
    /// The one-month waist goal implies more change than is realistic
    UnrealisticWaistChange {
        /// Requested reduction in centimeters
        change_cm: f64,
    },
}

/// Resolved daily calorie target with the scenarios that produced it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalorieTarget {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Weight-goal target after diet-goal bounds (kcal/day, rounded)
    pub weight_goal_target: f64,
    /// Body-fat-goal target, when a reduction was requested (kcal/day, rounded)
    pub body_fat_target: Option<f64>,
    /// Waist-goal alternative, informational only (kcal/day, rounded)
    pub waist_target: Option<f64>,
    /// Final daily calorie target
    pub final_target_calories: f64,
    /// Projected weekly weight change in kg; positive is gain, negative is loss.
    ///
    /// Computed as `(final - tdee) * 7 / energy density`. The operand order carries the
    /// sign convention; swapping it would report a surplus as a loss.
    pub estimated_weekly_weight_change_kg: f64,
    /// Warnings for the caller to surface
    pub warnings: Vec<TargetWarning>,
}

/// Per-call working state threaded through the refinement steps
#[derive(Debug, Default)]
struct TargetAccumulator {
    target: f64,
    weight_goal_target: f64,
    body_fat_target: Option<f64>,
    waist_target: Option<f64>,
    warnings: Vec<TargetWarning>,
}

/// Read-only context shared by every step
struct ResolverContext<'a> {
    request: &'a CalorieTargetRequest,
    goal_weight_kg: f64,
    energy: &'a EnergyBalanceConfig,
    bounds: &'a CalorieBoundsConfig,
}

impl ResolverContext<'_> {
    /// Target for shedding `kg` of body mass over the goal horizon
    fn target_for_loss_kg(&self, kg: f64) -> f64 {
        self.request.tdee - self.energy.daily_adjustment_for_kg(kg)
    }

    /// Lowest calorie figure the resolver reports for this request
    fn safety_floor(&self) -> f64 {
        let bmr_floor = self.request.bmr + self.energy.final_bmr_margin_kcal;
        self.bounds
            .floor_for(self.request.diet_goal, self.request.bmr)
            .map_or(bmr_floor, |goal_floor| goal_floor.max(bmr_floor))
    }
}

type RefinementStep = fn(&mut TargetAccumulator, &ResolverContext<'_>) -> Result<(), NutritionError>;

const PIPELINE: [(&str, RefinementStep); 4] = [
    ("weight_goal", apply_weight_goal),
    ("goal_bounds", apply_goal_bounds),
    ("body_fat", apply_body_fat_goal),
    ("waist", apply_waist_goal),
];

/// Resolve the final daily calorie target
///
/// # Errors
///
/// Returns `MissingRequiredInput` when BMR, TDEE, current weight, or the one-month goal
/// weight is absent or non-positive, and `ValueOutOfRange` when a body-fat percentage
/// exceeds 100
pub fn resolve_calorie_target(
    request: &CalorieTargetRequest,
    config: &NutritionConfig,
) -> Result<CalorieTarget, NutritionError> {
    NutritionError::require_positive("bmr", request.bmr)?;
    NutritionError::require_positive("tdee", request.tdee)?;
    NutritionError::require_positive("current_weight_kg", request.current_weight_kg)?;
    let goal_weight_kg = request.signals.required_goal_weight()?;

    let context = ResolverContext {
        request,
        goal_weight_kg,
        energy: &config.energy_balance,
        bounds: &config.calorie_bounds,
    };

    let mut acc = TargetAccumulator::default();
    for (name, step) in PIPELINE {
        step(&mut acc, &context)?;
        debug!(step = name, target = acc.target, "Calorie target refined");
    }

    let final_target_calories = acc.target.round().max(context.safety_floor().ceil());

    let weekly_kg = (final_target_calories - request.tdee) * body_mass::DAYS_PER_WEEK
        / config.energy_balance.energy_density_kcal_per_kg;

    Ok(CalorieTarget {
        bmr: request.bmr,
        tdee: request.tdee,
        weight_goal_target: acc.weight_goal_target,
        body_fat_target: acc.body_fat_target,
        waist_target: acc.waist_target,
        final_target_calories,
        estimated_weekly_weight_change_kg: round_to_hundredths(weekly_kg),
        warnings: acc.warnings,
    })
}

#[allow(clippy::unnecessary_wraps)] // signature fixed by RefinementStep
fn apply_weight_goal(
    acc: &mut TargetAccumulator,
    ctx: &ResolverContext<'_>,
) -> Result<(), NutritionError> {
    acc.target = ctx.target_for_loss_kg(ctx.request.current_weight_kg - ctx.goal_weight_kg);
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // signature fixed by RefinementStep
fn apply_goal_bounds(
    acc: &mut TargetAccumulator,
    ctx: &ResolverContext<'_>,
) -> Result<(), NutritionError> {
    let CalorieTargetRequest {
        bmr,
        tdee,
        diet_goal,
        ..
    } = *ctx.request;
    let bounded = match diet_goal {
        DietGoal::FatLoss => acc
            .target
            .min(tdee - ctx.bounds.fat_loss.min_deficit_kcal),
        DietGoal::MuscleGain => acc
            .target
            .max(tdee + ctx.bounds.muscle_gain.min_surplus_kcal),
        DietGoal::Recomposition => {
            let policy = &ctx.bounds.recomposition;
            acc.target
                .max(tdee - policy.max_deficit_kcal)
                .min(tdee + policy.max_surplus_kcal)
        }
    };
    acc.target = ctx
        .bounds
        .floor_for(diet_goal, bmr)
        .map_or(bounded, |floor| bounded.max(floor));
    acc.weight_goal_target = acc.target.round();
    Ok(())
}

fn apply_body_fat_goal(
    acc: &mut TargetAccumulator,
    ctx: &ResolverContext<'_>,
) -> Result<(), NutritionError> {
    let Some(reduction_pct) = ctx.request.signals.body_fat_reduction_pct()? else {
        return Ok(());
    };
    let fat_mass_kg = ctx.request.current_weight_kg * reduction_pct / percent::WHOLE;
    let alternative = ctx.target_for_loss_kg(fat_mass_kg).max(ctx.safety_floor());

    acc.body_fat_target = Some(alternative.round());
    acc.target = (acc.target + alternative) / 2.0;
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // signature fixed by RefinementStep
fn apply_waist_goal(
    acc: &mut TargetAccumulator,
    ctx: &ResolverContext<'_>,
) -> Result<(), NutritionError> {
    let Some(change_cm) = ctx.request.signals.waist_reduction_cm() else {
        return Ok(());
    };

    let fat_pct = change_cm * ctx.energy.waist_fat_pct_per_cm;
    let fat_mass_kg = fat_pct / percent::WHOLE * ctx.request.current_weight_kg;
    acc.waist_target = Some(
        ctx.target_for_loss_kg(fat_mass_kg)
            .max(ctx.safety_floor())
            .round(),
    );

    if change_cm > ctx.energy.waist_warning_threshold_cm {
        warn!(
            change_cm,
            threshold_cm = ctx.energy.waist_warning_threshold_cm,
            "One-month waist goal is unrealistic"
        );
        acc.warnings
            .push(TargetWarning::UnrealisticWaistChange { change_cm });
    }
    Ok(())
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
