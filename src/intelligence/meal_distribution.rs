// ABOUTME: Meal-level distributor splitting daily calorie and macro totals across named meals
// ABOUTME: Percentage tables, advisory column-sum validation, and per-meal adherence bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal-Level Distributor
//!
//! Each meal amount is rounded to the nearest whole unit on its own. Rounding drift across
//! meals is not redistributed; [`MealDistributionPlan::totals`] exposes it and
//! [`validate_column_sums`] reports whether the table itself is consistent.

use super::macro_breakdown::MacroBreakdown;
use super::percentages::normalize_percentages;
use crate::config::{AdherenceBands, MealDistributionConfig};
use pierre_nutrition_core::constants::percent;
use pierre_nutrition_core::errors::NutritionError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Daily amounts to distribute
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyTotals {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrate (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

impl From<&MacroBreakdown> for DailyTotals {
    fn from(breakdown: &MacroBreakdown) -> Self {
        Self {
            calories: breakdown.total_calories(),
            protein_g: breakdown.protein_grams,
            carbs_g: breakdown.carb_grams,
            fat_g: breakdown.fat_grams,
        }
    }
}

/// One meal's share of each daily total, in percent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPercentages {
    /// Display name of the meal
    pub meal_name: String,
    /// Share of daily calories
    pub calories_pct: f64,
    /// Share of daily protein
    pub protein_pct: f64,
    /// Share of daily carbohydrate
    pub carbs_pct: f64,
    /// Share of daily fat
    pub fat_pct: f64,
}

impl MealPercentages {
    /// A meal taking the same share of every column
    #[must_use]
    pub fn uniform(meal_name: impl Into<String>, share_pct: f64) -> Self {
        Self {
            meal_name: meal_name.into(),
            calories_pct: share_pct,
            protein_pct: share_pct,
            carbs_pct: share_pct,
            fat_pct: share_pct,
        }
    }

    fn columns(&self) -> [(&'static str, f64); 4] {
        [
            ("calories_pct", self.calories_pct),
            ("protein_pct", self.protein_pct),
            ("carbs_pct", self.carbs_pct),
            ("fat_pct", self.fat_pct),
        ]
    }
}

/// Ordered meal percentage table
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MealPercentageTable {
    /// Meals in display order
    pub meals: Vec<MealPercentages>,
}

impl MealPercentageTable {
    /// Wrap a list of meal rows
    #[must_use]
    pub const fn new(meals: Vec<MealPercentages>) -> Self {
        Self { meals }
    }

    /// Split 100% evenly across `names`; the last meal absorbs the rounding remainder
    #[must_use]
    pub fn uniform<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let shares = normalize_percentages(&vec![1.0; names.len()], names.len() as f64);
        let meals = names
            .into_iter()
            .zip(shares)
            .map(|(name, share)| MealPercentages::uniform(name, f64::from(share)))
            .collect();
        Self { meals }
    }

    /// The configured default table (six meals in the stock configuration)
    #[must_use]
    pub fn default_six_meals(config: &MealDistributionConfig) -> Self {
        Self {
            meals: config
                .default_meals
                .iter()
                .map(|meal| MealPercentages::uniform(meal.name.clone(), meal.share_pct))
                .collect(),
        }
    }

    /// Number of meals
    #[must_use]
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// Whether the table has no meals
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Column sums: calories, protein, carbs, fat
    #[must_use]
    pub fn column_sums(&self) -> [f64; 4] {
        self.meals.iter().fold([0.0; 4], |mut sums, meal| {
            for (sum, (_, value)) in sums.iter_mut().zip(meal.columns()) {
                *sum += value;
            }
            sums
        })
    }
}

/// Amounts assigned to one meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealAllocation {
    /// Display name of the meal
    pub meal_name: String,
    /// Calories (kcal)
    pub calories: u32,
    /// Protein (g)
    pub protein_g: u32,
    /// Carbohydrate (g)
    pub carbs_g: u32,
    /// Fat (g)
    pub fat_g: u32,
}

/// Sum of allocations across all meals
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanTotals {
    /// Calories (kcal)
    pub calories: u32,
    /// Protein (g)
    pub protein_g: u32,
    /// Carbohydrate (g)
    pub carbs_g: u32,
    /// Fat (g)
    pub fat_g: u32,
}

/// Per-meal allocations in table order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealDistributionPlan {
    /// Allocations in display order
    pub meals: Vec<MealAllocation>,
}

impl MealDistributionPlan {
    /// Sum the allocations to compare against the daily totals; saturates at `u32::MAX`
    #[must_use]
    pub fn totals(&self) -> PlanTotals {
        self.meals.iter().fold(PlanTotals::default(), |acc, meal| PlanTotals {
            calories: acc.calories.saturating_add(meal.calories),
            protein_g: acc.protein_g.saturating_add(meal.protein_g),
            carbs_g: acc.carbs_g.saturating_add(meal.carbs_g),
            fat_g: acc.fat_g.saturating_add(meal.fat_g),
        })
    }
}

/// Whether each percentage column sums to 100 within tolerance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnSumCheck {
    /// Calories column
    pub calories_ok: bool,
    /// Protein column
    pub protein_ok: bool,
    /// Carbohydrate column
    pub carbs_ok: bool,
    /// Fat column
    pub fat_ok: bool,
}

impl ColumnSumCheck {
    /// All four columns are consistent
    #[must_use]
    pub const fn all_ok(&self) -> bool {
        self.calories_ok && self.protein_ok && self.carbs_ok && self.fat_ok
    }
}

/// Distribute daily totals across meals
///
/// Does not require the table to be consistent; run [`validate_column_sums`] to check.
///
/// # Errors
///
/// Returns `ValueOutOfRange` if a daily total is negative, not finite, or larger than a
/// per-meal amount can hold (`u32::MAX`), or a meal percentage lies outside `0..=100`
pub fn distribute_across_meals(
    totals: &DailyTotals,
    table: &MealPercentageTable,
) -> Result<MealDistributionPlan, NutritionError> {
    let max_amount = f64::from(u32::MAX);
    let representable =
        |field, value| NutritionError::require_within(field, value, 0.0, max_amount);
    representable("calories", totals.calories)?;
    representable("protein_g", totals.protein_g)?;
    representable("carbs_g", totals.carbs_g)?;
    representable("fat_g", totals.fat_g)?;

    let meals = table
        .meals
        .iter()
        .map(|meal| -> Result<MealAllocation, NutritionError> {
            for (field, value) in meal.columns() {
                NutritionError::require_within(field, value, 0.0, percent::WHOLE)?;
            }
            Ok(MealAllocation {
                meal_name: meal.meal_name.clone(),
                calories: portion(totals.calories, meal.calories_pct),
                protein_g: portion(totals.protein_g, meal.protein_pct),
                carbs_g: portion(totals.carbs_g, meal.carbs_pct),
                fat_g: portion(totals.fat_g, meal.fat_pct),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(meal_count = meals.len(), "Distributed daily totals across meals");
    Ok(MealDistributionPlan { meals })
}

fn portion(total: f64, pct: f64) -> u32 {
    (total * pct / percent::WHOLE).round().max(0.0) as u32
}

/// Check that every percentage column sums to 100 within `tolerance_pct`
///
/// Advisory only; an empty table fails every column.
#[must_use]
pub fn validate_column_sums(table: &MealPercentageTable, tolerance_pct: f64) -> ColumnSumCheck {
    let [calories, protein, carbs, fat] =
        table.column_sums().map(|sum| (sum - percent::WHOLE).abs() <= tolerance_pct);
    ColumnSumCheck {
        calories_ok: calories,
        protein_ok: protein,
        carbs_ok: carbs,
        fat_ok: fat,
    }
}

/// How an entered amount compares to its meal target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdherenceStatus {
    /// Within the on-target band
    OnTarget,
    /// Outside on-target but within the near band
    Near,
    /// Beyond the near band
    OffTarget,
    /// No usable target to compare against
    NoTarget,
}

/// Classify `current` against `target` using percent deviation bands
#[must_use]
pub fn assess_adherence(
    current: f64,
    target: Option<f64>,
    bands: &AdherenceBands,
) -> AdherenceStatus {
    let Some(target) = target.filter(|t| t.is_finite() && *t > 0.0) else {
        return AdherenceStatus::NoTarget;
    };
    let deviation_pct = (current - target).abs() / target * percent::WHOLE;
    if deviation_pct <= bands.on_target_pct {
        AdherenceStatus::OnTarget
    } else if deviation_pct <= bands.near_pct {
        AdherenceStatus::Near
    } else {
        AdherenceStatus::OffTarget
    }
}
