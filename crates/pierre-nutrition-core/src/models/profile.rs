// ABOUTME: Biometric profile and optional goal-signal records
// ABOUTME: Validation helpers that turn absent or non-positive values into typed errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::percent;
use crate::errors::NutritionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sex used to pick the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male constant (+5)
    Male,
    /// Female constant (-161)
    Female,
    /// Mean of the male and female equations
    Other,
}

impl Sex {
    /// Serialized key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(NutritionError::unrecognized("sex", s)),
        }
    }
}

/// Body metrics for one calculation request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BiometricProfile {
    /// Sex for the BMR constant
    pub sex: Sex,
    /// Age in whole years
    pub age_years: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Current body weight in kilograms
    pub current_weight_kg: f64,
}

impl BiometricProfile {
    /// Create a profile
    #[must_use]
    pub const fn new(sex: Sex, age_years: u32, height_cm: f64, current_weight_kg: f64) -> Self {
        Self {
            sex,
            age_years,
            height_cm,
            current_weight_kg,
        }
    }

    /// Check that weight, height, and age are all positive
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredInput` naming the first non-positive field
    pub fn validate(&self) -> Result<(), NutritionError> {
        NutritionError::require_positive("current_weight_kg", self.current_weight_kg)?;
        NutritionError::require_positive("height_cm", self.height_cm)?;
        if self.age_years == 0 {
            return Err(NutritionError::missing("age_years"));
        }
        Ok(())
    }
}

/// Optional goal signals refining the calorie target.
///
/// Each field is independent; `None`, zero, or negative means "signal not available".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct GoalSignals {
    /// Target body weight one month from now (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_weight_kg_1_month: Option<f64>,
    /// Current body-fat percentage (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_body_fat_pct: Option<f64>,
    /// Target body-fat percentage (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_body_fat_pct: Option<f64>,
    /// Current waist circumference (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_waist_cm: Option<f64>,
    /// Target waist circumference one month from now (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_waist_cm_1_month: Option<f64>,
}

impl GoalSignals {
    /// Signals carrying only the one-month weight goal
    #[must_use]
    pub const fn with_goal_weight(goal_weight_kg: f64) -> Self {
        Self {
            goal_weight_kg_1_month: Some(goal_weight_kg),
            current_body_fat_pct: None,
            target_body_fat_pct: None,
            current_waist_cm: None,
            target_waist_cm_1_month: None,
        }
    }

    /// Add current and target body-fat percentages
    #[must_use]
    pub const fn body_fat(mut self, current_pct: f64, target_pct: f64) -> Self {
        self.current_body_fat_pct = Some(current_pct);
        self.target_body_fat_pct = Some(target_pct);
        self
    }

    /// Add current and one-month target waist measurements
    #[must_use]
    pub const fn waist(mut self, current_cm: f64, target_cm: f64) -> Self {
        self.current_waist_cm = Some(current_cm);
        self.target_waist_cm_1_month = Some(target_cm);
        self
    }

    /// The one-month goal weight, required by the calorie resolver
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredInput` when the goal weight is absent or non-positive
    pub fn required_goal_weight(&self) -> Result<f64, NutritionError> {
        let goal = self
            .goal_weight_kg_1_month
            .ok_or(NutritionError::missing("goal_weight_kg_1_month"))?;
        NutritionError::require_positive("goal_weight_kg_1_month", goal)
    }

    /// Body-fat percentage points to lose, when both signals are present and current > target
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when a supplied percentage exceeds 100
    pub fn body_fat_reduction_pct(&self) -> Result<Option<f64>, NutritionError> {
        let (Some(current), Some(target)) = (
            present(self.current_body_fat_pct),
            present(self.target_body_fat_pct),
        ) else {
            return Ok(None);
        };
        NutritionError::require_within("current_body_fat_pct", current, 0.0, percent::WHOLE)?;
        NutritionError::require_within("target_body_fat_pct", target, 0.0, percent::WHOLE)?;
        Ok((current > target).then_some(current - target))
    }

    /// Waist centimeters to lose, when both measurements are present and current > target
    #[must_use]
    pub fn waist_reduction_cm(&self) -> Option<f64> {
        let current = present(self.current_waist_cm)?;
        let target = present(self.target_waist_cm_1_month)?;
        (current > target).then_some(current - target)
    }
}

/// Treat non-positive and non-finite measurements as absent
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}
