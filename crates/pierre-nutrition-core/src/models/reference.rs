// ABOUTME: Reference-table keys for activity level and diet goal
// ABOUTME: Strict and fail-soft parsing of the serialized keys used by callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::keys;
use crate::errors::NutritionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityLevel {
    /// Sedentary (little or no exercise)
    #[default]
    #[serde(rename = "sedentary")]
    Sedentary,
    /// Lightly active (light exercise 1-3 days/week)
    #[serde(rename = "light")]
    LightlyActive,
    /// Moderately active (moderate exercise 3-5 days/week)
    #[serde(rename = "moderate")]
    ModeratelyActive,
    /// Very active (hard exercise 6-7 days/week)
    #[serde(rename = "active")]
    VeryActive,
    /// Extra active (very hard exercise and a physical job)
    #[serde(rename = "extra_active")]
    ExtraActive,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// Serialized key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sedentary => keys::DEFAULT_ACTIVITY_LEVEL,
            Self::LightlyActive => "light",
            Self::ModeratelyActive => "moderate",
            Self::VeryActive => "active",
            Self::ExtraActive => "extra_active",
        }
    }

    /// Parse a key, falling back to sedentary when it is not recognized
    #[must_use]
    pub fn from_key_or_default(key: &str) -> Self {
        key.parse().unwrap_or_else(|_| {
            warn!(
                activity_key = key,
                fallback = keys::DEFAULT_ACTIVITY_LEVEL,
                "Unrecognized activity level, using sedentary factor"
            );
            Self::Sedentary
        })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ActivityLevel {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.key() == normalized)
            .ok_or_else(|| NutritionError::unrecognized("activity level", s))
    }
}

/// Diet goal category driving calorie bounds and default macro ratios
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietGoal {
    /// Calorie deficit
    FatLoss,
    /// Calorie surplus
    MuscleGain,
    /// Near-maintenance body recomposition
    #[serde(alias = "recomp")]
    Recomposition,
}

impl DietGoal {
    /// All categories
    pub const ALL: [Self; 3] = [Self::FatLoss, Self::MuscleGain, Self::Recomposition];

    /// Serialized key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FatLoss => "fat_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Recomposition => "recomposition",
        }
    }

    /// Resolve an optional key; absence has no safe default
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredInput` when `key` is `None` or blank, and
    /// `UnrecognizedKey` when it names no category
    pub fn from_optional_key(key: Option<&str>) -> Result<Self, NutritionError> {
        match key.map(str::trim) {
            None | Some("") => Err(NutritionError::missing("diet_goal")),
            Some(key) => key.parse(),
        }
    }
}

impl fmt::Display for DietGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DietGoal {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fat_loss" => Ok(Self::FatLoss),
            "muscle_gain" => Ok(Self::MuscleGain),
            "recomposition" | "recomp" => Ok(Self::Recomposition),
            _ => Err(NutritionError::unrecognized("diet goal", s)),
        }
    }
}
