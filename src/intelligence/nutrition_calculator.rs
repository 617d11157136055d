// ABOUTME: BMR and TDEE estimation using the Mifflin-St Jeor equation and activity multipliers
// ABOUTME: Pure functions over a biometric profile and configuration sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! BMR/TDEE Estimator
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use crate::config::{ActivityFactorsConfig, BmrConfig};
use pierre_nutrition_core::errors::NutritionError;
use pierre_nutrition_core::models::{ActivityLevel, BiometricProfile, Sex};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// BMR and TDEE for one profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyEstimate {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Activity level whose multiplier was applied
    pub activity_level: ActivityLevel,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female: -161
/// - Other: mean of the male and female results
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns `MissingRequiredInput` if weight, height, or age is not positive
pub fn estimate_bmr(
    sex: Sex,
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    config: &BmrConfig,
) -> Result<f64, NutritionError> {
    BiometricProfile::new(sex, age_years, height_cm, weight_kg).validate()?;

    let base = config.msj_weight_coef * weight_kg
        + config.msj_height_coef * height_cm
        + config.msj_age_coef * f64::from(age_years);

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
        Sex::Other => (config.msj_male_constant + config.msj_female_constant) / 2.0,
    };

    Ok(base + sex_constant)
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// # Errors
///
/// Returns `MissingRequiredInput` if BMR is not positive
pub fn estimate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> Result<f64, NutritionError> {
    NutritionError::require_positive("bmr", bmr)?;
    Ok(bmr * config.factor_for(activity_level))
}

/// TDEE from a serialized activity key; unrecognized keys use the sedentary factor
///
/// # Errors
///
/// Returns `MissingRequiredInput` if BMR is not positive
pub fn estimate_tdee_for_key(
    bmr: f64,
    activity_key: &str,
    config: &ActivityFactorsConfig,
) -> Result<f64, NutritionError> {
    estimate_tdee(bmr, ActivityLevel::from_key_or_default(activity_key), config)
}

/// Estimate BMR and TDEE for a full profile
///
/// # Errors
///
/// Returns `MissingRequiredInput` if any profile measurement is not positive
pub fn estimate_energy(
    profile: &BiometricProfile,
    activity_level: ActivityLevel,
    bmr_config: &BmrConfig,
    activity_config: &ActivityFactorsConfig,
) -> Result<EnergyEstimate, NutritionError> {
    let bmr = estimate_bmr(
        profile.sex,
        profile.current_weight_kg,
        profile.height_cm,
        profile.age_years,
        bmr_config,
    )?;
    let tdee = estimate_tdee(bmr, activity_level, activity_config)?;

    debug!(
        sex = %profile.sex,
        activity = %activity_level,
        bmr,
        tdee,
        "Estimated energy expenditure"
    );

    Ok(EnergyEstimate {
        bmr,
        tdee,
        activity_level,
    })
}
