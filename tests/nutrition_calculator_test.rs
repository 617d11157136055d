// ABOUTME: Algorithm tests for BMR and TDEE estimation
// ABOUTME: Covers Mifflin-St Jeor per sex, every activity factor, fail-soft keys, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! BMR/TDEE estimator tests
//!
//! - Mifflin-St Jeor BMR for male, female, and other
//! - TDEE with all 5 activity levels
//! - Unrecognized activity keys fall back to the sedentary factor
//! - Non-positive measurements are rejected as missing input

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_nutrition::config::NutritionConfig;
use pierre_nutrition::intelligence::{
    estimate_bmr, estimate_energy, estimate_tdee, estimate_tdee_for_key,
};
use pierre_nutrition_core::{ActivityLevel, BiometricProfile, NutritionError, Sex};

mod common;

// ============================================================================
// BMR CALCULATION TESTS - Mifflin-St Jeor Formula
// ============================================================================

#[test]
fn test_bmr_male_reference_scenario() {
    common::init_test_logging();
    let config = NutritionConfig::default();

    // 10 * 80 + 6.25 * 175 - 5 * 30 + 5 = 800 + 1093.75 - 150 + 5 = 1748.75
    let bmr = estimate_bmr(Sex::Male, 80.0, 175.0, 30, &config.bmr).unwrap();

    assert!((bmr - 1748.75).abs() < 1e-9, "BMR should be 1748.75, got {bmr}");
}

#[test]
fn test_bmr_female_typical() {
    let config = NutritionConfig::default();

    // 10 * 60 + 6.25 * 165 - 5 * 25 - 161 = 600 + 1031.25 - 125 - 161 = 1345.25
    let bmr = estimate_bmr(Sex::Female, 60.0, 165.0, 25, &config.bmr).unwrap();

    assert!(
        (bmr - 1345.25).abs() < 1e-9,
        "BMR should be 1345.25, got {bmr}"
    );
}

#[test]
fn test_bmr_other_is_mean_of_male_and_female() {
    let config = NutritionConfig::default();

    let male = estimate_bmr(Sex::Male, 70.0, 170.0, 40, &config.bmr).unwrap();
    let female = estimate_bmr(Sex::Female, 70.0, 170.0, 40, &config.bmr).unwrap();
    let other = estimate_bmr(Sex::Other, 70.0, 170.0, 40, &config.bmr).unwrap();

    assert!((other - (male + female) / 2.0).abs() < 1e-9);
    assert!((male - other - 83.0).abs() < 1e-9, "Other sits 83 kcal below male");
}

#[test]
fn test_bmr_is_not_clamped_to_a_minimum() {
    let config = NutritionConfig::default();

    // 10 * 40 + 6.25 * 140 - 5 * 80 - 161 = 400 + 875 - 400 - 161 = 714
    let bmr = estimate_bmr(Sex::Female, 40.0, 140.0, 80, &config.bmr).unwrap();

    assert!((bmr - 714.0).abs() < 1e-9);
}

#[test]
fn test_bmr_rejects_non_positive_inputs() {
    let config = NutritionConfig::default();

    assert_eq!(
        estimate_bmr(Sex::Male, 0.0, 175.0, 30, &config.bmr),
        Err(NutritionError::missing("current_weight_kg"))
    );
    assert_eq!(
        estimate_bmr(Sex::Male, 80.0, -1.0, 30, &config.bmr),
        Err(NutritionError::missing("height_cm"))
    );
    assert_eq!(
        estimate_bmr(Sex::Male, 80.0, 175.0, 0, &config.bmr),
        Err(NutritionError::missing("age_years"))
    );
    assert_eq!(
        estimate_bmr(Sex::Male, f64::NAN, 175.0, 30, &config.bmr),
        Err(NutritionError::missing("current_weight_kg"))
    );
}

// ============================================================================
// TDEE CALCULATION TESTS - Activity Factors
// ============================================================================

#[test]
fn test_tdee_moderate_reference_scenario() {
    let config = NutritionConfig::default();

    let tdee = estimate_tdee(1748.75, ActivityLevel::ModeratelyActive, &config.activity_factors)
        .unwrap();

    // 1748.75 * 1.55 = 2710.5625
    assert!((tdee - 2710.6).abs() < 0.1, "TDEE should be ~2710.6, got {tdee}");
}

#[test]
fn test_tdee_all_activity_levels() {
    let config = NutritionConfig::default();
    let bmr = 1500.0;

    let expected = [
        (ActivityLevel::Sedentary, 1800.0),
        (ActivityLevel::LightlyActive, 2062.5),
        (ActivityLevel::ModeratelyActive, 2325.0),
        (ActivityLevel::VeryActive, 2587.5),
        (ActivityLevel::ExtraActive, 2850.0),
    ];

    for (level, tdee_expected) in expected {
        let tdee = estimate_tdee(bmr, level, &config.activity_factors).unwrap();
        assert!(
            (tdee - tdee_expected).abs() < 1e-6,
            "{level} should give {tdee_expected}, got {tdee}"
        );
    }
}

#[test]
fn test_tdee_keys_match_levels() {
    let config = NutritionConfig::default();

    for level in ActivityLevel::ALL {
        let by_key = estimate_tdee_for_key(1600.0, level.key(), &config.activity_factors).unwrap();
        let by_level = estimate_tdee(1600.0, level, &config.activity_factors).unwrap();
        assert!((by_key - by_level).abs() < f64::EPSILON);
    }
}

#[test]
fn test_tdee_unknown_key_uses_sedentary_factor() {
    common::init_test_logging();
    let config = NutritionConfig::default();

    let tdee = estimate_tdee_for_key(1500.0, "marathon_monk", &config.activity_factors).unwrap();

    assert!((tdee - 1800.0).abs() < 1e-9, "Unknown key should use 1.2");
}

#[test]
fn test_tdee_rejects_non_positive_bmr() {
    let config = NutritionConfig::default();

    assert_eq!(
        estimate_tdee(0.0, ActivityLevel::Sedentary, &config.activity_factors),
        Err(NutritionError::missing("bmr"))
    );
}

// ============================================================================
// COMBINED ESTIMATE
// ============================================================================

#[test]
fn test_estimate_energy_for_profile() {
    let config = NutritionConfig::default();
    let profile = common::reference_male();

    let estimate = estimate_energy(
        &profile,
        ActivityLevel::ModeratelyActive,
        &config.bmr,
        &config.activity_factors,
    )
    .unwrap();

    assert!((estimate.bmr - 1748.75).abs() < 1e-9);
    assert!((estimate.tdee - 2710.5625).abs() < 1e-9);
    assert_eq!(estimate.activity_level, ActivityLevel::ModeratelyActive);
}

#[test]
fn test_estimator_is_idempotent() {
    let config = NutritionConfig::default();

    for profile in common::profile_grid() {
        let first = estimate_energy(
            &profile,
            ActivityLevel::VeryActive,
            &config.bmr,
            &config.activity_factors,
        );
        let second = estimate_energy(
            &profile,
            ActivityLevel::VeryActive,
            &config.bmr,
            &config.activity_factors,
        );
        assert_eq!(first, second);
    }
}

#[test]
fn test_estimate_energy_rejects_invalid_profile() {
    let config = NutritionConfig::default();
    let profile = BiometricProfile::new(Sex::Female, 30, 0.0, 60.0);

    let result = estimate_energy(
        &profile,
        ActivityLevel::Sedentary,
        &config.bmr,
        &config.activity_factors,
    );

    assert_eq!(result, Err(NutritionError::missing("height_cm")));
}
