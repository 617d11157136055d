// ABOUTME: Tests for nutrition engine configuration defaults, overrides, and validation
// ABOUTME: Environment overrides are applied serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_nutrition::config::{ConfigError, MacroDistribution, NutritionConfig};
use pierre_nutrition_core::{ActivityLevel, AppError, DietGoal, ErrorCode};
use serial_test::serial;
use std::env;
use std::ptr;

#[test]
fn test_defaults_are_valid() {
    let config = NutritionConfig::default();

    assert!(config.validate().is_ok());
    assert!((config.energy_balance.energy_density_kcal_per_kg - 7700.0).abs() < f64::EPSILON);
    assert!((config.energy_balance.goal_horizon_days - 30.0).abs() < f64::EPSILON);
    assert_eq!(
        config.macro_splits.for_goal(DietGoal::FatLoss).as_tuple(),
        (35, 35, 30)
    );
    assert_eq!(config.meal_distribution.default_meals.len(), 6);
}

#[test]
fn test_default_activity_factors() {
    let factors = NutritionConfig::default().activity_factors;

    let expected = [1.2, 1.375, 1.55, 1.725, 1.9];
    for (level, factor) in ActivityLevel::ALL.into_iter().zip(expected) {
        assert!((factors.factor_for(level) - factor).abs() < f64::EPSILON);
    }
}

#[test]
fn test_daily_adjustment_for_kg() {
    let energy = NutritionConfig::default().energy_balance;

    // 7700 kcal/kg over 30 days
    assert!((energy.daily_adjustment_for_kg(3.0) - 770.0).abs() < 1e-9);
}

#[test]
fn test_goal_floors() {
    let bounds = NutritionConfig::default().calorie_bounds;

    assert_eq!(bounds.floor_for(DietGoal::FatLoss, 900.0), Some(1200.0));
    assert_eq!(bounds.floor_for(DietGoal::FatLoss, 1748.75), Some(1948.75));
    assert_eq!(bounds.floor_for(DietGoal::Recomposition, 1000.0), Some(1400.0));
    assert_eq!(bounds.floor_for(DietGoal::Recomposition, 1500.0), Some(1600.0));
    assert_eq!(bounds.floor_for(DietGoal::MuscleGain, 1500.0), None);
}

#[test]
fn test_validation_rejects_bad_macro_split() {
    let mut config = NutritionConfig::default();
    config.macro_splits.muscle_gain = MacroDistribution {
        protein_pct: 30,
        carbs_pct: 50,
        fat_pct: 25,
    };

    let err = config.validate().unwrap_err();

    assert!(matches!(err, ConfigError::InvalidWeights(_)));
    assert!(err.to_string().contains("muscle_gain"));
}

#[test]
fn test_validation_rejects_unordered_activity_factors() {
    let mut config = NutritionConfig::default();
    config.activity_factors.moderately_active = 1.3;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_validation_rejects_inconsistent_meal_table() {
    let mut config = NutritionConfig::default();
    config.meal_distribution.default_meals[0].share_pct = 30.0;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_validation_rejects_inverted_adherence_bands() {
    let mut config = NutritionConfig::default();
    config.meal_distribution.adherence.on_target_pct = 12.0;

    assert!(config.validate().is_err());
}

#[test]
fn test_config_error_maps_to_app_error() {
    let app_error: AppError = ConfigError::Parse("Invalid NUTRITION_GOAL_HORIZON_DAYS".into()).into();
    assert_eq!(app_error.code, ErrorCode::ConfigError);

    let app_error: AppError = ConfigError::InvalidRange("bad").into();
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = NutritionConfig::default();

    let json = serde_json::to_string(&config).unwrap();
    let restored: NutritionConfig = serde_json::from_str(&json).unwrap();

    assert!(restored.validate().is_ok());
    assert_eq!(
        restored.macro_splits.recomposition,
        config.macro_splits.recomposition
    );
}

// ============================================================================
// ENVIRONMENT OVERRIDES
// ============================================================================

#[test]
#[serial]
fn test_env_override_applies() {
    env::set_var("NUTRITION_ACTIVITY_MODERATE", "1.6");
    env::set_var("NUTRITION_FAT_LOSS_FLOOR_KCAL", "1300");

    let config = NutritionConfig::load().unwrap();

    assert!((config.activity_factors.moderately_active - 1.6).abs() < f64::EPSILON);
    assert!((config.calorie_bounds.fat_loss.hard_floor_kcal - 1300.0).abs() < f64::EPSILON);

    env::remove_var("NUTRITION_ACTIVITY_MODERATE");
    env::remove_var("NUTRITION_FAT_LOSS_FLOOR_KCAL");
}

#[test]
#[serial]
fn test_env_override_parse_error() {
    env::set_var("NUTRITION_ENERGY_DENSITY_KCAL_PER_KG", "lots");

    let result = NutritionConfig::load();

    env::remove_var("NUTRITION_ENERGY_DENSITY_KCAL_PER_KG");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_env_override_failing_validation() {
    env::set_var("NUTRITION_GOAL_HORIZON_DAYS", "0");

    let result = NutritionConfig::load();

    env::remove_var("NUTRITION_GOAL_HORIZON_DAYS");
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_global_config_is_cached() {
    let first = NutritionConfig::global();
    let second = NutritionConfig::global();

    assert!(ptr::eq(first, second));
    assert!(first.validate().is_ok());
}
