// ABOUTME: Configuration management module for the nutrition target engine
// ABOUTME: Exposes engine parameters, environment overrides, and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Pierre Nutrition
//!
//! - **Nutrition**: BMR coefficients, activity multipliers, calorie bounds, macro splits,
//!   and meal distribution defaults
//! - **Error**: Configuration loading and validation errors

/// Configuration loading and validation errors
pub mod error;
/// Nutrition engine parameters
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, AdherenceBands, BmrConfig, CalorieBoundsConfig, DefaultMealShare,
    EnergyBalanceConfig, FatLossBounds, MacroDistribution, MacroSplitConfig,
    MealDistributionConfig, MuscleGainBounds, NutritionConfig, QuickEstimateConfig,
    RecompositionBounds,
};
