// ABOUTME: Physiological constants shared by the nutrition calculation engine
// ABOUTME: Atwater energy factors, energy density of body mass, and planning horizons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants organized by domain.

/// Atwater energy factors (kcal per gram of macronutrient)
pub mod energy {
    /// Calories per gram of protein
    pub const CALORIES_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Calories per gram of carbohydrate
    pub const CALORIES_PER_GRAM_CARB: f64 = 4.0;
    /// Calories per gram of fat
    pub const CALORIES_PER_GRAM_FAT: f64 = 9.0;
}

/// Body-mass energy balance
pub mod body_mass {
    /// Approximate energy content of one kilogram of body-mass change (kcal/kg)
    pub const ENERGY_DENSITY_KCAL_PER_KG: f64 = 7700.0;
    /// Days in the one-month goal horizon
    pub const GOAL_HORIZON_DAYS: f64 = 30.0;
    /// Days per week, for weekly projections
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Percentage arithmetic
pub mod percent {
    /// A complete whole, expressed as a percentage
    pub const WHOLE: f64 = 100.0;
    /// Integer form of [`WHOLE`], used by the rounding normalizer
    pub const WHOLE_INT: i32 = 100;
}

/// Serialized keys for reference tables
pub mod keys {
    /// Activity-level key used when an unrecognized key is supplied
    pub const DEFAULT_ACTIVITY_LEVEL: &str = "sedentary";
}
