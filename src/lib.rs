// ABOUTME: Main library entry point for the Pierre nutrition target engine
// ABOUTME: Exposes configuration, structured logging, and the calculation pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Nutrition
//!
//! Deterministic nutrition target calculations: BMR/TDEE estimation, calorie goal
//! resolution across optional goal signals, macro breakdowns, and meal-level distribution.
//!
//! The engine holds no session state and performs no I/O. Callers fetch the profile,
//! invoke the pure functions, and persist or display the derived records.
//!
//! ## Example Usage
//!
//! ```rust
//! use pierre_nutrition::config::NutritionConfig;
//! use pierre_nutrition::intelligence::{plan_daily_targets, PlanRequest};
//! use pierre_nutrition_core::{BiometricProfile, GoalSignals, NutritionError, Sex};
//!
//! fn main() -> Result<(), NutritionError> {
//!     let config = NutritionConfig::default();
//!     let request = PlanRequest {
//!         profile: BiometricProfile::new(Sex::Female, 34, 165.0, 68.0),
//!         activity_level: "moderate".to_owned(),
//!         diet_goal: Some("fat_loss".to_owned()),
//!         signals: GoalSignals::with_goal_weight(66.0),
//!         macro_override: None,
//!     };
//!
//!     let plan = plan_daily_targets(&request, &config)?;
//!     assert_eq!(
//!         u32::from(plan.macros.protein_pct)
//!             + u32::from(plan.macros.carb_pct)
//!             + u32::from(plan.macros.fat_pct),
//!         100
//!     );
//!     Ok(())
//! }
//! ```

/// Engine configuration with environment overrides
pub mod config;

/// Nutrition calculation engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

pub use pierre_nutrition_core::{constants, errors, models};
