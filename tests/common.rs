// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet test logging, sample profiles, and planning request builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::uninlined_format_args
)]
//! Shared test utilities for `pierre_nutrition`

use pierre_nutrition::intelligence::{MacroOverride, PlanRequest};
use pierre_nutrition_core::{BiometricProfile, GoalSignals, Sex};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        // Another test binary helper may already have installed a subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Male, 30 years, 175 cm, 80 kg
pub fn reference_male() -> BiometricProfile {
    BiometricProfile::new(Sex::Male, 30, 175.0, 80.0)
}

/// Female, 34 years, 165 cm, 68 kg
pub fn reference_female() -> BiometricProfile {
    BiometricProfile::new(Sex::Female, 34, 165.0, 68.0)
}

/// Planning request with default macro split
pub fn plan_request(
    profile: BiometricProfile,
    activity: &str,
    goal: &str,
    signals: GoalSignals,
) -> PlanRequest {
    PlanRequest {
        profile,
        activity_level: activity.to_owned(),
        diet_goal: Some(goal.to_owned()),
        signals,
        macro_override: None,
    }
}

/// Planning request with a custom protein factor and carbohydrate share
pub fn plan_request_with_override(
    profile: BiometricProfile,
    activity: &str,
    goal: &str,
    signals: GoalSignals,
    protein_g_per_kg: f64,
    carb_fraction_of_remainder: f64,
) -> PlanRequest {
    PlanRequest {
        macro_override: Some(MacroOverride {
            protein_g_per_kg,
            carb_fraction_of_remainder,
        }),
        ..plan_request(profile, activity, goal, signals)
    }
}

/// Grid of positive profiles covering every sex, several ages, heights, and weights
pub fn profile_grid() -> Vec<BiometricProfile> {
    let mut profiles = Vec::new();
    for sex in [Sex::Male, Sex::Female, Sex::Other] {
        for age in [18, 35, 60, 85] {
            for height in [150.0, 170.0, 195.0] {
                for weight in [45.0, 70.0, 95.0, 140.0] {
                    profiles.push(BiometricProfile::new(sex, age, height, weight));
                }
            }
        }
    }
    profiles
}
