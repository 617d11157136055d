// ABOUTME: Core types and constants for the Pierre nutrition target engine
// ABOUTME: Foundation crate with error handling, physiological constants, and input models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Nutrition Core
//!
//! Foundation crate providing shared types and constants for the Pierre nutrition
//! target engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `NutritionError`
//! - **constants**: Physiological and energy-balance constants
//! - **models**: Plain input records (biometrics, goal signals, reference keys)

/// Unified error handling system with standard error codes and HTTP status mapping
pub mod errors;

/// Physiological and energy-balance constants
pub mod constants;

/// Input value records consumed by the calculation engine
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode, NutritionError};
pub use models::{ActivityLevel, BiometricProfile, DietGoal, GoalSignals, Sex};
