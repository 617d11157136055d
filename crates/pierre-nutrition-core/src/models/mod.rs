// ABOUTME: Input value records consumed by the nutrition calculation engine
// ABOUTME: Biometric profile, optional goal signals, and reference-table keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plain input records.
//!
//! These are constructed fresh from caller-supplied data for every calculation and
//! never mutated by the engine. Persistence belongs to the caller.

mod profile;
mod reference;

pub use profile::{BiometricProfile, GoalSignals, Sex};
pub use reference::{ActivityLevel, DietGoal};
