// ABOUTME: Typed failure union returned by the nutrition calculation engine
// ABOUTME: Missing inputs, out-of-range values, and unrecognized reference keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use serde_json::json;
use thiserror::Error;

/// Errors produced by the calculation engine, returned as values from every operation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NutritionError {
    /// A required numeric field was absent, non-positive, or not finite
    #[error("missing required input: {field}")]
    MissingRequiredInput {
        /// Name of the missing field
        field: &'static str,
    },

    /// A supplied value lies outside its accepted domain
    #[error("{field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// Value that was supplied
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// A reference-table key did not match any known entry
    #[error("unrecognized {kind} key: {key}")]
    UnrecognizedKey {
        /// Which table was consulted (e.g. "activity level")
        kind: &'static str,
        /// Key that was supplied
        key: String,
    },
}

impl NutritionError {
    /// Create a "missing required input" error
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingRequiredInput { field }
    }

    /// Create an "out of range" error
    #[must_use]
    pub const fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::ValueOutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// Create an "unrecognized key" error
    #[must_use]
    pub fn unrecognized(kind: &'static str, key: impl Into<String>) -> Self {
        Self::UnrecognizedKey {
            kind,
            key: key.into(),
        }
    }

    /// Require a strictly positive, finite value
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredInput` naming `field` when `value` is `<= 0` or not finite
    pub fn require_positive(field: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::missing(field))
        }
    }

    /// Require a value within an inclusive range
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `value` is outside `min..=max` or not finite
    pub fn require_within(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, Self> {
        if value.is_finite() && (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(Self::out_of_range(field, value, min, max))
        }
    }

    /// Name of the input field this error refers to, when it refers to one
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingRequiredInput { field } | Self::ValueOutOfRange { field, .. } => {
                Some(field)
            }
            Self::UnrecognizedKey { .. } => None,
        }
    }
}

impl From<NutritionError> for AppError {
    fn from(error: NutritionError) -> Self {
        match &error {
            NutritionError::MissingRequiredInput { field } => {
                Self::new(ErrorCode::MissingRequiredField, error.to_string()).with_field(*field)
            }
            NutritionError::ValueOutOfRange {
                field,
                value,
                min,
                max,
            } => Self::new(ErrorCode::ValueOutOfRange, error.to_string())
                .with_field(*field)
                .with_details(json!({ "value": value, "min": min, "max": max })),
            NutritionError::UnrecognizedKey { kind, key } => {
                Self::new(ErrorCode::UnrecognizedKey, error.to_string())
                    .with_details(json!({ "kind": kind, "key": key }))
            }
        }
    }
}
