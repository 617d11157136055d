// ABOUTME: Configuration error types for nutrition engine settings
// ABOUTME: Defines error variants for invalid ranges, environment parsing, and weight sums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for nutrition config validation.

use pierre_nutrition_core::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., percentage not between 0-100)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access or parse error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weights don't sum to required total (e.g., not 100%)
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::EnvVar(_) | ConfigError::Parse(_) => ErrorCode::ConfigError,
            ConfigError::InvalidRange(_)
            | ConfigError::InvalidWeights(_)
            | ConfigError::ValueOutOfRange(_) => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string())
    }
}
