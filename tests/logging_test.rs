// ABOUTME: Unit tests for logging functionality
// ABOUTME: Validates environment-driven logging configuration and subscriber installation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_nutrition::logging::{LogFormat, LoggingConfig, SERVICE_NAME};
use serial_test::serial;
use std::env;

const LOGGING_VARS: [&str; 7] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "SERVICE_NAME",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "LOG_INCLUDE_SPANS",
];

fn clear_logging_env() {
    for var in LOGGING_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_logging_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    assert!(config.include_location); // Should be true for production
    assert!(config.include_spans);

    clear_logging_env();
}

#[test]
#[serial]
fn test_logging_config_development_flags() {
    clear_logging_env();
    env::set_var("LOG_FORMAT", "compact");
    env::set_var("LOG_INCLUDE_THREAD", "1");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(config.include_thread);
    assert!(!config.include_location);

    clear_logging_env();
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, SERVICE_NAME);
    assert!(!config.include_location); // Should be false for development
}

#[test]
#[serial]
fn test_env_filter_includes_crate_directive() {
    clear_logging_env();
    let config = LoggingConfig {
        level: "debug".into(),
        ..LoggingConfig::default()
    };

    let filter = config.env_filter().to_string();

    assert!(
        filter.contains("pierre_nutrition=debug"),
        "filter was {filter}"
    );
}

#[test]
fn test_summary_reports_features() {
    let config = LoggingConfig {
        include_spans: true,
        ..LoggingConfig::default()
    };

    let summary = config.summary();

    assert_eq!(summary["service"]["name"], SERVICE_NAME);
    assert_eq!(summary["logging"]["features"]["spans"], true);
    assert_eq!(summary["logging"]["format"], "Pretty");
}

#[test]
#[serial]
fn test_init_installs_subscriber_once() {
    clear_logging_env();
    let config = LoggingConfig {
        format: LogFormat::Compact,
        level: "warn".into(),
        ..LoggingConfig::default()
    };

    assert!(config.init().is_ok());
    assert!(
        config.init().is_err(),
        "A second global subscriber must be rejected"
    );
}
