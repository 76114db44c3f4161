// ABOUTME: Unit tests for environment configuration loading
// ABOUTME: Validates collaborator enablement rules, defaults, and timeout parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use repsense::config::AppConfig;
use repsense::constants::endpoints;
use repsense::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::time::Duration;

const VARS: &[&str] = &[
    "NUTRITIONIX_APP_ID",
    "NUTRITIONIX_API_KEY",
    "NUTRITIONIX_API_URL",
    "TWILIO_ACCOUNT_SID",
    "TWILIO_AUTH_TOKEN",
    "TWILIO_PHONE_NUMBER",
    "TWILIO_API_BASE",
    "SHEETY_API_URL",
    "HTTP_CLIENT_TIMEOUT_SECS",
    "HTTP_CLIENT_CONNECT_TIMEOUT_SECS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_empty_environment_disables_collaborators() {
    clear_env();

    let config = AppConfig::from_env().unwrap();

    assert!(config.nutritionix.is_none());
    assert!(config.twilio.is_none());
    assert!(config.sheety.is_none());
    assert_eq!(config.http.timeout, Duration::from_secs(30));
    assert_eq!(config.http.connect_timeout, Duration::from_secs(10));
}

#[test]
#[serial]
fn test_full_environment_enables_collaborators() {
    clear_env();
    env::set_var("NUTRITIONIX_APP_ID", "app");
    env::set_var("NUTRITIONIX_API_KEY", "key");
    env::set_var("TWILIO_ACCOUNT_SID", "AC1");
    env::set_var("TWILIO_AUTH_TOKEN", "token");
    env::set_var("TWILIO_PHONE_NUMBER", "+15550000");
    env::set_var("SHEETY_API_URL", "https://api.sheety.co/abc/workouts/sheet1");
    env::set_var("HTTP_CLIENT_TIMEOUT_SECS", "5");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    let nutritionix = config.nutritionix.unwrap();
    assert_eq!(nutritionix.app_id, "app");
    assert_eq!(nutritionix.api_url, endpoints::NUTRITIONIX_EXERCISE_URL);

    let twilio = config.twilio.unwrap();
    assert_eq!(twilio.from_number, "+15550000");
    assert_eq!(twilio.api_base, endpoints::TWILIO_API_BASE);
    assert!(!format!("{twilio:?}").contains("\"token\""));

    assert!(config.sheety.is_some());
    assert_eq!(config.http.timeout, Duration::from_secs(5));
}

#[test]
#[serial]
fn test_partial_credentials_disable_collaborator() {
    clear_env();
    env::set_var("NUTRITIONIX_APP_ID", "app");
    env::set_var("TWILIO_ACCOUNT_SID", "AC1");
    env::set_var("TWILIO_AUTH_TOKEN", "token");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert!(config.nutritionix.is_none());
    assert!(config.twilio.is_none());
}

#[test]
#[serial]
fn test_blank_values_count_as_unset() {
    clear_env();
    env::set_var("SHEETY_API_URL", "   ");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert!(config.sheety.is_none());
}

#[test]
#[serial]
fn test_invalid_timeouts_are_rejected() {
    clear_env();
    env::set_var("HTTP_CLIENT_TIMEOUT_SECS", "soon");
    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);

    env::set_var("HTTP_CLIENT_TIMEOUT_SECS", "10");
    env::set_var("HTTP_CLIENT_CONNECT_TIMEOUT_SECS", "0");
    let err = AppConfig::from_env().unwrap_err();
    assert!(err.message.contains("HTTP_CLIENT_CONNECT_TIMEOUT_SECS"));

    clear_env();
}
