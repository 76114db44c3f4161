// ABOUTME: Configuration module: exercise table re-exports plus process environment settings
// ABOUTME: Environment values are read once at startup and never re-read mid-session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Environment-driven collaborator and HTTP configuration
pub mod environment;

pub use environment::{AppConfig, NutritionixConfig, SheetyConfig, TwilioConfig};
pub use repsense_core::config::{ConfigError, ExerciseCatalog, ExerciseConfig, RepThresholds};
