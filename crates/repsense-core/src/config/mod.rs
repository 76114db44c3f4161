// ABOUTME: Exercise configuration module for repsense-core
// ABOUTME: Re-exports the per-exercise joint/threshold table and its validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Per-exercise joint triples and rep thresholds
pub mod exercises;

pub use exercises::{ConfigError, ExerciseCatalog, ExerciseConfig, RepThresholds};
