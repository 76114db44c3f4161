// ABOUTME: Per-exercise configuration table: which joint triple to measure and the rep thresholds
// ABOUTME: Extending to a new exercise means adding a row here, never touching the state machine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Exercise configuration table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::constants::thresholds;
use crate::errors::{AppError, ErrorCode};
use crate::models::{ExerciseType, Joint, JointTriple};

/// Configuration-related errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Threshold outside the estimator's output range
    #[error("Threshold {value:.1} for {name} is outside 0-180 degrees")]
    ThresholdOutOfRange {
        /// Which threshold
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Down threshold does not lie above the up threshold
    #[error("Down threshold {down:.1} must be greater than up threshold {up:.1}")]
    InvertedThresholds {
        /// Extension threshold
        down: f64,
        /// Contraction threshold
        up: f64,
    },

    /// No table entry for the exercise
    #[error("No configuration for exercise {0}")]
    UnknownExercise(ExerciseType),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string())
    }
}

/// Angle thresholds that drive the rep state machine
///
/// An angle above `down_degrees` confirms the extended position; an angle
/// below `up_degrees` after an extension completes a repetition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepThresholds {
    /// Extension threshold in degrees
    pub down_degrees: f64,
    /// Contraction threshold in degrees
    pub up_degrees: f64,
}

impl Default for RepThresholds {
    fn default() -> Self {
        Self {
            down_degrees: thresholds::DEFAULT_DOWN_DEGREES,
            up_degrees: thresholds::DEFAULT_UP_DEGREES,
        }
    }
}

impl RepThresholds {
    /// Create validated thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if either value lies outside `0..=180` or if
    /// `down_degrees <= up_degrees`.
    pub fn new(down_degrees: f64, up_degrees: f64) -> Result<Self, ConfigError> {
        let candidate = Self {
            down_degrees,
            up_degrees,
        };
        candidate.validate()?;
        Ok(candidate)
    }

    /// Validate these thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = 0.0..=thresholds::MAX_DEGREES;
        if !range.contains(&self.down_degrees) {
            return Err(ConfigError::ThresholdOutOfRange {
                name: "down",
                value: self.down_degrees,
            });
        }
        if !range.contains(&self.up_degrees) {
            return Err(ConfigError::ThresholdOutOfRange {
                name: "up",
                value: self.up_degrees,
            });
        }
        if self.down_degrees <= self.up_degrees {
            return Err(ConfigError::InvertedThresholds {
                down: self.down_degrees,
                up: self.up_degrees,
            });
        }
        Ok(())
    }
}

/// One row of the exercise table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseConfig {
    /// Exercise this row configures
    pub exercise: ExerciseType,
    /// Joints whose angle is tracked
    pub joints: JointTriple,
    /// Thresholds for the tracked angle
    pub thresholds: RepThresholds,
}

/// Left arm: shoulder, elbow (vertex), wrist
const LEFT_ELBOW_FLEXION: JointTriple =
    JointTriple::new(Joint::LeftShoulder, Joint::LeftElbow, Joint::LeftWrist);

/// Lookup table keyed by exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseCatalog {
    entries: BTreeMap<ExerciseType, ExerciseConfig>,
}

impl Default for ExerciseCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl ExerciseCatalog {
    /// Built-in calibration for every supported exercise
    ///
    /// Both shipped exercises track the left elbow with 160/30 degree
    /// thresholds.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self {
            entries: BTreeMap::new(),
        };
        for exercise in ExerciseType::ALL {
            catalog.insert(ExerciseConfig {
                exercise,
                joints: LEFT_ELBOW_FLEXION,
                thresholds: RepThresholds::default(),
            });
        }
        catalog
    }

    /// Add or replace a row
    pub fn insert(&mut self, config: ExerciseConfig) {
        self.entries.insert(config.exercise, config);
    }

    /// Configuration for an exercise
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownExercise` when the table has no row.
    pub fn get(&self, exercise: ExerciseType) -> Result<ExerciseConfig, ConfigError> {
        self.entries
            .get(&exercise)
            .copied()
            .ok_or(ConfigError::UnknownExercise(exercise))
    }

    /// Replace the thresholds of an existing row
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the thresholds are invalid or the exercise has
    /// no row.
    pub fn override_thresholds(
        &mut self,
        exercise: ExerciseType,
        thresholds: RepThresholds,
    ) -> Result<(), ConfigError> {
        thresholds.validate()?;
        let mut config = self.get(exercise)?;
        config.thresholds = thresholds;
        self.insert(config);
        Ok(())
    }

    /// All rows, in exercise declaration order
    pub fn iter(&self) -> impl Iterator<Item = &ExerciseConfig> {
        self.entries.values()
    }
}
