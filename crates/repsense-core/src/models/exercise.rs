// ABOUTME: Exercise type enumeration for tracked strength movements
// ABOUTME: Provides stable identifiers, natural-language phrases, and lenient parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Strength exercises the tracker can count
///
/// The exercise is chosen by the user; it is never inferred from the pose.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    /// Dumbbell or barbell bicep curl
    BicepCurl,
    /// Dumbbell lateral raise
    LateralRaise,
}

impl ExerciseType {
    /// Every supported exercise, in display order
    pub const ALL: [Self; 2] = [Self::BicepCurl, Self::LateralRaise];

    /// Stable snake_case identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BicepCurl => "bicep_curl",
            Self::LateralRaise => "lateral_raise",
        }
    }

    /// Plural phrase used in calorie queries and outgoing messages
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::BicepCurl => "bicep curls",
            Self::LateralRaise => "lateral raises",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

impl FromStr for ExerciseType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "bicep_curl" | "bicep_curls" | "curl" | "curls" => Ok(Self::BicepCurl),
            "lateral_raise" | "lateral_raises" => Ok(Self::LateralRaise),
            other => Err(AppError::invalid_input(format!(
                "Unknown exercise: '{other}'. Valid options: bicep_curl, lateral_raise"
            ))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_identifier_and_phrase() {
        assert_eq!("bicep_curl".parse::<ExerciseType>().unwrap(), ExerciseType::BicepCurl);
        assert_eq!("Lateral Raises".parse::<ExerciseType>().unwrap(), ExerciseType::LateralRaise);
        assert_eq!("bicep-curl".parse::<ExerciseType>().unwrap(), ExerciseType::BicepCurl);
    }

    #[test]
    fn test_unknown_exercise_is_rejected() {
        assert!("squat".parse::<ExerciseType>().is_err());
    }

    #[test]
    fn test_display_is_phrase() {
        assert_eq!(ExerciseType::BicepCurl.to_string(), "bicep curls");
    }
}
