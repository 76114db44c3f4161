// ABOUTME: User profile supplied once at session start (body metrics and contact)
// ABOUTME: Validated before a session may begin; immutable afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::profile_limits;
use crate::errors::{AppError, AppResult};

use super::ExerciseType;

/// Gender as accepted by the calorie lookup service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

impl Gender {
    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// Per-session user input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Exercise being performed
    pub exercise: ExerciseType,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
    /// Gender
    pub gender: Gender,
    /// Phone number (or other address) that receives the session summary
    pub contact: String,
}

impl Profile {
    /// Check body metrics are physiologically plausible
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ValueOutOfRange` when weight, height or age is
    /// outside the accepted limits.
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite()
            || self.weight_kg <= 0.0
            || self.weight_kg > profile_limits::MAX_WEIGHT_KG
        {
            return Err(AppError::out_of_range(format!(
                "Weight {:.1}kg is outside accepted range (0-{:.0} kg)",
                self.weight_kg,
                profile_limits::MAX_WEIGHT_KG
            )));
        }

        if !self.height_cm.is_finite()
            || self.height_cm <= 0.0
            || self.height_cm > profile_limits::MAX_HEIGHT_CM
        {
            return Err(AppError::out_of_range(format!(
                "Height {:.1}cm is outside accepted range (0-{:.0} cm)",
                self.height_cm,
                profile_limits::MAX_HEIGHT_CM
            )));
        }

        if !(profile_limits::MIN_AGE_YEARS..=profile_limits::MAX_AGE_YEARS).contains(&self.age_years) {
            return Err(AppError::out_of_range(format!(
                "Age {} is outside accepted range ({}-{} years)",
                self.age_years,
                profile_limits::MIN_AGE_YEARS,
                profile_limits::MAX_AGE_YEARS
            )));
        }

        Ok(())
    }

    /// Whether a contact identifier was supplied
    #[must_use]
    pub fn has_contact(&self) -> bool {
        !self.contact.trim().is_empty()
    }
}
