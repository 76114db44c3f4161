// ABOUTME: Seam between the rep state machine and the external calorie-per-rep service
// ABOUTME: Defines the lookup trait, its query type, and a disabled implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use async_trait::async_trait;
use repsense_core::constants::service_names;
use repsense_core::errors::provider::{ProviderError, ProviderResult};
use repsense_core::models::{ExerciseType, Gender, Profile};
use serde::{Deserialize, Serialize};

/// Parameters of a calorie lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieQuery {
    /// Exercise performed
    pub exercise: ExerciseType,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Number of repetitions the estimate should cover
    pub reps: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
    /// Gender
    pub gender: Gender,
}

impl CalorieQuery {
    /// Query for the cost of a single repetition
    #[must_use]
    pub fn single_rep(profile: &Profile) -> Self {
        Self {
            exercise: profile.exercise,
            weight_kg: profile.weight_kg,
            reps: 1,
            height_cm: profile.height_cm,
            age_years: profile.age_years,
            gender: profile.gender,
        }
    }
}

/// Source of calories-per-repetition estimates
///
/// The rep state machine calls this at most once per session, on the first
/// completed rep, and caches the answer.
#[async_trait]
pub trait CalorieLookup: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Calories burned by one repetition described by `query`
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the service is unreachable, not
    /// configured, or answers with unusable data.
    async fn calories_per_rep(&self, query: &CalorieQuery) -> ProviderResult<f64>;
}

/// Lookup used when no calorie service is configured; always fails
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledCalorieLookup;

#[async_trait]
impl CalorieLookup for DisabledCalorieLookup {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn calories_per_rep(&self, _query: &CalorieQuery) -> ProviderResult<f64> {
        Err(ProviderError::NotConfigured {
            provider: service_names::NUTRITIONIX.to_owned(),
        })
    }
}
