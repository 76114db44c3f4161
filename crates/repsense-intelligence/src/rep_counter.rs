// ABOUTME: Debounced repetition state machine turning a stream of joint angles into rep events
// ABOUTME: Owns no session state itself; callers pass the RepSession they own for the run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Rep State Machine
//!
//! Each frame's angle is classified against two thresholds:
//!
//! - angle above `down_degrees`: the limb is extended, stage becomes
//!   [`Stage::Down`] whatever it was before. No rep is counted; this only
//!   re-arms the machine.
//! - angle below `up_degrees` while the stage is `Down`: stage becomes
//!   [`Stage::Up`], the rep count increases by one and a [`RepCompleted`]
//!   event is returned.
//! - anything else leaves the session untouched.
//!
//! Because a rep requires a preceding `Down`, small oscillations near the
//! bottom of the range never double count.
//!
//! The first completed rep triggers the only calorie lookup of the session;
//! the answer (or 0 when the lookup fails) is cached and credited for every
//! rep, so `total_calories == rep_count * calories_per_rep` always holds.

use repsense_core::config::{ConfigError, RepThresholds};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::algorithms::AngleSample;
use crate::calories::{CalorieLookup, CalorieQuery};

/// Debounce phase of the tracked joint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// No position confirmed yet
    #[default]
    None,
    /// Extended position confirmed; the next contraction counts
    Down,
    /// Contracted position reached; a rep was counted on entry
    Up,
}

/// Mutable state of one exercise run
///
/// Created zeroed at session start and only mutated through
/// [`RepStateMachine::advance`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RepSession {
    stage: Stage,
    rep_count: u32,
    total_calories: f64,
    calories_per_rep: Option<f64>,
}

impl RepSession {
    /// Fresh session: no stage, zero reps, zero calories
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current debounce stage
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Completed repetitions so far
    #[must_use]
    pub const fn rep_count(&self) -> u32 {
        self.rep_count
    }

    /// Calories credited so far
    #[must_use]
    pub const fn total_calories(&self) -> f64 {
        self.total_calories
    }

    /// Cached per-rep calories, `None` until the first rep completes
    #[must_use]
    pub const fn calories_per_rep(&self) -> Option<f64> {
        self.calories_per_rep
    }
}

/// Emitted once per completed repetition
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RepCompleted {
    /// 1-based number of this rep within the session
    pub rep_number: u32,
    /// Frame whose angle completed the rep
    pub frame_index: u64,
    /// Angle that completed the rep
    pub angle: AngleSample,
    /// Calories credited for this rep
    pub calories_per_rep: f64,
    /// Session calorie total after this rep
    pub total_calories: f64,
}

/// Classification of one angle against the thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageChange {
    /// Between thresholds, or contracted without a prior extension
    Hold,
    /// Above the down threshold; stage becomes `Down`
    Rearm,
    /// Below the up threshold after `Down`; a rep completes
    Complete,
}

/// Calorie collaborator plus the query to send it
#[derive(Clone, Copy)]
pub struct CalorieContext<'a> {
    /// Query describing the user and exercise
    pub query: &'a CalorieQuery,
    /// Service answering the query
    pub lookup: &'a dyn CalorieLookup,
}

/// Threshold-driven rep detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepStateMachine {
    thresholds: RepThresholds,
}

impl RepStateMachine {
    /// Create a state machine for the given thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the thresholds are outside `0..=180` or
    /// not ordered `down > up`.
    pub fn new(thresholds: RepThresholds) -> Result<Self, ConfigError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> RepThresholds {
        self.thresholds
    }

    /// Decide what `sample` does to a session currently in `stage`
    #[must_use]
    pub fn classify(&self, stage: Stage, sample: AngleSample) -> StageChange {
        let degrees = sample.degrees();
        // Re-arms on every extended sample, even when already Down.
        if degrees > self.thresholds.down_degrees {
            StageChange::Rearm
        } else if degrees < self.thresholds.up_degrees && stage == Stage::Down {
            StageChange::Complete
        } else {
            StageChange::Hold
        }
    }

    /// Apply one angle sample to `session`
    ///
    /// Returns the rep event when this sample completes a repetition. The
    /// calorie lookup in `calories` is awaited only for the first rep of the
    /// session; a failed lookup credits 0 calories per rep for the rest of
    /// the run and never blocks counting.
    pub async fn advance(
        &self,
        session: &mut RepSession,
        frame_index: u64,
        sample: AngleSample,
        calories: CalorieContext<'_>,
    ) -> Option<RepCompleted> {
        match self.classify(session.stage, sample) {
            StageChange::Hold => None,
            StageChange::Rearm => {
                if session.stage != Stage::Down {
                    debug!(frame = frame_index, angle = %sample, "Extension confirmed, counter armed");
                }
                session.stage = Stage::Down;
                None
            }
            StageChange::Complete => {
                session.stage = Stage::Up;
                session.rep_count = session.rep_count.saturating_add(1);

                let per_rep = match session.calories_per_rep {
                    Some(cached) => cached,
                    None => {
                        let resolved = resolve_calories_per_rep(calories).await;
                        session.calories_per_rep = Some(resolved);
                        resolved
                    }
                };
                session.total_calories += per_rep;

                Some(RepCompleted {
                    rep_number: session.rep_count,
                    frame_index,
                    angle: sample,
                    calories_per_rep: per_rep,
                    total_calories: session.total_calories,
                })
            }
        }
    }
}

/// One-time lookup; any failure or unusable value becomes 0
async fn resolve_calories_per_rep(calories: CalorieContext<'_>) -> f64 {
    match calories.lookup.calories_per_rep(calories.query).await {
        Ok(value) if value.is_finite() && value >= 0.0 => {
            info!(
                lookup = calories.lookup.name(),
                exercise = %calories.query.exercise,
                calories_per_rep = value,
                "Calories per rep resolved"
            );
            value
        }
        Ok(value) => {
            warn!(
                lookup = calories.lookup.name(),
                value,
                "Calorie lookup returned an unusable value, crediting 0 kcal per rep"
            );
            0.0
        }
        Err(e) => {
            warn!(
                lookup = calories.lookup.name(),
                provider = e.provider(),
                retryable = e.is_retryable(),
                error = %e,
                "Calorie lookup failed, crediting 0 kcal per rep"
            );
            0.0
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn machine() -> RepStateMachine {
        RepStateMachine::new(RepThresholds::default()).unwrap()
    }

    fn angle(degrees: f64) -> AngleSample {
        AngleSample::from_degrees(degrees).unwrap()
    }

    #[test]
    fn test_classify_rearms_from_any_stage() {
        let m = machine();
        for stage in [Stage::None, Stage::Down, Stage::Up] {
            assert_eq!(m.classify(stage, angle(170.0)), StageChange::Rearm);
        }
    }

    #[test]
    fn test_classify_requires_down_to_complete() {
        let m = machine();
        assert_eq!(m.classify(Stage::Down, angle(20.0)), StageChange::Complete);
        assert_eq!(m.classify(Stage::None, angle(20.0)), StageChange::Hold);
        assert_eq!(m.classify(Stage::Up, angle(20.0)), StageChange::Hold);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let m = machine();
        assert_eq!(m.classify(Stage::None, angle(160.0)), StageChange::Hold);
        assert_eq!(m.classify(Stage::Down, angle(30.0)), StageChange::Hold);
        assert_eq!(m.classify(Stage::Down, angle(90.0)), StageChange::Hold);
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let inverted = RepThresholds {
            down_degrees: 20.0,
            up_degrees: 90.0,
        };
        assert!(RepStateMachine::new(inverted).is_err());
    }

    #[tokio::test]
    async fn test_rep_count_saturates() {
        let m = machine();
        let profile_query = CalorieQuery {
            exercise: repsense_core::models::ExerciseType::BicepCurl,
            weight_kg: 70.0,
            reps: 1,
            height_cm: 175.0,
            age_years: 30,
            gender: repsense_core::models::Gender::Female,
        };
        let mut session = RepSession {
            stage: Stage::Down,
            rep_count: u32::MAX,
            total_calories: 0.0,
            calories_per_rep: Some(0.5),
        };
        let calories = CalorieContext {
            query: &profile_query,
            lookup: &crate::calories::DisabledCalorieLookup,
        };

        let event = m.advance(&mut session, 7, angle(20.0), calories).await.unwrap();
        assert_eq!(event.rep_number, u32::MAX);
        assert_eq!(session.rep_count(), u32::MAX);
        assert_eq!(session.stage(), Stage::Up);
    }

    #[test]
    fn test_new_session_is_zeroed() {
        let session = RepSession::new();
        assert_eq!(session.stage(), Stage::None);
        assert_eq!(session.rep_count(), 0);
        assert_eq!(session.total_calories(), 0.0);
        assert!(session.calories_per_rep().is_none());
    }
}
