// ABOUTME: Stop-time session summary handed to the notification and activity-log sinks
// ABOUTME: Frozen copy of the final counters plus the profile and run timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::{DateTime, Duration, Utc};
use repsense_core::models::{ExerciseType, Profile};
use serde::Serialize;
use uuid::Uuid;

/// Final values of one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    /// Identifier used to correlate log lines of one run
    pub session_id: Uuid,
    /// Profile the run was started with
    pub profile: Profile,
    /// Completed repetitions
    pub rep_count: u32,
    /// Calories credited over the run
    pub total_calories: f64,
    /// Calories credited per rep, if the lookup ever ran
    pub calories_per_rep: Option<f64>,
    /// Run start
    pub started_at: DateTime<Utc>,
    /// Run stop
    pub stopped_at: DateTime<Utc>,
    /// Frames that reached the state machine
    pub frames_processed: u64,
    /// Frames skipped as detection misses or degenerate geometry
    pub frames_skipped: u64,
}

impl SessionSummary {
    /// Exercise performed
    #[must_use]
    pub const fn exercise(&self) -> ExerciseType {
        self.profile.exercise
    }

    /// Wall-clock length of the run
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.stopped_at - self.started_at
    }

    /// Whether the stop-time sinks should run
    #[must_use]
    pub const fn has_reps(&self) -> bool {
        self.rep_count > 0
    }

    /// Text delivered to the user's phone
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Exercise: {}\nReps: {}\nCalories: {:.2} kcal",
            self.exercise().phrase(),
            self.rep_count,
            self.total_calories
        )
    }
}
