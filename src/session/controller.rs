// ABOUTME: Session controller owning the single active run: start, per-frame processing, stop
// ABOUTME: Stop freezes the run and fires the summary sinks exactly once, collecting failures as warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Session Controller
//!
//! The controller is the only owner of the [`RepSession`] for a run. Frames
//! reach it sequentially from the run loop, so no locking is involved. A run
//! moves through `start` → any number of `process_frame` → `stop`; after
//! `stop` the run is gone and further frames are ignored until the next
//! `start`.

use chrono::{DateTime, Utc};
use repsense_core::config::ExerciseConfig;
use repsense_core::errors::{AppError, AppResult};
use repsense_core::models::{LandmarkFrame, Profile};
use repsense_intelligence::{
    joint_angle, AngleSample, CalorieContext, CalorieLookup, CalorieQuery, DisabledCalorieLookup,
    RepCompleted, RepSession, RepStateMachine,
};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{RepEventSubscriber, SessionSummary, SummarySink};
use crate::config::AppConfig;
use crate::external::{NutritionixClient, SheetyActivityLog};
use crate::notifications::TwilioSmsNotifier;

/// Why a frame did not reach the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The pose estimator found no person
    NoDetection,
    /// A person was found but one of the configured joints was not
    MissingJoint,
    /// Two joints coincide or a coordinate is not finite
    DegenerateGeometry,
}

/// What happened to one frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// No run is active
    Inactive,
    /// Frame skipped; session state unchanged
    Skipped(SkipReason),
    /// Angle computed and applied
    Processed {
        /// Joint angle of this frame
        angle: AngleSample,
        /// Rep completed by this frame, if any
        rep: Option<RepCompleted>,
    },
}

/// Result of stopping a run
#[derive(Debug, Clone, PartialEq)]
pub struct StopReport {
    /// Final values of the run
    pub summary: SessionSummary,
    /// Sinks that accepted the summary
    pub delivered: Vec<String>,
    /// User-visible problems that did not affect the count
    pub warnings: Vec<String>,
}

struct ActiveRun {
    id: Uuid,
    profile: Profile,
    exercise: ExerciseConfig,
    machine: RepStateMachine,
    query: CalorieQuery,
    session: RepSession,
    started_at: DateTime<Utc>,
    frames_processed: u64,
    frames_skipped: u64,
}

impl ActiveRun {
    fn summary(&self, stopped_at: DateTime<Utc>) -> SessionSummary {
        SessionSummary {
            session_id: self.id,
            profile: self.profile.clone(),
            rep_count: self.session.rep_count(),
            total_calories: self.session.total_calories(),
            calories_per_rep: self.session.calories_per_rep(),
            started_at: self.started_at,
            stopped_at,
            frames_processed: self.frames_processed,
            frames_skipped: self.frames_skipped,
        }
    }
}

/// Builder wiring collaborators into a [`SessionController`]
pub struct SessionControllerBuilder {
    lookup: Arc<dyn CalorieLookup>,
    notifier: Option<Arc<dyn SummarySink>>,
    activity_log: Option<Arc<dyn SummarySink>>,
    subscribers: Vec<Arc<dyn RepEventSubscriber>>,
}

impl Default for SessionControllerBuilder {
    fn default() -> Self {
        Self {
            lookup: Arc::new(DisabledCalorieLookup),
            notifier: None,
            activity_log: None,
            subscribers: Vec::new(),
        }
    }
}

impl SessionControllerBuilder {
    /// Calorie-per-rep lookup used on the first rep of each run
    #[must_use]
    pub fn calorie_lookup(mut self, lookup: Arc<dyn CalorieLookup>) -> Self {
        self.lookup = lookup;
        self
    }

    /// Sink receiving the summary first at stop time
    #[must_use]
    pub fn notifier(mut self, sink: Arc<dyn SummarySink>) -> Self {
        self.notifier = Some(sink);
        self
    }

    /// Sink receiving the summary after the notifier
    #[must_use]
    pub fn activity_log(mut self, sink: Arc<dyn SummarySink>) -> Self {
        self.activity_log = Some(sink);
        self
    }

    /// Add an observer of completed reps
    #[must_use]
    pub fn subscriber(mut self, subscriber: Arc<dyn RepEventSubscriber>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    /// Enable every collaborator that has configuration
    #[must_use]
    pub fn with_collaborators(mut self, config: &AppConfig) -> Self {
        if let Some(nutritionix) = &config.nutritionix {
            self.lookup = Arc::new(NutritionixClient::new(nutritionix.clone()));
        }
        if let Some(twilio) = &config.twilio {
            self.notifier = Some(Arc::new(TwilioSmsNotifier::new(twilio.clone())));
        }
        if let Some(sheety) = &config.sheety {
            self.activity_log = Some(Arc::new(SheetyActivityLog::new(sheety.clone())));
        }
        self
    }

    /// Finish building; no run is active yet
    #[must_use]
    pub fn build(self) -> SessionController {
        SessionController {
            lookup: self.lookup,
            notifier: self.notifier,
            activity_log: self.activity_log,
            subscribers: self.subscribers,
            active: None,
        }
    }
}

/// Owner of the active run and its collaborators
pub struct SessionController {
    lookup: Arc<dyn CalorieLookup>,
    notifier: Option<Arc<dyn SummarySink>>,
    activity_log: Option<Arc<dyn SummarySink>>,
    subscribers: Vec<Arc<dyn RepEventSubscriber>>,
    active: Option<ActiveRun>,
}

impl SessionController {
    /// Start wiring a controller
    #[must_use]
    pub fn builder() -> SessionControllerBuilder {
        SessionControllerBuilder::default()
    }

    /// Whether a run is in progress
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Live counters of the active run
    #[must_use]
    pub fn current_session(&self) -> Option<&RepSession> {
        self.active.as_ref().map(|run| &run.session)
    }

    /// Begin a fresh run with zeroed counters
    ///
    /// A run already in progress is stopped first and its report returned;
    /// its sinks fire exactly as they would for an explicit `stop`.
    ///
    /// # Errors
    ///
    /// Returns `AppError` when the profile is out of range, the exercise
    /// configuration belongs to a different exercise, or its thresholds are
    /// invalid. The previous run, if any, is left untouched in that case.
    pub async fn start(
        &mut self,
        profile: Profile,
        exercise: ExerciseConfig,
    ) -> AppResult<Option<StopReport>> {
        profile.validate()?;
        if exercise.exercise != profile.exercise {
            return Err(AppError::invalid_input(format!(
                "Exercise configuration is for {} but the profile selects {}",
                exercise.exercise, profile.exercise
            )));
        }
        let machine = RepStateMachine::new(exercise.thresholds)?;

        let previous = self.stop().await;

        let run = ActiveRun {
            id: Uuid::new_v4(),
            query: CalorieQuery::single_rep(&profile),
            profile,
            exercise,
            machine,
            session: RepSession::new(),
            started_at: Utc::now(),
            frames_processed: 0,
            frames_skipped: 0,
        };
        info!(
            session_id = %run.id,
            exercise = %run.profile.exercise,
            joints = %run.exercise.joints,
            down_degrees = run.exercise.thresholds.down_degrees,
            up_degrees = run.exercise.thresholds.up_degrees,
            "Session started"
        );
        self.active = Some(run);

        Ok(previous)
    }

    /// Feed one frame to the active run
    ///
    /// Frames without the configured joints, or with degenerate geometry,
    /// are counted as skipped and leave the session unchanged.
    pub async fn process_frame(&mut self, frame: &LandmarkFrame) -> FrameOutcome {
        let Some(run) = self.active.as_mut() else {
            return FrameOutcome::Inactive;
        };

        let sample = match frame.triple(run.exercise.joints) {
            Some((a, b, c)) => joint_angle(a, b, c).ok_or(SkipReason::DegenerateGeometry),
            None if frame.landmarks.is_none() => Err(SkipReason::NoDetection),
            None => Err(SkipReason::MissingJoint),
        };

        let angle = match sample {
            Ok(angle) => angle,
            Err(reason) => {
                run.frames_skipped += 1;
                debug!(frame = frame.index, ?reason, "Frame skipped");
                return FrameOutcome::Skipped(reason);
            }
        };

        run.frames_processed += 1;
        let calories = CalorieContext {
            query: &run.query,
            lookup: self.lookup.as_ref(),
        };
        let rep = run
            .machine
            .advance(&mut run.session, frame.index, angle, calories)
            .await;

        if let Some(event) = &rep {
            for subscriber in &self.subscribers {
                subscriber.on_rep(event);
            }
        }

        FrameOutcome::Processed { angle, rep }
    }

    /// Freeze the active run and deliver its summary
    ///
    /// Sinks run only when at least one rep was counted: the notifier
    /// first, then the activity log. Returns `None` when no run is active,
    /// so a repeated stop never delivers twice.
    pub async fn stop(&mut self) -> Option<StopReport> {
        let run = self.active.take()?;
        let summary = run.summary(Utc::now());
        info!(
            session_id = %summary.session_id,
            reps = summary.rep_count,
            calories = summary.total_calories,
            frames_processed = summary.frames_processed,
            frames_skipped = summary.frames_skipped,
            "Session stopped"
        );

        let mut report = StopReport {
            summary,
            delivered: Vec::new(),
            warnings: Vec::new(),
        };

        if !report.summary.has_reps() {
            debug!("No reps counted, summary not delivered");
            return Some(report);
        }

        for sink in [&self.notifier, &self.activity_log].into_iter().flatten() {
            match sink.deliver(&report.summary).await {
                Ok(()) => report.delivered.push(sink.name().to_owned()),
                Err(e) => {
                    warn!(
                        sink = sink.name(),
                        retryable = e.is_retryable(),
                        error = %e,
                        "Summary delivery failed"
                    );
                    report.warnings.push(e.to_string());
                }
            }
        }

        Some(report)
    }
}
