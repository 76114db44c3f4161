// ABOUTME: Common test utilities shared by the integration tests
// ABOUTME: Quiet logging setup, profiles, landmark frames, and recording collaborator doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    missing_docs
)]

use async_trait::async_trait;
use repsense::errors::{ProviderError, ProviderResult};
use repsense::models::{ExerciseType, Gender, LandmarkFrame, Profile};
use repsense::session::{SessionSummary, SummarySink};
use repsense_intelligence::{CalorieLookup, CalorieQuery};
use repsense_providers::sources::synthetic::left_arm_pose;
use repsense_providers::LandmarkSource;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Valid bicep-curl profile with a contact number
pub fn test_profile() -> Profile {
    Profile {
        exercise: ExerciseType::BicepCurl,
        weight_kg: 70.0,
        height_cm: 175.0,
        age_years: 30,
        gender: Gender::Male,
        contact: "+15550100".to_owned(),
    }
}

/// Frame whose left shoulder-elbow-wrist angle is `degrees`
pub fn frame_at(index: u64, degrees: f64) -> LandmarkFrame {
    LandmarkFrame::detected(index, left_arm_pose(degrees))
}

/// Frames for a sequence of angles, indexed from 0
pub fn frames_for(angles: &[f64]) -> Vec<LandmarkFrame> {
    angles
        .iter()
        .enumerate()
        .map(|(i, &deg)| frame_at(i as u64, deg))
        .collect()
}

/// Calorie lookup returning a fixed answer and counting calls
pub struct CountingLookup {
    answer: Result<f64, String>,
    calls: AtomicUsize,
}

impl CountingLookup {
    pub fn succeeding(calories_per_rep: f64) -> Self {
        Self {
            answer: Ok(calories_per_rep),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            answer: Err(message.to_owned()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CalorieLookup for CountingLookup {
    fn name(&self) -> &str {
        "counting"
    }

    async fn calories_per_rep(&self, _query: &CalorieQuery) -> ProviderResult<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone().map_err(|message| ProviderError::NetworkError {
            provider: "counting".to_owned(),
            message,
        })
    }
}

/// Summary sink recording deliveries, optionally failing each one
pub struct RecordingSink {
    name: String,
    fail_with_status: Option<u16>,
    delivered: Mutex<Vec<SessionSummary>>,
}

impl RecordingSink {
    pub fn accepting(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            fail_with_status: None,
            delivered: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(name: &str, status: u16) -> Self {
        Self {
            name: name.to_owned(),
            fail_with_status: Some(status),
            delivered: Mutex::new(Vec::new()),
        }
    }

    pub fn deliveries(&self) -> Vec<SessionSummary> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummarySink for RecordingSink {
    fn name(&self) -> &str {
        &self.name
    }

    async fn deliver(&self, summary: &SessionSummary) -> ProviderResult<()> {
        self.delivered.lock().unwrap().push(summary.clone());
        match self.fail_with_status {
            Some(status) => Err(ProviderError::from_status(
                self.name.clone(),
                status,
                "rejected",
            )),
            None => Ok(()),
        }
    }
}

/// Landmark source that yields its frames and then fails like a lost camera
pub struct FlakyCamera {
    frames: VecDeque<LandmarkFrame>,
    failures: usize,
}

impl FlakyCamera {
    pub fn new(frames: Vec<LandmarkFrame>) -> Self {
        Self {
            frames: frames.into(),
            failures: 0,
        }
    }

    pub const fn failures(&self) -> usize {
        self.failures
    }
}

#[async_trait]
impl LandmarkSource for FlakyCamera {
    fn name(&self) -> &str {
        "flaky-camera"
    }

    async fn next_frame(&mut self) -> ProviderResult<Option<LandmarkFrame>> {
        match self.frames.pop_front() {
            Some(frame) => Ok(Some(frame)),
            None => {
                self.failures += 1;
                Err(ProviderError::CaptureFailed {
                    provider: "flaky-camera".to_owned(),
                    details: "device disconnected".to_owned(),
                })
            }
        }
    }
}
