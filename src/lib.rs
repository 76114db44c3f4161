// ABOUTME: Main library entry point for the Repsense rep tracker
// ABOUTME: Wires landmark sources, the rep state machine, and external collaborators into sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Repsense
//!
//! Counts exercise repetitions from per-frame pose landmarks, credits
//! calories per rep from an external estimate, and hands a session summary to
//! notification and activity-log collaborators when the user stops.
//!
//! ## Architecture
//!
//! - **`repsense-core`**: errors, constants, data model, exercise configuration
//! - **`repsense-intelligence`**: joint angle estimation and the rep state machine
//! - **`repsense-providers`**: landmark sources and the shared HTTP client
//! - **this crate**: environment configuration, logging, collaborator
//!   adapters, and session control
//!
//! ## Example
//!
//! ```rust,no_run
//! use repsense::config::ExerciseCatalog;
//! use repsense::models::{ExerciseType, Gender, Profile};
//! use repsense::session::{run_session, SessionController, StopFlag};
//! use repsense_providers::{SyntheticCurlConfig, SyntheticCurlSource};
//!
//! # async fn example() -> repsense::errors::AppResult<()> {
//! let profile = Profile {
//!     exercise: ExerciseType::BicepCurl,
//!     weight_kg: 70.0,
//!     height_cm: 175.0,
//!     age_years: 30,
//!     gender: Gender::Male,
//!     contact: String::new(),
//! };
//! let exercise = ExerciseCatalog::standard().get(profile.exercise)?;
//!
//! let mut controller = SessionController::builder().build();
//! controller.start(profile, exercise).await?;
//!
//! let mut source = SyntheticCurlSource::new(SyntheticCurlConfig::default());
//! let report = run_session(&mut controller, &mut source, &StopFlag::new()).await?;
//! println!("{} reps", report.map_or(0, |r| r.summary.rep_count));
//! # Ok(())
//! # }
//! ```

/// Error types shared across the workspace
pub mod errors;

/// Constants shared across the workspace
pub mod constants {
    pub use repsense_core::constants::*;
}

/// Data model shared across the workspace
pub mod models {
    pub use repsense_core::models::*;
}

/// Exercise table and process environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Adapters for calorie lookup and activity logging services
pub mod external;

/// Session summary delivery (SMS)
pub mod notifications;

/// Session lifecycle, rep subscribers, and the frame loop
pub mod session;
