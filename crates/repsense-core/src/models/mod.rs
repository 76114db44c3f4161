// ABOUTME: Core data models for pose landmarks, exercises, and user profiles
// ABOUTME: Re-exports the model types used across the Repsense crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Exercise type enumeration
pub mod exercise;
/// Joint positions and per-frame landmark maps
pub mod pose;
/// Per-session user profile
pub mod profile;

pub use exercise::ExerciseType;
pub use pose::{Joint, JointPosition, JointTriple, LandmarkFrame};
pub use profile::{Gender, Profile};
