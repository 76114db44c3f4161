// ABOUTME: Rep-counting engine: joint-angle estimation and the debounced rep state machine
// ABOUTME: Pure per-frame logic with a single async seam for the calorie lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Repsense Intelligence
//!
//! The algorithmic core of the tracker. [`algorithms::joint_angle`] turns a
//! joint triple into an angle, and [`rep_counter::RepStateMachine`] turns a
//! stream of angles into debounced repetition events with calorie credit.

/// Geometric algorithms (joint angle estimation)
pub mod algorithms;

/// Calorie lookup seam used on the first completed rep
pub mod calories;

/// Rep state machine, session state, and rep events
pub mod rep_counter;

pub use algorithms::{joint_angle, AngleSample};
pub use calories::{CalorieLookup, CalorieQuery, DisabledCalorieLookup};
pub use rep_counter::{
    CalorieContext, RepCompleted, RepSession, RepStateMachine, Stage, StageChange,
};
