// ABOUTME: Geometric algorithms used by the rep tracker
// ABOUTME: Currently the three-joint angle estimator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Joint angle from three landmark positions
pub mod angle;

pub use angle::{joint_angle, AngleSample};
