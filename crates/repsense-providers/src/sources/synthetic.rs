// ABOUTME: Deterministic synthetic landmark source producing bicep-curl motion
// ABOUTME: Seeded jitter and optional dropped frames for demos and offline testing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Synthetic Curl Source
//!
//! Generates `reps` full curl cycles for the left arm. Each cycle starts
//! extended (elbow angle near `extended_degrees`) and reaches the contracted
//! angle half way through, following a cosine profile. The upper arm points
//! straight up from the elbow in image space; the forearm is rotated by the
//! target elbow angle, so the three-joint angle of a generated frame equals
//! the target angle plus jitter.

use async_trait::async_trait;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use repsense_core::errors::provider::ProviderResult;
use repsense_core::models::{Joint, JointPosition, LandmarkFrame};
use std::collections::HashMap;
use std::f64::consts::TAU;

use super::LandmarkSource;

const ELBOW: JointPosition = JointPosition::new(0.5, 0.5);
const SEGMENT_LENGTH: f64 = 0.2;

/// Parameters of the generated motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticCurlConfig {
    /// Number of full cycles
    pub reps: u32,
    /// Frames per cycle (at least 8 so both extremes are sampled)
    pub frames_per_rep: u32,
    /// Elbow angle at full extension
    pub extended_degrees: f64,
    /// Elbow angle at full contraction
    pub contracted_degrees: f64,
    /// Uniform jitter amplitude added to every angle
    pub jitter_degrees: f64,
    /// Emit a detection miss every N-th frame (0 disables)
    pub drop_every: u32,
    /// RNG seed for the jitter
    pub seed: u64,
}

impl Default for SyntheticCurlConfig {
    fn default() -> Self {
        Self {
            reps: 10,
            frames_per_rep: 30,
            extended_degrees: 170.0,
            contracted_degrees: 20.0,
            jitter_degrees: 2.0,
            drop_every: 0,
            seed: 42,
        }
    }
}

/// Landmark source emitting synthetic curl frames
pub struct SyntheticCurlSource {
    config: SyntheticCurlConfig,
    rng: ChaCha8Rng,
    next_index: u64,
}

impl SyntheticCurlSource {
    /// Create a source; `frames_per_rep` is raised to 8 if lower
    #[must_use]
    pub fn new(mut config: SyntheticCurlConfig) -> Self {
        config.frames_per_rep = config.frames_per_rep.max(8);
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            next_index: 0,
        }
    }

    /// Total number of frames this source yields
    #[must_use]
    pub fn total_frames(&self) -> u64 {
        u64::from(self.config.reps) * u64::from(self.config.frames_per_rep)
    }

    /// Target elbow angle for a frame, before jitter
    fn target_angle(&self, index: u64) -> f64 {
        let phase = (index % u64::from(self.config.frames_per_rep)) as f64
            / f64::from(self.config.frames_per_rep);
        let mid = (self.config.extended_degrees + self.config.contracted_degrees) / 2.0;
        let amplitude = (self.config.extended_degrees - self.config.contracted_degrees) / 2.0;
        amplitude.mul_add((TAU * phase).cos(), mid)
    }

    fn is_dropped(&self, index: u64) -> bool {
        let every = u64::from(self.config.drop_every);
        every > 0 && index % every == every - 1
    }
}

/// Left-arm landmarks whose shoulder-elbow-wrist angle is `degrees`
#[must_use]
pub fn left_arm_pose(degrees: f64) -> HashMap<Joint, JointPosition> {
    let radians = degrees.to_radians();
    let shoulder = JointPosition::new(ELBOW.x, ELBOW.y - SEGMENT_LENGTH);
    let wrist = JointPosition::new(
        SEGMENT_LENGTH.mul_add(radians.sin(), ELBOW.x),
        SEGMENT_LENGTH.mul_add(-radians.cos(), ELBOW.y),
    );

    HashMap::from([
        (Joint::LeftShoulder, shoulder),
        (Joint::LeftElbow, ELBOW),
        (Joint::LeftWrist, wrist),
    ])
}

#[async_trait]
impl LandmarkSource for SyntheticCurlSource {
    fn name(&self) -> &str {
        "synthetic"
    }

    async fn next_frame(&mut self) -> ProviderResult<Option<LandmarkFrame>> {
        let index = self.next_index;
        if index >= self.total_frames() {
            return Ok(None);
        }
        self.next_index += 1;

        if self.is_dropped(index) {
            return Ok(Some(LandmarkFrame::miss(index)));
        }

        let jitter = if self.config.jitter_degrees > 0.0 {
            self.rng
                .gen_range(-self.config.jitter_degrees..=self.config.jitter_degrees)
        } else {
            0.0
        };
        let degrees = (self.target_angle(index) + jitter).clamp(0.0, 180.0);
        Ok(Some(LandmarkFrame::detected(index, left_arm_pose(degrees))))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_starts_extended_and_bottoms_out_half_way() {
        let source = SyntheticCurlSource::new(SyntheticCurlConfig::default());
        assert!((source.target_angle(0) - 170.0).abs() < 1e-9);
        assert!((source.target_angle(15) - 20.0).abs() < 1e-9);
        assert!((source.target_angle(30) - 170.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_yields_exact_frame_count_with_drops() {
        let mut source = SyntheticCurlSource::new(SyntheticCurlConfig {
            reps: 2,
            drop_every: 5,
            ..SyntheticCurlConfig::default()
        });

        let mut frames = Vec::new();
        while let Some(frame) = source.next_frame().await.unwrap() {
            frames.push(frame);
        }

        assert_eq!(frames.len(), 60);
        let misses = frames.iter().filter(|f| f.landmarks.is_none()).count();
        assert_eq!(misses, 12);
        assert!(frames.iter().enumerate().all(|(i, f)| f.index == i as u64));
    }

    #[test]
    fn test_same_seed_same_motion() {
        let config = SyntheticCurlConfig::default();
        let mut a = SyntheticCurlSource::new(config);
        let mut b = SyntheticCurlSource::new(config);
        let ja: f64 = a.rng.gen_range(-1.0..=1.0);
        let jb: f64 = b.rng.gen_range(-1.0..=1.0);
        assert!((ja - jb).abs() < f64::EPSILON);
    }
}
