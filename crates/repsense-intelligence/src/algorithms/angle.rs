// ABOUTME: Joint angle estimation from three 2-D landmark positions using the normalized dot product
// ABOUTME: Clamps the cosine before acos and reports degenerate (zero-length) limbs as None
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use repsense_core::constants::thresholds::MIN_VECTOR_LENGTH;
use repsense_core::models::JointPosition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A joint angle in degrees, always within `0.0..=180.0`
///
/// Serialized as a bare number. Deserialization goes through
/// [`AngleSample::from_degrees`], so recorded values are clamped the same way.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AngleSample {
    degrees: f64,
}

impl AngleSample {
    /// Wrap a raw angle, clamping it into `0.0..=180.0`
    ///
    /// Returns `None` for NaN or infinite input.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        degrees.is_finite().then(|| Self {
            degrees: degrees.clamp(0.0, 180.0),
        })
    }

    /// Angle in degrees
    #[must_use]
    pub const fn degrees(self) -> f64 {
        self.degrees
    }
}

impl TryFrom<f64> for AngleSample {
    type Error = String;

    fn try_from(degrees: f64) -> Result<Self, Self::Error> {
        Self::from_degrees(degrees).ok_or_else(|| format!("angle must be finite, got {degrees}"))
    }
}

impl From<AngleSample> for f64 {
    fn from(sample: AngleSample) -> Self {
        sample.degrees
    }
}

impl fmt::Display for AngleSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.degrees)
    }
}

/// Angle at vertex `b` between the limbs `b -> a` and `b -> c`
///
/// Computed as `acos((a-b)·(c-b) / (|a-b| |c-b|))`. The cosine is clamped to
/// `[-1, 1]` first: collinear limbs can produce values a few ULPs outside
/// that interval, which would make `acos` return NaN.
///
/// Returns `None` when either limb is shorter than `MIN_VECTOR_LENGTH` (two
/// joints reported at the same spot) or any coordinate is not finite. Callers
/// skip such frames.
#[must_use]
pub fn joint_angle(a: JointPosition, b: JointPosition, c: JointPosition) -> Option<AngleSample> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return None;
    }

    let (v1x, v1y) = (a.x - b.x, a.y - b.y);
    let (v2x, v2y) = (c.x - b.x, c.y - b.y);

    let mag1 = v1x.hypot(v1y);
    let mag2 = v2x.hypot(v2y);
    if mag1 < MIN_VECTOR_LENGTH || mag2 < MIN_VECTOR_LENGTH {
        return None;
    }

    let dot = v1x.mul_add(v2x, v1y * v2y);
    let cos_angle = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);
    AngleSample::from_degrees(cos_angle.acos().to_degrees())
}
