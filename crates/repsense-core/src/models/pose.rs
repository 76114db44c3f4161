// ABOUTME: Pose landmark models: named joints, normalized 2-D joint positions, per-frame landmark maps
// ABOUTME: Produced by an external pose estimator and consumed once per frame by the rep tracker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A 2-D point in normalized image coordinates (`0.0..=1.0` on both axes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointPosition {
    /// Horizontal coordinate, left to right
    pub x: f64,
    /// Vertical coordinate, top to bottom
    pub y: f64,
}

impl JointPosition {
    /// Create a new joint position
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite numbers
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Named anatomical landmarks the tracker knows how to consume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    /// Left shoulder
    LeftShoulder,
    /// Left elbow
    LeftElbow,
    /// Left wrist
    LeftWrist,
    /// Left hip
    LeftHip,
    /// Right shoulder
    RightShoulder,
    /// Right elbow
    RightElbow,
    /// Right wrist
    RightWrist,
    /// Right hip
    RightHip,
}

impl Joint {
    /// Stable snake_case identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeftShoulder => "left_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::LeftWrist => "left_wrist",
            Self::LeftHip => "left_hip",
            Self::RightShoulder => "right_shoulder",
            Self::RightElbow => "right_elbow",
            Self::RightWrist => "right_wrist",
            Self::RightHip => "right_hip",
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three joints whose middle element is the vertex of the measured angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointTriple {
    /// First outer joint
    pub a: Joint,
    /// Vertex joint
    pub vertex: Joint,
    /// Second outer joint
    pub c: Joint,
}

impl JointTriple {
    /// Create a joint triple
    #[must_use]
    pub const fn new(a: Joint, vertex: Joint, c: Joint) -> Self {
        Self { a, vertex, c }
    }
}

impl fmt::Display for JointTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.a, self.vertex, self.c)
    }
}

/// Landmarks detected in a single captured frame
///
/// `landmarks` is `None` when the pose estimator found nobody in the frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkFrame {
    /// Monotonic frame counter assigned by the capture source
    pub index: u64,
    /// Detected joints, or `None` for a detection miss
    #[serde(default)]
    pub landmarks: Option<HashMap<Joint, JointPosition>>,
}

impl LandmarkFrame {
    /// Frame with detected landmarks
    #[must_use]
    pub fn detected(index: u64, landmarks: HashMap<Joint, JointPosition>) -> Self {
        Self {
            index,
            landmarks: Some(landmarks),
        }
    }

    /// Frame in which no pose was detected
    #[must_use]
    pub const fn miss(index: u64) -> Self {
        Self {
            index,
            landmarks: None,
        }
    }

    /// Positions of the three joints of `triple`, or `None` if any is missing
    #[must_use]
    pub fn triple(&self, triple: JointTriple) -> Option<(JointPosition, JointPosition, JointPosition)> {
        let landmarks = self.landmarks.as_ref()?;
        Some((
            *landmarks.get(&triple.a)?,
            *landmarks.get(&triple.vertex)?,
            *landmarks.get(&triple.c)?,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ELBOW: JointTriple = JointTriple::new(Joint::LeftShoulder, Joint::LeftElbow, Joint::LeftWrist);

    #[test]
    fn test_triple_lookup_requires_all_joints() {
        let mut landmarks = HashMap::new();
        landmarks.insert(Joint::LeftShoulder, JointPosition::new(0.5, 0.2));
        landmarks.insert(Joint::LeftElbow, JointPosition::new(0.5, 0.4));
        let frame = LandmarkFrame::detected(3, landmarks.clone());
        assert!(frame.triple(ELBOW).is_none());

        landmarks.insert(Joint::LeftWrist, JointPosition::new(0.5, 0.6));
        let frame = LandmarkFrame::detected(4, landmarks);
        assert!(frame.triple(ELBOW).is_some());
    }

    #[test]
    fn test_miss_frame_deserializes_without_landmarks() {
        let frame: LandmarkFrame = serde_json::from_str(r#"{"index": 9}"#).unwrap();
        assert_eq!(frame, LandmarkFrame::miss(9));
    }

    #[test]
    fn test_frame_json_uses_snake_case_joints() {
        let json = r#"{"index": 1, "landmarks": {"left_elbow": {"x": 0.1, "y": 0.2}}}"#;
        let frame: LandmarkFrame = serde_json::from_str(json).unwrap();
        let joints = frame.landmarks.unwrap();
        assert_eq!(joints.get(&Joint::LeftElbow), Some(&JointPosition::new(0.1, 0.2)));
    }
}
