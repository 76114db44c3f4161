// ABOUTME: Landmark source abstraction feeding one pose per captured frame to the tracker
// ABOUTME: Pose estimation itself happens upstream; sources only deliver its per-frame output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Landmark sources.
//!
//! A source yields [`LandmarkFrame`]s in capture order. A frame with no
//! detected pose is still yielded (as a miss) so frame indices stay
//! contiguous; `Ok(None)` means the source is exhausted.

/// JSON-lines replay of recorded landmark frames
pub mod replay;
/// Deterministic generator of bicep-curl motion
pub mod synthetic;

use async_trait::async_trait;
use repsense_core::errors::provider::ProviderResult;
use repsense_core::models::LandmarkFrame;
use std::collections::VecDeque;

pub use replay::ReplaySource;
pub use synthetic::{SyntheticCurlConfig, SyntheticCurlSource};

/// Supplier of per-frame joint positions
#[async_trait]
pub trait LandmarkSource: Send {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Next frame in capture order, or `None` once the source is exhausted
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the underlying capture fails. A frame
    /// without a detected pose is not an error.
    async fn next_frame(&mut self) -> ProviderResult<Option<LandmarkFrame>>;
}

/// Source that replays an in-memory list of frames
#[derive(Debug, Clone, Default)]
pub struct VecSource {
    frames: VecDeque<LandmarkFrame>,
}

impl VecSource {
    /// Create a source yielding `frames` in order
    #[must_use]
    pub fn new(frames: Vec<LandmarkFrame>) -> Self {
        Self {
            frames: frames.into(),
        }
    }
}

#[async_trait]
impl LandmarkSource for VecSource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn next_frame(&mut self) -> ProviderResult<Option<LandmarkFrame>> {
        Ok(self.frames.pop_front())
    }
}
