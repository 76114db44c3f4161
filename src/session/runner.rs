// ABOUTME: Frame-driven run loop with a cooperative stop flag checked between frames
// ABOUTME: Pulls frames from a landmark source until exhaustion or stop, then stops the session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use repsense_core::errors::{AppError, AppResult};
use repsense_providers::LandmarkSource;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use super::{SessionController, StopReport};

/// Shared request to end the current run at the next frame boundary
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    /// Create a flag that is not yet raised
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to stop
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether a stop was requested
    #[must_use]
    pub fn is_stop_requested(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Drive the active run from `source` until it ends, then stop it
///
/// The stop flag is checked once per iteration, before pulling the next
/// frame. A capture failure ends the loop like exhaustion does and is
/// reported as a warning on the stop report.
///
/// # Errors
///
/// Returns `AppError` when no run is active on `controller`.
pub async fn run_session<S>(
    controller: &mut SessionController,
    source: &mut S,
    stop: &StopFlag,
) -> AppResult<Option<StopReport>>
where
    S: LandmarkSource + ?Sized,
{
    if !controller.is_active() {
        return Err(AppError::invalid_input(
            "start a session before running the frame loop",
        ));
    }

    info!(source = source.name(), "Frame loop started");
    let mut frames: u64 = 0;
    let mut capture_warning = None;

    loop {
        if stop.is_stop_requested() {
            info!(frames, "Stop requested");
            break;
        }

        match source.next_frame().await {
            Ok(Some(frame)) => {
                frames += 1;
                controller.process_frame(&frame).await;
            }
            Ok(None) => {
                info!(frames, "Landmark source exhausted");
                break;
            }
            Err(e) => {
                warn!(
                    source = e.provider(),
                    retryable = e.is_retryable(),
                    error = %e,
                    "Landmark capture failed, ending run"
                );
                capture_warning = Some(e.to_string());
                break;
            }
        }
    }

    let mut report = controller.stop().await;
    if let (Some(report), Some(warning)) = (report.as_mut(), capture_warning) {
        report.warnings.insert(0, warning);
    }
    Ok(report)
}
