// ABOUTME: Rep-event subscribers decoupled from the counting logic
// ABOUTME: Ships a log announcer and a terminal status line; both observe, neither mutates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use repsense_intelligence::RepCompleted;
use std::io::{self, Write};
use tracing::{info, warn};

/// Observer of completed reps
///
/// Called synchronously from the frame loop, so implementations should
/// return quickly.
pub trait RepEventSubscriber: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// A rep was completed
    fn on_rep(&self, event: &RepCompleted);
}

/// Announces each rep as a structured log event
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAnnouncer;

impl RepEventSubscriber for LogAnnouncer {
    fn name(&self) -> &str {
        "announcer"
    }

    fn on_rep(&self, event: &RepCompleted) {
        info!(
            rep = event.rep_number,
            frame = event.frame_index,
            angle = %event.angle,
            calories_total = event.total_calories,
            "Rep {}",
            event.rep_number
        );
    }
}

/// Rewrites a single `Reps / Calories` line on stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusLine;

impl StatusLine {
    /// Text shown after `event`
    #[must_use]
    pub fn render(event: &RepCompleted) -> String {
        format!(
            "Reps: {}  Calories: {:.2} kcal",
            event.rep_number, event.total_calories
        )
    }
}

impl RepEventSubscriber for StatusLine {
    fn name(&self) -> &str {
        "status_line"
    }

    fn on_rep(&self, event: &RepCompleted) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = write!(stdout, "\r{}", Self::render(event)).and_then(|()| stdout.flush()) {
            warn!(error = %e, "Status line write failed");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use repsense_intelligence::AngleSample;

    #[test]
    fn test_status_line_render() {
        let event = RepCompleted {
            rep_number: 3,
            frame_index: 90,
            angle: AngleSample::from_degrees(25.0).unwrap(),
            calories_per_rep: 0.5,
            total_calories: 1.5,
        };
        assert_eq!(StatusLine::render(&event), "Reps: 3  Calories: 1.50 kcal");
    }
}
