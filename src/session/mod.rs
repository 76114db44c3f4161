// ABOUTME: Session control: one active run, rep-event subscribers, stop-time sinks, and the frame loop
// ABOUTME: The run loop is the only writer of session state; side effects hang off events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Start / process / stop lifecycle of a run
pub mod controller;
/// Cooperative frame loop
pub mod runner;
/// Stop-time summary sinks
pub mod sinks;
/// Rep-event observers
pub mod subscribers;
/// Final values of a run
pub mod summary;

pub use controller::{
    FrameOutcome, SessionController, SessionControllerBuilder, SkipReason, StopReport,
};
pub use runner::{run_session, StopFlag};
pub use sinks::SummarySink;
pub use subscribers::{LogAnnouncer, RepEventSubscriber, StatusLine};
pub use summary::SessionSummary;
