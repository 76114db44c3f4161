// ABOUTME: Stop-time sink abstraction for session summaries (SMS notification, activity log)
// ABOUTME: Sink failures are reported back to the controller as warnings, never propagated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use async_trait::async_trait;
use repsense_core::errors::provider::ProviderResult;

use super::SessionSummary;

/// Receiver of the summary of a finished run
///
/// Invoked at most once per run, and only when at least one rep was counted.
#[async_trait]
pub trait SummarySink: Send + Sync {
    /// Name used in logs and warnings
    fn name(&self) -> &str;

    /// Deliver `summary`
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the collaborator rejects or cannot be
    /// reached. The controller turns it into a user-visible warning.
    async fn deliver(&self, summary: &SessionSummary) -> ProviderResult<()>;
}
