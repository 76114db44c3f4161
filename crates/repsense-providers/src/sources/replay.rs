// ABOUTME: Replays recorded landmark frames from a JSON-lines file
// ABOUTME: Malformed lines become detection misses so a bad record never stops a run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use async_trait::async_trait;
use repsense_core::errors::provider::{ProviderError, ProviderResult};
use repsense_core::models::LandmarkFrame;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tracing::warn;

use super::LandmarkSource;

const SOURCE_NAME: &str = "replay";

/// Reads one `LandmarkFrame` JSON object per line
///
/// Blank lines are skipped. A line that fails to parse is logged and yielded
/// as a miss carrying the next expected frame index.
pub struct ReplaySource {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    next_index: u64,
    pacing: Option<Duration>,
}

impl ReplaySource {
    /// Open a replay file
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` if the file cannot be opened.
    pub async fn open(path: impl AsRef<Path>) -> ProviderResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)
            .await
            .map_err(|e| ProviderError::ConfigurationError {
                provider: SOURCE_NAME.to_owned(),
                details: format!("cannot open {}: {e}", path.display()),
            })?;

        Ok(Self {
            path,
            lines: BufReader::new(file).lines(),
            next_index: 0,
            pacing: None,
        })
    }

    /// Sleep `interval` before yielding each frame, mimicking a live camera
    #[must_use]
    pub fn with_pacing(mut self, interval: Duration) -> Self {
        self.pacing = Some(interval);
        self
    }

    fn parse_line(&self, line: &str) -> LandmarkFrame {
        match serde_json::from_str::<LandmarkFrame>(line) {
            Ok(frame) => frame,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    frame = self.next_index,
                    error = %e,
                    "Malformed landmark record, treating as detection miss"
                );
                LandmarkFrame::miss(self.next_index)
            }
        }
    }
}

#[async_trait]
impl LandmarkSource for ReplaySource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn next_frame(&mut self) -> ProviderResult<Option<LandmarkFrame>> {
        loop {
            let line = self
                .lines
                .next_line()
                .await
                .map_err(|e| ProviderError::CaptureFailed {
                    provider: SOURCE_NAME.to_owned(),
                    details: format!("read failed on {}: {e}", self.path.display()),
                })?;

            let Some(line) = line else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                continue;
            }

            if let Some(interval) = self.pacing {
                tokio::time::sleep(interval).await;
            }

            let frame = self.parse_line(&line);
            self.next_index = frame.index.saturating_add(1);
            return Ok(Some(frame));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_replays_frames_and_tolerates_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"index": 0, "landmarks": {{"left_elbow": {{"x": 0.5, "y": 0.5}}}}}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, "not json").unwrap();
        writeln!(file, r#"{{"index": 2}}"#).unwrap();

        let mut source = ReplaySource::open(file.path()).await.unwrap();

        let first = source.next_frame().await.unwrap().unwrap();
        assert_eq!(first.index, 0);
        assert!(first.landmarks.is_some());

        let garbage = source.next_frame().await.unwrap().unwrap();
        assert_eq!(garbage, LandmarkFrame::miss(1));

        let miss = source.next_frame().await.unwrap().unwrap();
        assert_eq!(miss, LandmarkFrame::miss(2));

        assert!(source.next_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_configuration_error() {
        let result = ReplaySource::open("/nonexistent/frames.jsonl").await;
        assert!(matches!(
            result,
            Err(ProviderError::ConfigurationError { .. })
        ));
    }
}
