// ABOUTME: Sheety spreadsheet client that appends one activity-log row per finished session
// ABOUTME: Anything but 201 Created is a sink failure surfaced to the user as a warning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::SheetyConfig;
use crate::constants::{http, service_names};
use crate::session::{SessionSummary, SummarySink};
use async_trait::async_trait;
use repsense_core::errors::provider::{ProviderError, ProviderResult};
use repsense_providers::shared_client;
use serde::Serialize;
use tracing::info;

/// One spreadsheet row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRow {
    /// Exercise phrase
    pub exercise: String,
    /// Body weight in kilograms
    pub weight: f64,
    /// Completed repetitions
    pub reps: u32,
    /// Height in centimeters
    pub height: f64,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: String,
    /// Total calories credited
    pub calories: f64,
}

impl From<&SessionSummary> for ActivityRow {
    fn from(summary: &SessionSummary) -> Self {
        Self {
            exercise: summary.exercise().phrase().to_owned(),
            weight: summary.profile.weight_kg,
            reps: summary.rep_count,
            height: summary.profile.height_cm,
            age: summary.profile.age_years,
            gender: summary.profile.gender.as_str().to_owned(),
            calories: summary.total_calories,
        }
    }
}

#[derive(Debug, Serialize)]
struct RowRequest<'a> {
    sheet1: &'a ActivityRow,
}

/// Activity-log sink posting rows to a Sheety endpoint
pub struct SheetyActivityLog {
    config: SheetyConfig,
    http_client: reqwest::Client,
}

impl SheetyActivityLog {
    /// Create a sink on the shared connection pool
    #[must_use]
    pub fn new(config: SheetyConfig) -> Self {
        Self::with_client(config, shared_client().clone())
    }

    /// Create a sink on a caller-supplied `reqwest::Client`
    #[must_use]
    pub const fn with_client(config: SheetyConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }
}

#[async_trait]
impl SummarySink for SheetyActivityLog {
    fn name(&self) -> &str {
        service_names::SHEETY
    }

    async fn deliver(&self, summary: &SessionSummary) -> ProviderResult<()> {
        let row = ActivityRow::from(summary);
        let response = self
            .http_client
            .post(&self.config.api_url)
            .json(&RowRequest { sheet1: &row })
            .send()
            .await
            .map_err(|e| ProviderError::network(service_names::SHEETY, &e))?;

        let status = response.status().as_u16();
        if status != http::SHEET_ROW_CREATED {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(
                service_names::SHEETY,
                status,
                body,
            ));
        }

        info!(session_id = %summary.session_id, reps = row.reps, "Activity row logged");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_row_request_shape() {
        let row = ActivityRow {
            exercise: "bicep curls".to_owned(),
            weight: 70.0,
            reps: 10,
            height: 175.0,
            age: 30,
            gender: "male".to_owned(),
            calories: 2.5,
        };
        let json = serde_json::to_value(RowRequest { sheet1: &row }).unwrap();

        assert_eq!(json["sheet1"]["exercise"], "bicep curls");
        assert_eq!(json["sheet1"]["reps"], 10);
        assert_eq!(json["sheet1"]["gender"], "male");
        assert_eq!(json.as_object().unwrap().len(), 1);
    }
}
