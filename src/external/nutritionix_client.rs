// ABOUTME: Nutritionix natural-language exercise API client used as the calorie-per-rep lookup
// ABOUTME: Sends a one-rep query built from the profile and divides the estimate by the rep count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Nutritionix Calorie Lookup
//!
//! The exercise endpoint accepts a free-text description such as
//! `"1 reps of bicep curls"` plus body metrics, and answers with a list of
//! recognized exercises carrying `nf_calories`. Only the first entry is used.

use crate::config::NutritionixConfig;
use crate::constants::service_names;
use async_trait::async_trait;
use repsense_core::errors::provider::{ProviderError, ProviderResult};
use repsense_intelligence::{CalorieLookup, CalorieQuery};
use repsense_providers::shared_client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Request body of the natural-language exercise endpoint
#[derive(Debug, Serialize)]
struct ExerciseRequest<'a> {
    query: String,
    gender: &'a str,
    weight_kg: f64,
    height_cm: f64,
    age: u32,
}

impl<'a> ExerciseRequest<'a> {
    fn from_query(query: &'a CalorieQuery) -> Self {
        Self {
            query: format!("{} reps of {}", query.reps, query.exercise.phrase()),
            gender: query.gender.as_str(),
            weight_kg: query.weight_kg,
            height_cm: query.height_cm,
            age: query.age_years,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ExerciseResponse {
    #[serde(default)]
    exercises: Vec<ExerciseEstimate>,
}

#[derive(Debug, Deserialize)]
struct ExerciseEstimate {
    nf_calories: Option<f64>,
}

/// Calorie lookup backed by the Nutritionix exercise endpoint
pub struct NutritionixClient {
    config: NutritionixConfig,
    http_client: reqwest::Client,
}

impl NutritionixClient {
    /// Create a client on the shared connection pool
    #[must_use]
    pub fn new(config: NutritionixConfig) -> Self {
        Self::with_client(config, shared_client().clone())
    }

    /// Create a client on a caller-supplied `reqwest::Client`
    #[must_use]
    pub const fn with_client(config: NutritionixConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }
}

/// Extract calories-per-rep from a response body
///
/// # Errors
///
/// Returns `ProviderError::ParseError` when the body is not valid JSON, the
/// exercise list is empty, `nf_calories` is missing, or `reps` is zero.
pub fn parse_calories_per_rep(body: &str, reps: u32) -> ProviderResult<f64> {
    let parse_error = |details: String| ProviderError::ParseError {
        provider: service_names::NUTRITIONIX.to_owned(),
        details,
    };

    if reps == 0 {
        return Err(parse_error("rep count must be positive".to_owned()));
    }

    let response: ExerciseResponse =
        serde_json::from_str(body).map_err(|e| parse_error(format!("JSON parse error: {e}")))?;

    let first = response
        .exercises
        .first()
        .ok_or_else(|| parse_error("no exercise recognized in query".to_owned()))?;
    let calories = first
        .nf_calories
        .ok_or_else(|| parse_error("nf_calories missing".to_owned()))?;

    Ok(calories / f64::from(reps))
}

#[async_trait]
impl CalorieLookup for NutritionixClient {
    fn name(&self) -> &str {
        service_names::NUTRITIONIX
    }

    async fn calories_per_rep(&self, query: &CalorieQuery) -> ProviderResult<f64> {
        let request = ExerciseRequest::from_query(query);
        debug!(query = %request.query, "Requesting calorie estimate");

        let response = self
            .http_client
            .post(&self.config.api_url)
            .header("x-app-id", &self.config.app_id)
            .header("x-app-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::network(service_names::NUTRITIONIX, &e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::network(service_names::NUTRITIONIX, &e))?;

        if status != StatusCode::OK {
            return Err(ProviderError::from_status(
                service_names::NUTRITIONIX,
                status.as_u16(),
                body,
            ));
        }

        parse_calories_per_rep(&body, query.reps)
    }
}
