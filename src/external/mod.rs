// ABOUTME: External API clients for calorie estimation and activity logging
// ABOUTME: Each client is optional and enabled only when its environment configuration is present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Nutritionix calorie-per-rep lookup
pub mod nutritionix_client;

/// Sheety activity-log rows
pub mod sheety_client;

pub use nutritionix_client::{parse_calories_per_rep, NutritionixClient};
pub use sheety_client::{ActivityRow, SheetyActivityLog};
