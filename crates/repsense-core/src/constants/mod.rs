// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for thresholds, profile limits, service names, and endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list.

/// Joint-angle thresholds used by the rep state machine
pub mod thresholds {
    /// Angle above which the limb counts as extended (re-arms the counter)
    pub const DEFAULT_DOWN_DEGREES: f64 = 160.0;
    /// Angle below which the limb counts as contracted (completes a rep)
    pub const DEFAULT_UP_DEGREES: f64 = 30.0;
    /// Largest angle the estimator can return
    pub const MAX_DEGREES: f64 = 180.0;
    /// Vectors shorter than this are treated as degenerate
    pub const MIN_VECTOR_LENGTH: f64 = 1e-9;
}

/// Accepted ranges for profile body metrics
pub mod profile_limits {
    /// Upper bound on body weight
    pub const MAX_WEIGHT_KG: f64 = 400.0;
    /// Upper bound on height
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Minimum age
    pub const MIN_AGE_YEARS: u32 = 1;
    /// Maximum age
    pub const MAX_AGE_YEARS: u32 = 120;
}

/// Names of external collaborators, used in logs and errors
pub mod service_names {
    /// Service name for structured logging
    pub const REPSENSE: &str = "repsense";
    /// Calorie lookup service
    pub const NUTRITIONIX: &str = "nutritionix";
    /// SMS notification service
    pub const TWILIO: &str = "twilio";
    /// Spreadsheet logging service
    pub const SHEETY: &str = "sheety";
}

/// Default endpoints for external collaborators
pub mod endpoints {
    /// Natural-language exercise endpoint
    pub const NUTRITIONIX_EXERCISE_URL: &str =
        "https://trackapi.nutritionix.com/v2/natural/exercise";
    /// Twilio REST API base
    pub const TWILIO_API_BASE: &str = "https://api.twilio.com";
}

/// HTTP client defaults
pub mod http {
    /// Request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Status the spreadsheet service answers with when a row is created
    pub const SHEET_ROW_CREATED: u16 = 201;
}
