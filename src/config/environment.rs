// ABOUTME: Environment-based configuration for external collaborators and HTTP timeouts
// ABOUTME: Missing credentials disable the matching collaborator instead of failing startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::{endpoints, http};
use crate::errors::{AppError, AppResult};
use repsense_providers::HttpClientConfig;
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

/// Credentials for the calorie lookup service
#[derive(Clone, PartialEq, Eq)]
pub struct NutritionixConfig {
    /// Application identifier (`x-app-id`)
    pub app_id: String,
    /// Application key (`x-app-key`)
    pub api_key: String,
    /// Natural-language exercise endpoint
    pub api_url: String,
}

impl fmt::Debug for NutritionixConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NutritionixConfig")
            .field("app_id", &self.app_id)
            .field("api_key", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Credentials for the SMS service
#[derive(Clone, PartialEq, Eq)]
pub struct TwilioConfig {
    /// Account SID, also the basic-auth user
    pub account_sid: String,
    /// Auth token, the basic-auth password
    pub auth_token: String,
    /// Sender phone number
    pub from_number: String,
    /// REST API base URL
    pub api_base: String,
}

impl fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"[REDACTED]")
            .field("from_number", &self.from_number)
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Spreadsheet endpoint for the activity log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetyConfig {
    /// Row-creation endpoint
    pub api_url: String,
}

/// Process configuration read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Calorie lookup; `None` credits 0 kcal per rep
    pub nutritionix: Option<NutritionixConfig>,
    /// SMS summary; `None` skips the notification
    pub twilio: Option<TwilioConfig>,
    /// Activity log; `None` skips the sheet row
    pub sheety: Option<SheetyConfig>,
    /// Timeouts for every outgoing request
    pub http: HttpClientConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a timeout variable is set but is
    /// not a positive integer number of seconds.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            nutritionix: load_nutritionix(),
            twilio: load_twilio(),
            sheety: env_var_opt("SHEETY_API_URL").map(|api_url| SheetyConfig { api_url }),
            http: HttpClientConfig {
                timeout: parse_secs("HTTP_CLIENT_TIMEOUT_SECS", http::DEFAULT_TIMEOUT_SECS)?,
                connect_timeout: parse_secs(
                    "HTTP_CLIENT_CONNECT_TIMEOUT_SECS",
                    http::DEFAULT_CONNECT_TIMEOUT_SECS,
                )?,
            },
        };

        config.log_summary();
        Ok(config)
    }

    /// Log which collaborators are enabled
    pub fn log_summary(&self) {
        info!(
            calorie_lookup = self.nutritionix.is_some(),
            sms_notification = self.twilio.is_some(),
            activity_log = self.sheety.is_some(),
            http_timeout_secs = self.http.timeout.as_secs(),
            "Collaborator configuration"
        );
        if self.nutritionix.is_none() {
            warn!("Calorie lookup disabled; reps will be credited 0 kcal");
        }
        if self.twilio.is_none() {
            info!("SMS summary disabled");
        }
        if self.sheety.is_none() {
            info!("Activity log disabled");
        }
    }
}

fn load_nutritionix() -> Option<NutritionixConfig> {
    match (
        env_var_opt("NUTRITIONIX_APP_ID"),
        env_var_opt("NUTRITIONIX_API_KEY"),
    ) {
        (Some(app_id), Some(api_key)) => Some(NutritionixConfig {
            app_id,
            api_key,
            api_url: env_var_or("NUTRITIONIX_API_URL", endpoints::NUTRITIONIX_EXERCISE_URL),
        }),
        (None, None) => None,
        _ => {
            warn!("NUTRITIONIX_APP_ID and NUTRITIONIX_API_KEY must both be set; calorie lookup disabled");
            None
        }
    }
}

fn load_twilio() -> Option<TwilioConfig> {
    let sid = env_var_opt("TWILIO_ACCOUNT_SID");
    let token = env_var_opt("TWILIO_AUTH_TOKEN");
    let from = env_var_opt("TWILIO_PHONE_NUMBER");

    match (sid, token, from) {
        (Some(account_sid), Some(auth_token), Some(from_number)) => Some(TwilioConfig {
            account_sid,
            auth_token,
            from_number,
            api_base: env_var_or("TWILIO_API_BASE", endpoints::TWILIO_API_BASE),
        }),
        (None, None, None) => None,
        _ => {
            warn!(
                "TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN and TWILIO_PHONE_NUMBER must all be set; SMS disabled"
            );
            None
        }
    }
}

/// Parse a positive number of seconds, falling back to `default` when unset
fn parse_secs(key: &str, default: u64) -> AppResult<Duration> {
    let Some(raw) = env_var_opt(key) else {
        return Ok(Duration::from_secs(default));
    };
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        Ok(_) => Err(AppError::config(format!("{key} must be greater than zero"))),
        Err(e) => Err(AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env_var_opt(key).unwrap_or_else(|| default.to_owned())
}

/// Non-empty environment variable
fn env_var_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
