// ABOUTME: Structured error types for external collaborator calls (calorie lookup, SMS, sheet log)
// ABOUTME: Carries provider names, HTTP status, and retry classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use thiserror::Error;

/// Failure of a call to an external collaborator
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Collaborator credentials or URL are not configured
    #[error("{provider} is not configured")]
    NotConfigured {
        /// Collaborator name
        provider: String,
    },

    /// Transport-level failure (DNS, connect, timeout)
    #[error("{provider} network error: {message}")]
    NetworkError {
        /// Collaborator name
        provider: String,
        /// Transport error description
        message: String,
    },

    /// Collaborator answered with an unexpected HTTP status
    #[error("{provider} API error ({status_code}): {message}")]
    ApiError {
        /// Collaborator name
        provider: String,
        /// HTTP status code returned
        status_code: u16,
        /// Response body or summary
        message: String,
        /// Whether repeating the call could succeed
        retryable: bool,
    },

    /// Response body could not be interpreted
    #[error("{provider} returned unusable data: {details}")]
    ParseError {
        /// Collaborator name
        provider: String,
        /// What was wrong with the payload
        details: String,
    },

    /// Landmark capture device or recording failed mid-stream
    #[error("{provider} capture failed: {details}")]
    CaptureFailed {
        /// Source name
        provider: String,
        /// What went wrong
        details: String,
    },

    /// Request could not be built from the supplied values
    #[error("{provider} configuration error: {details}")]
    ConfigurationError {
        /// Collaborator name
        provider: String,
        /// Description of the bad input
        details: String,
    },
}

/// Result alias for collaborator calls
pub type ProviderResult<T> = Result<T, ProviderError>;

impl ProviderError {
    /// Whether a retry of the same call might succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::NetworkError { .. } => true,
            Self::ApiError { retryable, .. } => *retryable,
            Self::NotConfigured { .. }
            | Self::ParseError { .. }
            | Self::CaptureFailed { .. }
            | Self::ConfigurationError { .. } => false,
        }
    }

    /// Name of the collaborator that failed
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::NotConfigured { provider }
            | Self::NetworkError { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::ParseError { provider, .. }
            | Self::CaptureFailed { provider, .. }
            | Self::ConfigurationError { provider, .. } => provider,
        }
    }

    /// Build an `ApiError` from a status code, marking 5xx and 429 as retryable
    pub fn from_status(
        provider: impl Into<String>,
        status_code: u16,
        message: impl Into<String>,
    ) -> Self {
        Self::ApiError {
            provider: provider.into(),
            status_code,
            message: message.into(),
            retryable: status_code >= 500 || status_code == 429,
        }
    }

    /// Wrap a transport error from `reqwest`
    #[cfg(feature = "provider-errors")]
    pub fn network(provider: impl Into<String>, error: &reqwest::Error) -> Self {
        Self::NetworkError {
            provider: provider.into(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_retry_classification() {
        assert!(ProviderError::from_status("sheety", 503, "down").is_retryable());
        assert!(ProviderError::from_status("sheety", 429, "slow down").is_retryable());
        assert!(!ProviderError::from_status("sheety", 400, "bad row").is_retryable());
    }

    #[test]
    fn test_provider_name_is_exposed() {
        let err = ProviderError::ParseError {
            provider: "nutritionix".to_owned(),
            details: "empty exercises".to_owned(),
        };
        assert_eq!(err.provider(), "nutritionix");
        assert!(err.to_string().contains("empty exercises"));
    }
}
