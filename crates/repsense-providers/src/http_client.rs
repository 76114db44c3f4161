// ABOUTME: Shared HTTP client with connection pooling for external collaborator calls
// ABOUTME: Timeouts are configured once at startup; later callers reuse the same pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use reqwest::{Client, ClientBuilder};
use repsense_core::constants::http::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::warn;

/// Timeouts applied to every outgoing request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

static CLIENT_CONFIG: OnceLock<HttpClientConfig> = OnceLock::new();

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Record the timeouts the shared client should use
///
/// Only the first call has an effect, and only if it happens before the
/// first `shared_client()` call. Returns `false` when the configuration was
/// already fixed.
pub fn initialize_shared_client(config: HttpClientConfig) -> bool {
    CLIENT_CONFIG.set(config).is_ok()
}

/// Build a standalone client with the given timeouts
///
/// Falls back to a default client if the TLS backend cannot be initialized
/// with the requested settings.
#[must_use]
pub fn build_client(config: HttpClientConfig) -> Client {
    ClientBuilder::new()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to default HTTP client");
            Client::new()
        })
}

/// The process-wide pooled client
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| build_client(CLIENT_CONFIG.get().copied().unwrap_or_default()))
}
