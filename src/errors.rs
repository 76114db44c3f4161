// ABOUTME: Re-exports the unified error types from repsense-core
// ABOUTME: Keeps `repsense::errors::*` paths stable for binaries and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

pub use repsense_core::errors::provider::{ProviderError, ProviderResult};
pub use repsense_core::errors::{AppError, AppResult, ErrorCode};
