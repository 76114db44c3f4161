// ABOUTME: Landmark frame sources and shared HTTP plumbing for external collaborators
// ABOUTME: Replay and synthetic sources behind the LandmarkSource trait, plus a pooled reqwest client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Input providers for the Repsense tracker.
//!
//! Pose estimation runs outside this workspace; what reaches the tracker is a
//! stream of per-frame landmark maps. This crate defines that stream
//! ([`sources::LandmarkSource`]) and ships a JSON-lines replay source and a
//! deterministic synthetic source.

// Re-export repsense-core modules so callers can reach shared types from here
pub use repsense_core::errors;
pub use repsense_core::models;

/// Shared HTTP client for collaborator API calls
pub mod http_client;
/// Landmark sources
pub mod sources;

pub use http_client::{build_client, initialize_shared_client, shared_client, HttpClientConfig};
pub use repsense_core::errors::provider::{ProviderError, ProviderResult};
pub use sources::{
    LandmarkSource, ReplaySource, SyntheticCurlConfig, SyntheticCurlSource, VecSource,
};
