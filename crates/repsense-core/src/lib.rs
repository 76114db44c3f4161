// ABOUTME: Core types and constants for the Repsense rep tracker
// ABOUTME: Foundation crate with error handling, pose/profile models, and exercise configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Repsense Core
//!
//! Foundation crate providing shared types and constants for the Repsense
//! rep tracker. It changes infrequently so the algorithm and provider crates
//! can compile against a stable base.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and `ProviderError` for external collaborators
//! - **constants**: Thresholds, profile limits, service names, endpoints
//! - **models**: Joint positions, landmark frames, exercises, profiles
//! - **config**: Per-exercise joint triples and rep thresholds

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (landmarks, exercises, profiles)
pub mod models;

/// Exercise configuration table (joint triples, thresholds)
pub mod config;
