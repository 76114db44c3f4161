// ABOUTME: Notification module delivering the session summary to the user
// ABOUTME: Currently a single SMS channel behind the SummarySink trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Twilio SMS delivery
pub mod sms;

pub use sms::TwilioSmsNotifier;
