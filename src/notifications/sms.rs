// ABOUTME: Twilio SMS notifier that texts the session summary to the user's contact number
// ABOUTME: Posts a form-encoded message with basic auth; any non-2xx answer is a sink failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::TwilioConfig;
use crate::constants::service_names;
use crate::session::{SessionSummary, SummarySink};
use async_trait::async_trait;
use repsense_core::errors::provider::{ProviderError, ProviderResult};
use repsense_providers::shared_client;
use tracing::info;

/// Notification sink sending the summary as an SMS
pub struct TwilioSmsNotifier {
    config: TwilioConfig,
    http_client: reqwest::Client,
}

impl TwilioSmsNotifier {
    /// Create a notifier on the shared connection pool
    #[must_use]
    pub fn new(config: TwilioConfig) -> Self {
        Self::with_client(config, shared_client().clone())
    }

    /// Create a notifier on a caller-supplied `reqwest::Client`
    #[must_use]
    pub const fn with_client(config: TwilioConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Message resource URL for the configured account
    #[must_use]
    pub fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.api_base.trim_end_matches('/'),
            self.config.account_sid
        )
    }
}

#[async_trait]
impl SummarySink for TwilioSmsNotifier {
    fn name(&self) -> &str {
        service_names::TWILIO
    }

    async fn deliver(&self, summary: &SessionSummary) -> ProviderResult<()> {
        if !summary.profile.has_contact() {
            return Err(ProviderError::ConfigurationError {
                provider: service_names::TWILIO.to_owned(),
                details: "no contact number supplied, summary not sent".to_owned(),
            });
        }

        let body = summary.message();
        let response = self
            .http_client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[
                ("Body", body.as_str()),
                ("From", self.config.from_number.as_str()),
                ("To", summary.profile.contact.trim()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::network(service_names::TWILIO, &e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(
                service_names::TWILIO,
                status.as_u16(),
                text,
            ));
        }

        info!(session_id = %summary.session_id, "Summary SMS sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_url() {
        let notifier = TwilioSmsNotifier::with_client(
            TwilioConfig {
                account_sid: "AC123".to_owned(),
                auth_token: "secret".to_owned(),
                from_number: "+15550000".to_owned(),
                api_base: "https://api.twilio.com/".to_owned(),
            },
            reqwest::Client::new(),
        );
        assert_eq!(
            notifier.messages_url(),
            "https://api.twilio.com/2010-04-01/Accounts/AC123/Messages.json"
        );
    }
}
