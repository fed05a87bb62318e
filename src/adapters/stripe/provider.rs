//! Stripe implementation of the PaymentProvider port.
//!
//! Talks to the Stripe REST API directly with form-encoded requests, the
//! same wire format the official SDKs use. Only the two operations this
//! service initiates are implemented; everything else (checkout, webhook
//! processing) lives in other services.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::ports::{PaymentError, PaymentProvider, PortalSession, ProviderSubscription};

/// Configuration for the Stripe provider.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_... or sk_live_...).
    api_key: Secret<String>,

    /// Base URL for the API (default: https://api.stripe.com).
    pub base_url: String,

    /// Request timeout.
    pub timeout: Duration,
}

impl StripeConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.stripe.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the base URL (used to point tests at a stub server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Stripe payment provider implementation.
pub struct StripeProvider {
    config: StripeConfig,
    client: Client,
}

impl StripeProvider {
    /// Creates a new Stripe provider with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn subscription_url(&self, subscription_id: &str) -> String {
        format!("{}/v1/subscriptions/{}", self.config.base_url, subscription_id)
    }

    fn portal_sessions_url(&self) -> String {
        format!("{}/v1/billing_portal/sessions", self.config.base_url)
    }

    async fn handle_error(&self, status: StatusCode, body: String) -> PaymentError {
        let parsed: Option<StripeErrorEnvelope> = serde_json::from_str(&body).ok();
        let (message, code) = match parsed {
            Some(envelope) => (
                envelope.error.message.unwrap_or_else(|| status.to_string()),
                envelope.error.code,
            ),
            None => (format!("Stripe returned {}", status), None),
        };

        let error = match status {
            StatusCode::UNAUTHORIZED => PaymentError::new(
                crate::ports::PaymentErrorCode::AuthenticationError,
                message,
            ),
            StatusCode::NOT_FOUND => PaymentError::new(
                crate::ports::PaymentErrorCode::NotFound,
                message,
            ),
            _ => PaymentError::api(message),
        };

        match code {
            Some(code) => error.with_provider_code(code),
            None => error,
        }
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, PaymentError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::network(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(self.handle_error(status, body).await);
        }

        serde_json::from_str(&body)
            .map_err(|e| PaymentError::invalid_response(format!("Unexpected response body: {}", e)))
    }
}

#[derive(Debug, Deserialize)]
struct StripeErrorEnvelope {
    error: StripeErrorBody,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    message: Option<String>,
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeSubscription {
    id: String,
    customer: String,
    status: String,
    cancel_at_period_end: bool,
    current_period_end: i64,
}

#[derive(Debug, Deserialize)]
struct StripePortalSession {
    id: String,
    url: String,
}

#[async_trait]
impl PaymentProvider for StripeProvider {
    async fn cancel_at_period_end(
        &self,
        subscription_id: &str,
    ) -> Result<ProviderSubscription, PaymentError> {
        let response = self
            .client
            .post(self.subscription_url(subscription_id))
            .bearer_auth(self.config.api_key())
            .form(&[("cancel_at_period_end", "true")])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PaymentError::network("Stripe request timed out")
                } else {
                    PaymentError::network(e.to_string())
                }
            })?;

        let sub: StripeSubscription = self.parse_response(response).await?;

        Ok(ProviderSubscription {
            id: sub.id,
            customer_id: sub.customer,
            status: sub.status,
            cancel_at_period_end: sub.cancel_at_period_end,
            current_period_end: sub.current_period_end,
        })
    }

    async fn create_portal_session(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> Result<PortalSession, PaymentError> {
        let response = self
            .client
            .post(self.portal_sessions_url())
            .bearer_auth(self.config.api_key())
            .form(&[("customer", customer_id), ("return_url", return_url)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PaymentError::network("Stripe request timed out")
                } else {
                    PaymentError::network(e.to_string())
                }
            })?;

        let session: StripePortalSession = self.parse_response(response).await?;

        Ok(PortalSession {
            id: session.id,
            url: session.url,
        })
    }
}

impl std::fmt::Debug for StripeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeProvider")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}
