//! # Contact Transport
//!
//! Delivery of a validated form to the external contact endpoint. One POST
//! per submission; no retry, no idempotency key.

use async_trait::async_trait;

use super::form::ContactForm;
use crate::error::ContactError;

#[async_trait]
pub trait ContactTransport: Send + Sync {
    /// Deliver `form` once. Any failure is reported, never retried.
    async fn deliver(&self, form: &ContactForm) -> Result<(), ContactError>;
}

/// POSTs the form as JSON to a fixed endpoint
#[derive(Debug, Clone)]
pub struct HttpContactTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn deliver(&self, form: &ContactForm) -> Result<(), ContactError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(form)
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(endpoint = %self.endpoint, status = status.as_u16(), "Contact message delivered");
            Ok(())
        } else {
            tracing::warn!(endpoint = %self.endpoint, status = status.as_u16(), "Contact endpoint rejected message");
            Err(ContactError::Rejected(status.as_u16()))
        }
    }
}
