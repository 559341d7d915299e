//! HTTP client for the email analysis service

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

use super::error::ServiceError;
use super::types::{AnalysisResult, AnalyzeRequest, ErrorBody, HealthStatus};
use crate::constants::{ANALYZE_PATH, HEALTH_PATH};

/// Anything that can turn email text into an analysis.
///
/// The actor is generic over this so it can be driven without a network.
pub trait EmailAnalyzer: Send + Sync + 'static {
    fn analyze(
        &self,
        email_text: &str,
    ) -> impl Future<Output = Result<AnalysisResult, ServiceError>> + Send;
}

#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
    base_url: String,
}

impl AnalysisClient {
    /// Create a client for the service at `base_url`.
    /// Without a timeout the transport default applies.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send one analysis request. No retries.
    pub async fn analyze_email(&self, email_text: &str) -> Result<AnalysisResult, ServiceError> {
        let url = self.endpoint(ANALYZE_PATH);
        tracing::debug!("POST {} ({} chars)", url, email_text.chars().count());

        let response = self
            .client
            .post(&url)
            .json(&AnalyzeRequest { email_text })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.is_empty());
            return Err(ServiceError::Rejected { status, message });
        }

        serde_json::from_slice(&body).map_err(|e| ServiceError::Malformed(e.to_string()))
    }

    /// Query the service health endpoint
    pub async fn health(&self) -> Result<HealthStatus, ServiceError> {
        let response = self.client.get(self.endpoint(HEALTH_PATH)).send().await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ServiceError::Rejected {
                status,
                message: String::from_utf8(body.to_vec())
                    .ok()
                    .filter(|m| !m.trim().is_empty()),
            });
        }

        serde_json::from_slice(&body).map_err(|e| ServiceError::Malformed(e.to_string()))
    }
}

impl EmailAnalyzer for AnalysisClient {
    async fn analyze(&self, email_text: &str) -> Result<AnalysisResult, ServiceError> {
        self.analyze_email(email_text).await
    }
}
