//! Native HTTP Client
//!
//! reqwest implementation of [`ActivityApi`] used by the CLI.

use async_trait::async_trait;
use reqwest::{Client, Method};
use std::time::Duration;

use super::dto::{decode_action, decode_catalog, ActionReply};
use super::error::{ApiError, ApiResult};
use super::{endpoint, signup_path, unregister_path, ActivityApi, CATALOG_PATH};
use crate::catalog::Catalog;

/// Client for the activities backend
#[derive(Debug, Clone)]
pub struct BoardClient {
    client: Client,
    base_url: String,
}

impl BoardClient {
    /// Create a client for `base_url` with an optional request timeout
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and return the status with the raw body
    async fn send(&self, method: Method, path: &str) -> ApiResult<(u16, String)> {
        let url = endpoint(&self.base_url, path);
        tracing::debug!(%method, %url, "Sending request");

        let response = self
            .client
            .request(method, &url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        tracing::debug!(status, bytes = body.len(), "Received response");
        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl ActivityApi for BoardClient {
    async fn fetch_catalog(&self) -> ApiResult<Catalog> {
        let (status, body) = self.send(Method::GET, CATALOG_PATH).await?;
        decode_catalog(status, &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<ActionReply> {
        let (status, body) = self
            .send(Method::POST, &signup_path(activity, email))
            .await?;
        decode_action(status, &body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<ActionReply> {
        let (status, body) = self
            .send(Method::DELETE, &unregister_path(activity, email))
            .await?;
        decode_action(status, &body)
    }
}
