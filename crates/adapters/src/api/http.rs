// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! reqwest-backed [`DashboardApi`].

use super::{ApiError, DashboardApi, PropertyInsight};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use soa_core::{
    AnalysisId, AnalysisJob, AnalysisReport, DashboardMetrics, PortfolioListing, PropertyId,
    StartAnalysisRequest, StartAnalysisResponse,
};
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the dashboard backend.
#[derive(Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl HttpApi {
    /// Build a client rooted at `base_url`. `timeout` bounds each whole request.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url: Arc::from(base_url.trim_end_matches('/')) })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let response = self.client.get(self.url(path)).send().await?;
        read_json(response).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "POST");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        read_json(response).await
    }
}

/// Non-2xx becomes [`ApiError::Status`] with the body text; a 2xx body
/// that is not the expected JSON becomes [`ApiError::Decode`].
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status: status.as_u16(), body });
    }
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl DashboardApi for HttpApi {
    async fn analysis_status(&self, id: &AnalysisId) -> Result<AnalysisJob, ApiError> {
        self.get_json(&format!("/api/analysis/{id}/status")).await
    }

    async fn analysis_result(&self, id: &AnalysisId) -> Result<AnalysisReport, ApiError> {
        self.get_json(&format!("/api/analysis/{id}/result")).await
    }

    async fn start_analysis(
        &self,
        request: &StartAnalysisRequest,
    ) -> Result<StartAnalysisResponse, ApiError> {
        self.post_json("/api/analysis/start", request).await
    }

    async fn dashboard_metrics(&self) -> Result<DashboardMetrics, ApiError> {
        self.get_json("/api/dashboard/metrics").await
    }

    async fn portfolio(&self) -> Result<PortfolioListing, ApiError> {
        self.get_json("/api/dashboard/portfolio").await
    }

    async fn property_insight(
        &self,
        property: &PropertyId,
        insight: PropertyInsight,
    ) -> Result<serde_json::Value, ApiError> {
        self.get_json(&format!("/api/property/{property}/{insight}")).await
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
