// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted in-memory [`DashboardApi`] for tests.
//!
//! Each endpoint has a queue of scripted responses. The last entry of a
//! queue repeats once the others are consumed, so a single scripted
//! response answers every call. An endpoint with nothing scripted answers
//! with a 404.

use super::{ApiError, DashboardApi, PropertyInsight};
use async_trait::async_trait;
use parking_lot::Mutex;
use soa_core::{
    AnalysisId, AnalysisJob, AnalysisReport, DashboardMetrics, PortfolioListing, PropertyId,
    StartAnalysisRequest, StartAnalysisResponse,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

/// Recorded API call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    AnalysisStatus(AnalysisId),
    AnalysisResult(AnalysisId),
    StartAnalysis(StartAnalysisRequest),
    DashboardMetrics,
    Portfolio,
    PropertyInsight(PropertyId, PropertyInsight),
}

type Script<T> = VecDeque<Result<T, ApiError>>;

#[derive(Default)]
struct FakeApiState {
    statuses: HashMap<AnalysisId, Script<AnalysisJob>>,
    results: HashMap<AnalysisId, Script<AnalysisReport>>,
    starts: Script<StartAnalysisResponse>,
    metrics: Script<DashboardMetrics>,
    portfolios: Script<PortfolioListing>,
    insights: HashMap<(PropertyId, PropertyInsight), serde_json::Value>,
    status_latency: Option<Duration>,
    calls: Vec<ApiCall>,
}

/// Fake API adapter for testing
#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Arc<Mutex<FakeApiState>>,
}

fn next<T: Clone>(script: &mut Script<T>, what: &str) -> Result<T, ApiError> {
    if script.len() > 1 {
        if let Some(response) = script.pop_front() {
            return response;
        }
    }
    script
        .front()
        .cloned()
        .unwrap_or_else(|| Err(ApiError::Status { status: 404, body: format!("{what} not scripted") }))
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_status(&self, id: &str, response: Result<AnalysisJob, ApiError>) -> &Self {
        self.inner.lock().statuses.entry(AnalysisId::new(id)).or_default().push_back(response);
        self
    }

    pub fn push_result(&self, id: &str, response: Result<AnalysisReport, ApiError>) -> &Self {
        self.inner.lock().results.entry(AnalysisId::new(id)).or_default().push_back(response);
        self
    }

    pub fn push_start(&self, response: Result<StartAnalysisResponse, ApiError>) -> &Self {
        self.inner.lock().starts.push_back(response);
        self
    }

    pub fn push_metrics(&self, response: Result<DashboardMetrics, ApiError>) -> &Self {
        self.inner.lock().metrics.push_back(response);
        self
    }

    pub fn push_portfolio(&self, response: Result<PortfolioListing, ApiError>) -> &Self {
        self.inner.lock().portfolios.push_back(response);
        self
    }

    pub fn set_insight(&self, property: &str, insight: PropertyInsight, value: serde_json::Value) {
        self.inner.lock().insights.insert((PropertyId::new(property), insight), value);
    }

    /// Hold every status response for `latency` before answering.
    pub fn set_status_latency(&self, latency: Duration) {
        self.inner.lock().status_latency = Some(latency);
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ApiCall> {
        self.inner.lock().calls.clone()
    }

    /// Number of status requests made for `id`
    pub fn status_calls(&self, id: &str) -> usize {
        self.count(|call| matches!(call, ApiCall::AnalysisStatus(a) if a == id))
    }

    pub fn result_calls(&self, id: &str) -> usize {
        self.count(|call| matches!(call, ApiCall::AnalysisResult(a) if a == id))
    }

    pub fn metrics_calls(&self) -> usize {
        self.count(|call| matches!(call, ApiCall::DashboardMetrics))
    }

    pub fn portfolio_calls(&self) -> usize {
        self.count(|call| matches!(call, ApiCall::Portfolio))
    }

    fn count(&self, f: impl Fn(&ApiCall) -> bool) -> usize {
        self.inner.lock().calls.iter().filter(|c| f(c)).count()
    }

    fn record(&self, call: ApiCall) {
        self.inner.lock().calls.push(call);
    }
}

#[async_trait]
impl DashboardApi for FakeApi {
    async fn analysis_status(&self, id: &AnalysisId) -> Result<AnalysisJob, ApiError> {
        self.record(ApiCall::AnalysisStatus(id.clone()));
        let (response, latency) = {
            let mut inner = self.inner.lock();
            let latency = inner.status_latency;
            (next(inner.statuses.entry(id.clone()).or_default(), "status"), latency)
        };
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        response
    }

    async fn analysis_result(&self, id: &AnalysisId) -> Result<AnalysisReport, ApiError> {
        self.record(ApiCall::AnalysisResult(id.clone()));
        next(self.inner.lock().results.entry(id.clone()).or_default(), "result")
    }

    async fn start_analysis(
        &self,
        request: &StartAnalysisRequest,
    ) -> Result<StartAnalysisResponse, ApiError> {
        self.record(ApiCall::StartAnalysis(request.clone()));
        next(&mut self.inner.lock().starts, "start")
    }

    async fn dashboard_metrics(&self) -> Result<DashboardMetrics, ApiError> {
        self.record(ApiCall::DashboardMetrics);
        next(&mut self.inner.lock().metrics, "metrics")
    }

    async fn portfolio(&self) -> Result<PortfolioListing, ApiError> {
        self.record(ApiCall::Portfolio);
        next(&mut self.inner.lock().portfolios, "portfolio")
    }

    async fn property_insight(
        &self,
        property: &PropertyId,
        insight: PropertyInsight,
    ) -> Result<serde_json::Value, ApiError> {
        self.record(ApiCall::PropertyInsight(property.clone(), insight));
        self.inner
            .lock()
            .insights
            .get(&(property.clone(), insight))
            .cloned()
            .ok_or_else(|| ApiError::Status { status: 404, body: format!("{insight} not scripted") })
    }
}
