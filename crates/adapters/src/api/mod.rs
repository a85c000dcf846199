// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backend API adapter
//!
//! Every endpoint the orchestration loops talk to goes through
//! [`DashboardApi`]. The engine never holds an HTTP client directly.

mod http;

pub use http::HttpApi;

use async_trait::async_trait;
use soa_core::{
    AnalysisId, AnalysisJob, AnalysisReport, DashboardMetrics, PortfolioListing, PropertyId,
    StartAnalysisRequest, StartAnalysisResponse,
};
use thiserror::Error;

/// Errors from API operations.
///
/// All variants are network errors from the caller's point of view; the
/// split only exists for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Per-property detail datasets served under `/api/property/{id}/...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyInsight {
    CompetitorPricing,
    Reviews,
    Amenities,
    BookingTrends,
}

soa_core::simple_display! {
    PropertyInsight {
        CompetitorPricing => "competitor-pricing",
        Reviews => "reviews",
        Amenities => "amenities",
        BookingTrends => "booking-trends",
    }
}

impl PropertyInsight {
    pub const ALL: [PropertyInsight; 4] = [
        PropertyInsight::CompetitorPricing,
        PropertyInsight::Reviews,
        PropertyInsight::Amenities,
        PropertyInsight::BookingTrends,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|insight| insight.to_string() == s)
    }
}

/// Adapter for the dashboard backend
#[async_trait]
pub trait DashboardApi: Clone + Send + Sync + 'static {
    /// `GET /api/analysis/{id}/status`
    async fn analysis_status(&self, id: &AnalysisId) -> Result<AnalysisJob, ApiError>;

    /// `GET /api/analysis/{id}/result`
    async fn analysis_result(&self, id: &AnalysisId) -> Result<AnalysisReport, ApiError>;

    /// `POST /api/analysis/start`
    async fn start_analysis(
        &self,
        request: &StartAnalysisRequest,
    ) -> Result<StartAnalysisResponse, ApiError>;

    /// `GET /api/dashboard/metrics`
    async fn dashboard_metrics(&self) -> Result<DashboardMetrics, ApiError>;

    /// `GET /api/dashboard/portfolio`
    async fn portfolio(&self) -> Result<PortfolioListing, ApiError>;

    /// `GET /api/property/{id}/{insight}`, passed through untyped.
    async fn property_insight(
        &self,
        property: &PropertyId,
        insight: PropertyInsight,
    ) -> Result<serde_json::Value, ApiError>;
}

#[cfg(any(test, feature = "test-support"))]
mod fake;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{ApiCall, FakeApi};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
