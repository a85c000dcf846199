// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard snapshot types: aggregate metrics and the property listing.

use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Identifier of a property in the portfolio.
    pub struct PropertyId;
}

/// One row of `GET /api/dashboard/portfolio`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySummary {
    pub id: PropertyId,
    pub name: String,
    #[serde(default)]
    pub city: String,
    /// Health label as reported by the backend ("Healthy", "At Risk", "Critical").
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub occupancy: f64,
    #[serde(default)]
    pub revpar: f64,
    #[serde(default)]
    pub recommendations_count: u32,
}

/// Body of `GET /api/dashboard/metrics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    #[serde(default)]
    pub avg_occupancy: f64,
    #[serde(default)]
    pub occupancy_change: f64,
    #[serde(default)]
    pub projected_uplift: f64,
    #[serde(default)]
    pub active_agents: u32,
    #[serde(default)]
    pub pending_approvals: u32,
}

/// Body of `GET /api/dashboard/portfolio`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioListing {
    #[serde(default)]
    pub properties: Vec<PropertySummary>,
    #[serde(default)]
    pub total_properties: u32,
    #[serde(default)]
    pub live_connection_status: String,
}

/// Connection state of the dashboard sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    #[default]
    Idle,
    /// First load in progress; nothing to show yet.
    Loading,
    Live,
    /// A foreground refresh failed.
    ConnectionError,
}

crate::simple_display! {
    SyncStatus {
        Idle => "idle",
        Loading => "loading",
        Live => "live",
        ConnectionError => "connection_error",
    }
}
