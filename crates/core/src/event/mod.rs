// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event types for the SOA orchestration loop
//!
//! Events come in two flavours. Commands (`analysis:start`,
//! `action:approve`, `view:activated`, ...) ask for something to happen and
//! leave state untouched; the runtime turns them into facts. Facts
//! (`analysis:progressed`, `action:approved`, `metrics:drifted`, ...) are
//! what `MaterializedState::apply_event` reduces.

mod methods;

use crate::action::{ActionId, ActionItem};
use crate::analysis::{AnalysisId, AnalysisJob, TrackError};
use crate::portfolio::{DashboardMetrics, PortfolioListing};
use crate::report::AnalysisReport;
use crate::timer::TimerId;
use serde::{Deserialize, Serialize};

/// A mountable view that owns background timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Live metrics panel; owns the drift timer.
    Metrics,
    /// Portfolio dashboard; owns the refresh timer.
    Dashboard,
}

crate::simple_display! {
    View {
        Metrics => "metrics",
        Dashboard => "dashboard",
    }
}

/// Why an action item left the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalReason {
    Rejected,
    Archived,
}

crate::simple_display! {
    RemovalReason {
        Rejected => "rejected",
        Archived => "archived",
    }
}

/// Events that trigger state transitions in the system.
///
/// Serializes with `{"type": "event:name", ...fields}` format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    #[serde(rename = "system:shutdown")]
    Shutdown,

    #[serde(rename = "timer:start")]
    TimerStart { id: TimerId },

    // -- analysis tracker --
    /// Begin (or restart) tracking an analysis job.
    #[serde(rename = "analysis:start")]
    AnalysisStart { id: AnalysisId },

    #[serde(rename = "analysis:stop")]
    AnalysisStop { id: AnalysisId },

    /// Tracking reset for a new run of `id`.
    #[serde(rename = "analysis:tracking")]
    AnalysisTracking { id: AnalysisId, attempt: u32 },

    /// A status request left for the backend.
    #[serde(rename = "analysis:poll_sent")]
    AnalysisPollSent { id: AnalysisId, attempt: u32 },

    /// Raw status response, before it is checked against the tracker.
    #[serde(rename = "analysis:status_received")]
    AnalysisStatusReceived { id: AnalysisId, attempt: u32, job: AnalysisJob },

    /// Raw status fetch failure, before it is checked against the tracker.
    #[serde(rename = "analysis:status_failed")]
    AnalysisStatusFailed { id: AnalysisId, attempt: u32, error: String },

    #[serde(rename = "analysis:progressed")]
    AnalysisProgressed { id: AnalysisId, attempt: u32, job: AnalysisJob },

    /// Backend reported completion; the hand-off delay starts.
    #[serde(rename = "analysis:completed")]
    AnalysisCompleted { id: AnalysisId, attempt: u32 },

    #[serde(rename = "analysis:failed")]
    AnalysisFailed { id: AnalysisId, attempt: u32, error: TrackError },

    /// Display counter advanced to `secs`.
    #[serde(rename = "analysis:elapsed")]
    AnalysisElapsed { id: AnalysisId, attempt: u32, secs: u64 },

    #[serde(rename = "analysis:stopped")]
    AnalysisStopped { id: AnalysisId },

    #[serde(rename = "analysis:handed_off")]
    AnalysisHandedOff { id: AnalysisId, attempt: u32 },

    #[serde(rename = "analysis:report_loaded")]
    AnalysisReportLoaded { id: AnalysisId, attempt: u32, report: AnalysisReport },

    #[serde(rename = "analysis:report_failed")]
    AnalysisReportFailed { id: AnalysisId, attempt: u32, error: String },

    // -- action lifecycle --
    #[serde(rename = "action:approve")]
    ActionApprove { id: ActionId, uplift: f64 },

    #[serde(rename = "action:deploy")]
    ActionDeploy { id: ActionId },

    #[serde(rename = "action:reject")]
    ActionReject { id: ActionId },

    #[serde(rename = "action:archive")]
    ActionArchive { id: ActionId },

    /// New items for the board; ids already present are left alone.
    #[serde(rename = "action:proposed")]
    ActionProposed { items: Vec<ActionItem> },

    #[serde(rename = "action:approved")]
    ActionApproved { id: ActionId, uplift: f64, at_ms: u64 },

    #[serde(rename = "action:deployed")]
    ActionDeployed { id: ActionId, at_ms: u64 },

    #[serde(rename = "action:deploy_completed")]
    ActionDeployCompleted { id: ActionId, at_ms: u64 },

    #[serde(rename = "action:removed")]
    ActionRemoved { id: ActionId, reason: RemovalReason },

    // -- metrics --
    /// `seq` orders drift ticks; a tick at or below the last applied one is ignored.
    #[serde(rename = "metrics:drifted")]
    MetricsDrifted { seq: u64, revenue_delta: f64, occupancy_delta: f64 },

    // -- views --
    #[serde(rename = "view:activated")]
    ViewActivated { view: View },

    #[serde(rename = "view:deactivated")]
    ViewDeactivated { view: View },

    // -- dashboard sync --
    #[serde(rename = "dashboard:refresh")]
    DashboardRefresh { silent: bool },

    /// A dashboard fetch left for the backend. `seq` orders fetches so an
    /// older result can never replace a newer one.
    #[serde(rename = "dashboard:fetch_sent")]
    DashboardFetchSent { seq: u64, silent: bool },

    #[serde(rename = "dashboard:synced")]
    DashboardSynced {
        seq: u64,
        metrics: DashboardMetrics,
        listing: PortfolioListing,
        at_ms: u64,
    },

    #[serde(rename = "dashboard:sync_failed")]
    DashboardSyncFailed { seq: u64, silent: bool, error: String },
}
