// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-model records for the analysis tracker and the dashboard sync.

use serde::{Deserialize, Serialize};
use soa_core::{
    format_elapsed, AnalysisId, AnalysisJob, AnalysisReport, DashboardMetrics, PipelineStage,
    PortfolioListing, SyncStatus, TrackError, TrackPhase, PIPELINE_STAGES,
};

/// Tracker read model for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisTrack {
    pub id: AnalysisId,
    /// Run number; bumped on every (re)start. Responses from older runs are stale.
    pub attempt: u32,
    pub phase: TrackPhase,
    /// Last mirrored job. Its progress never decreases within a run.
    pub job: Option<AnalysisJob>,
    pub stage_index: usize,
    pub elapsed_secs: u64,
    pub poll_in_flight: bool,
    pub error: Option<TrackError>,
    pub report: Option<AnalysisReport>,
    pub report_error: Option<String>,
}

impl AnalysisTrack {
    pub fn new(id: AnalysisId, attempt: u32) -> Self {
        Self {
            id,
            attempt,
            phase: TrackPhase::Polling,
            job: None,
            stage_index: 0,
            elapsed_secs: 0,
            poll_in_flight: false,
            error: None,
            report: None,
            report_error: None,
        }
    }

    pub fn progress(&self) -> f64 {
        self.job.as_ref().map(|j| j.progress).unwrap_or(0.0)
    }

    pub fn stage(&self) -> &'static PipelineStage {
        let index = self.stage_index.min(PIPELINE_STAGES.len() - 1);
        &PIPELINE_STAGES[index]
    }

    /// Elapsed time as shown next to the pipeline (`m:ss`).
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed_secs)
    }

    /// Whether responses tagged with `attempt` still apply to this track.
    pub fn is_current(&self, attempt: u32) -> bool {
        self.attempt == attempt
    }
}

/// Dashboard sync read model. Both slices are replaced together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub status: SyncStatus,
    pub metrics: Option<DashboardMetrics>,
    pub listing: Option<PortfolioListing>,
    pub last_synced_ms: Option<u64>,
    /// Message of the last foreground failure.
    pub error: Option<String>,
    /// Highest fetch seq handed out.
    #[serde(default)]
    pub requested_seq: u64,
    /// Seq of the fetch whose result the snapshot holds.
    #[serde(default)]
    pub synced_seq: u64,
}

impl DashboardSnapshot {
    pub fn has_data(&self) -> bool {
        self.metrics.is_some() && self.listing.is_some()
    }
}
