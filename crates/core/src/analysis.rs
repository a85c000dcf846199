// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Analysis job mirror and the static pipeline stage table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

crate::define_id! {
    /// Identifier assigned by the analysis service when a job is submitted.
    pub struct AnalysisId;
}

/// Message exposed when the backend reports failure without one.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Analysis failed";

/// Status reported by the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Queued,
    Processing,
    Completed,
    Failed,
}

impl AnalysisStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, AnalysisStatus::Completed | AnalysisStatus::Failed)
    }
}

crate::simple_display! {
    AnalysisStatus {
        Queued => "queued",
        Processing => "processing",
        Completed => "completed",
        Failed => "failed",
    }
}

/// Read-only mirror of `GET /api/analysis/{id}/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisJob {
    pub analysis_id: AnalysisId,
    #[serde(default)]
    pub property_id: String,
    pub status: AnalysisStatus,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl AnalysisJob {
    /// Failure message to expose for a failed job.
    pub fn failure_message(&self) -> String {
        self.error_message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_FAILURE_MESSAGE)
            .to_string()
    }
}

/// One step of the analysis pipeline as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PipelineStage {
    pub id: &'static str,
    pub name: &'static str,
    /// Progress percentage at or below which this stage is the active one.
    pub progress_threshold: f64,
    pub description: &'static str,
}

pub const PIPELINE_STAGES: [PipelineStage; 5] = [
    PipelineStage {
        id: "initialization",
        name: "Initializing Analysis",
        progress_threshold: 10.0,
        description: "Setting up the analysis and fetching property data",
    },
    PipelineStage {
        id: "rca",
        name: "Root Cause Analysis",
        progress_threshold: 40.0,
        description: "Analyzing booking trends, reviews, competitors, and weather",
    },
    PipelineStage {
        id: "strategy",
        name: "Generating Strategy",
        progress_threshold: 70.0,
        description: "Creating targeted action plans and campaigns",
    },
    PipelineStage {
        id: "impact",
        name: "Predicting Impact",
        progress_threshold: 90.0,
        description: "Forecasting occupancy improvements and ROI",
    },
    PipelineStage {
        id: "finalization",
        name: "Finalizing Report",
        progress_threshold: 100.0,
        description: "Compiling insights and recommendations",
    },
];

/// Active stage index for `progress` over [`PIPELINE_STAGES`].
pub fn stage_index(progress: f64) -> usize {
    stage_index_in(&PIPELINE_STAGES, progress)
}

/// Index of the first stage whose threshold is `>= progress`, or the last
/// index when progress exceeds every threshold. Empty tables yield 0.
pub fn stage_index_in(stages: &[PipelineStage], progress: f64) -> usize {
    stages
        .iter()
        .position(|stage| stage.progress_threshold >= progress)
        .unwrap_or_else(|| stages.len().saturating_sub(1))
}

/// Lifecycle phase of one tracked analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackPhase {
    /// Poll and elapsed timers are armed.
    Polling,
    /// Backend reported completion; the hand-off delay is running.
    Completing,
    /// Hand-off fired; no timers remain.
    Completed,
    /// Backend reported failure.
    Failed,
    /// A status fetch failed.
    NetworkError,
    /// Stopped by the caller before reaching a terminal state.
    Stopped,
}

impl TrackPhase {
    /// Whether this phase still accepts status responses.
    pub fn is_polling(self) -> bool {
        self == TrackPhase::Polling
    }
}

crate::simple_display! {
    TrackPhase {
        Polling => "polling",
        Completing => "completing",
        Completed => "completed",
        Failed => "failed",
        NetworkError => "network_error",
        Stopped => "stopped",
    }
}

/// Terminal error of a tracked analysis.
///
/// `Network` and `JobFailed` are separate channels: the first means the
/// tracker could not learn the job state, the second that the backend
/// reported the job itself as failed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum TrackError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{0}")]
    JobFailed(String),
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
