// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects represent side effects the system needs to perform

use crate::analysis::AnalysisId;
use crate::event::Event;
use crate::timer::TimerId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Effects that need to be executed by the runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    // === Event emission ===
    /// Apply a fact to state and feed it back into the event loop
    Emit { event: Event },

    // === Timer effects ===
    /// Set (or replace) a timer
    SetTimer {
        id: TimerId,
        #[serde(with = "duration_serde")]
        duration: Duration,
    },

    /// Cancel a timer
    CancelTimer { id: TimerId },

    // === Fetch effects ===
    // Each fetch runs in the background and posts its result as an event
    // tagged with the tracker run it was issued for.
    /// `GET /api/analysis/{id}/status`
    FetchAnalysisStatus { analysis_id: AnalysisId, attempt: u32 },

    /// `GET /api/analysis/{id}/result`
    FetchAnalysisResult { analysis_id: AnalysisId, attempt: u32 },

    /// Dashboard metrics and portfolio listing, fetched together
    FetchDashboard { seq: u64, silent: bool },
}

impl Effect {
    /// Effect name for log spans (e.g., "set_timer", "fetch_dashboard")
    pub fn name(&self) -> &'static str {
        match self {
            Effect::Emit { .. } => "emit",
            Effect::SetTimer { .. } => "set_timer",
            Effect::CancelTimer { .. } => "cancel_timer",
            Effect::FetchAnalysisStatus { .. } => "fetch_analysis_status",
            Effect::FetchAnalysisResult { .. } => "fetch_analysis_result",
            Effect::FetchDashboard { .. } => "fetch_dashboard",
        }
    }

    /// Key-value pairs for structured logging
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Effect::Emit { event } => vec![("event", event.log_summary())],
            Effect::SetTimer { id, duration } => vec![
                ("timer_id", id.to_string()),
                ("duration_ms", duration.as_millis().to_string()),
            ],
            Effect::CancelTimer { id } => vec![("timer_id", id.to_string())],
            Effect::FetchAnalysisStatus { analysis_id, attempt }
            | Effect::FetchAnalysisResult { analysis_id, attempt } => vec![
                ("analysis_id", analysis_id.to_string()),
                ("attempt", attempt.to_string()),
            ],
            Effect::FetchDashboard { seq, silent } => {
                vec![("seq", seq.to_string()), ("silent", silent.to_string())]
            }
        }
    }

    /// Whether to show both 'started' and 'completed' or just 'executed',
    /// to control the verbosity for frequent events.
    pub fn verbose(&self) -> bool {
        match self {
            Effect::Emit { .. } => false,
            Effect::SetTimer { .. } => false,
            Effect::CancelTimer { .. } => false,
            // Once per second per tracked analysis
            Effect::FetchAnalysisStatus { .. } => false,
            _ => true,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, s: S) -> Result<S::Ok, S::Error> {
        duration.as_millis().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let millis = u64::deserialize(d)?;
        Ok(Duration::from_millis(millis))
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
