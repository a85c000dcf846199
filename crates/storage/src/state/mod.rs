// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Materialized state derived from events

mod actions;
mod analyses;
mod dashboard;
mod metrics;
mod types;

pub use types::{AnalysisTrack, DashboardSnapshot};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use soa_core::{
    ActionBoard, ActionFilter, ActionId, ActionItem, AnalysisId, Event, PortfolioMetrics, View,
};
use std::collections::{HashMap, HashSet};

/// In-memory session state
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MaterializedState {
    pub metrics: PortfolioMetrics,
    /// Sequence number of the last applied drift tick.
    #[serde(default)]
    pub drift_seq: u64,
    /// Board items in insertion order.
    pub actions: IndexMap<ActionId, ActionItem>,
    pub analyses: HashMap<AnalysisId, AnalysisTrack>,
    pub dashboard: DashboardSnapshot,
    /// Views currently mounted. Background results for an unmounted view
    /// are discarded.
    #[serde(default)]
    pub active_views: HashSet<View>,
}

impl MaterializedState {
    pub fn action(&self, id: &str) -> Option<&ActionItem> {
        self.actions.get(id)
    }

    pub fn analysis(&self, id: &str) -> Option<&AnalysisTrack> {
        self.analyses.get(id)
    }

    pub fn is_view_active(&self, view: View) -> bool {
        self.active_views.contains(&view)
    }

    /// Filtered board grouped by status. Never mutates the items.
    pub fn action_board(&self, filter: &ActionFilter) -> ActionBoard {
        ActionBoard::build(self.actions.values(), filter)
    }

    /// Apply an event to derive state changes.
    ///
    /// Commands and raw fetch results fall through untouched; the runtime
    /// turns them into facts first.
    ///
    /// # Idempotency Requirement
    ///
    /// Applying the same fact twice must produce the same state as applying
    /// it once:
    /// - Lifecycle facts are guarded by the status they move away from
    /// - Tracker facts are guarded by `attempt` and the tracker phase
    /// - Counters are assigned (`elapsed_secs = secs`), never incremented
    /// - Drift ticks carry a sequence number
    pub fn apply_event(&mut self, event: &Event) {
        match event {
            // Analysis tracker
            Event::AnalysisTracking { .. }
            | Event::AnalysisPollSent { .. }
            | Event::AnalysisProgressed { .. }
            | Event::AnalysisCompleted { .. }
            | Event::AnalysisFailed { .. }
            | Event::AnalysisElapsed { .. }
            | Event::AnalysisStopped { .. }
            | Event::AnalysisHandedOff { .. }
            | Event::AnalysisReportLoaded { .. }
            | Event::AnalysisReportFailed { .. } => analyses::apply(self, event),

            // Action lifecycle (approval also writes the metrics)
            Event::ActionProposed { .. }
            | Event::ActionApproved { .. }
            | Event::ActionDeployed { .. }
            | Event::ActionDeployCompleted { .. }
            | Event::ActionRemoved { .. } => actions::apply(self, event),

            Event::MetricsDrifted { .. } => metrics::apply(self, event),

            // Views and dashboard sync
            Event::ViewActivated { .. }
            | Event::ViewDeactivated { .. }
            | Event::DashboardFetchSent { .. }
            | Event::DashboardSynced { .. }
            | Event::DashboardSyncFailed { .. } => dashboard::apply(self, event),

            // Commands and raw results handled by the runtime
            Event::Shutdown
            | Event::TimerStart { .. }
            | Event::AnalysisStart { .. }
            | Event::AnalysisStop { .. }
            | Event::AnalysisStatusReceived { .. }
            | Event::AnalysisStatusFailed { .. }
            | Event::ActionApprove { .. }
            | Event::ActionDeploy { .. }
            | Event::ActionReject { .. }
            | Event::ActionArchive { .. }
            | Event::DashboardRefresh { .. } => {}
        }
    }
}

#[cfg(test)]
#[path = "../state_tests/mod.rs"]
mod tests;
