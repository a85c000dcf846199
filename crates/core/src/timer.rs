// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer identifier type for tracking scheduled timers.
//!
//! Every timer belongs to exactly one lifecycle scope: a tracked analysis,
//! a deploying action, or a mounted view. The scope is encoded in the ID so
//! that cancelling a scope is a matter of cancelling its IDs.

use crate::action::ActionId;
use crate::analysis::AnalysisId;

crate::define_id! {
    /// Unique identifier for a timer instance.
    pub struct TimerId;
}

impl TimerId {
    /// Status poll interval for one tracked analysis.
    pub fn analysis_poll(id: &AnalysisId) -> Self {
        TimerKind::AnalysisPoll(id.clone()).to_timer_id()
    }

    /// Display-only elapsed-seconds counter for one tracked analysis.
    pub fn analysis_elapsed(id: &AnalysisId) -> Self {
        TimerKind::AnalysisElapsed(id.clone()).to_timer_id()
    }

    /// One-shot delay between completion and the result hand-off.
    pub fn analysis_handoff(id: &AnalysisId) -> Self {
        TimerKind::AnalysisHandoff(id.clone()).to_timer_id()
    }

    /// One-shot deploy completion for one action item.
    pub fn deploy(id: &ActionId) -> Self {
        TimerKind::DeployComplete(id.clone()).to_timer_id()
    }

    pub fn metrics_drift() -> Self {
        TimerKind::MetricsDrift.to_timer_id()
    }

    pub fn dashboard_refresh() -> Self {
        TimerKind::DashboardRefresh.to_timer_id()
    }

    /// Parse this timer ID into a typed `TimerKind`.
    pub fn kind(&self) -> Option<TimerKind> {
        TimerKind::parse(self.as_str())
    }
}

/// Parsed representation of a timer ID for type-safe routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerKind {
    AnalysisPoll(AnalysisId),
    AnalysisElapsed(AnalysisId),
    AnalysisHandoff(AnalysisId),
    DeployComplete(ActionId),
    MetricsDrift,
    DashboardRefresh,
}

impl TimerKind {
    /// Parse a timer ID string into a typed `TimerKind`.
    ///
    /// Returns `None` for unrecognized timer ID formats and for scoped
    /// prefixes with an empty scope.
    pub fn parse(id: &str) -> Option<TimerKind> {
        let scoped = |prefix: &str| id.strip_prefix(prefix).filter(|rest| !rest.is_empty());

        if let Some(rest) = scoped("analysis-poll:") {
            return Some(TimerKind::AnalysisPoll(AnalysisId::new(rest)));
        }
        if let Some(rest) = scoped("analysis-elapsed:") {
            return Some(TimerKind::AnalysisElapsed(AnalysisId::new(rest)));
        }
        if let Some(rest) = scoped("analysis-handoff:") {
            return Some(TimerKind::AnalysisHandoff(AnalysisId::new(rest)));
        }
        if let Some(rest) = scoped("deploy:") {
            return Some(TimerKind::DeployComplete(ActionId::new(rest)));
        }
        match id {
            "metrics-drift" => Some(TimerKind::MetricsDrift),
            "dashboard-refresh" => Some(TimerKind::DashboardRefresh),
            _ => None,
        }
    }

    /// Format this `TimerKind` back into a canonical `TimerId`.
    pub fn to_timer_id(&self) -> TimerId {
        match self {
            TimerKind::AnalysisPoll(id) => TimerId::new(format!("analysis-poll:{id}")),
            TimerKind::AnalysisElapsed(id) => TimerId::new(format!("analysis-elapsed:{id}")),
            TimerKind::AnalysisHandoff(id) => TimerId::new(format!("analysis-handoff:{id}")),
            TimerKind::DeployComplete(id) => TimerId::new(format!("deploy:{id}")),
            TimerKind::MetricsDrift => TimerId::new("metrics-drift"),
            TimerKind::DashboardRefresh => TimerId::new("dashboard-refresh"),
        }
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
