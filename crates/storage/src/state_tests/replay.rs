// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rebuilding state from an event log written as JSON lines.

use super::*;
use soa_core::test_support::{dashboard_metrics, portfolio_listing, sample_report};
use soa_core::{RemovalReason, View};

fn session_log() -> Vec<Event> {
    let an = || AnalysisId::new("an-1");
    vec![
        seed_event(),
        tracking_event("an-1", 1),
        Event::AnalysisPollSent { id: an(), attempt: 1 },
        progressed_event("an-1", 1, AnalysisStatus::Processing, 72.0),
        Event::AnalysisElapsed { id: an(), attempt: 1, secs: 4 },
        progressed_event("an-1", 1, AnalysisStatus::Completed, 100.0),
        Event::AnalysisCompleted { id: an(), attempt: 1 },
        Event::AnalysisHandedOff { id: an(), attempt: 1 },
        Event::AnalysisReportLoaded { id: an(), attempt: 1, report: sample_report("an-1") },
        approved_event("1", 1450.0),
        Event::ActionDeployed { id: ActionId::new("1"), at_ms: 2_000_500 },
        Event::ActionRemoved { id: ActionId::new("2"), reason: RemovalReason::Rejected },
        Event::ViewActivated { view: View::Metrics },
        Event::MetricsDrifted { seq: 1, revenue_delta: 87.25, occupancy_delta: -0.05 },
        Event::ViewActivated { view: View::Dashboard },
        Event::DashboardFetchSent { seq: 1, silent: false },
        Event::DashboardSynced {
            seq: 1,
            metrics: dashboard_metrics(),
            listing: portfolio_listing(),
            at_ms: 2_001_000,
        },
    ]
}

#[test]
fn replaying_json_log_rebuilds_same_state() {
    let mut live = MaterializedState::default();
    let mut lines = String::new();
    for event in session_log() {
        live.apply_event(&event);
        lines.push_str(&serde_json::to_string(&event).unwrap());
        lines.push('\n');
    }

    let mut replayed = MaterializedState::default();
    for line in lines.lines() {
        let event: Event = serde_json::from_str(line).unwrap();
        replayed.apply_event(&event);
    }

    assert_eq!(replayed.actions, live.actions);
    assert_eq!(replayed.analyses, live.analyses);
    assert_eq!(replayed.metrics, live.metrics);
    assert_eq!(replayed.drift_seq, live.drift_seq);
    assert_eq!(replayed.dashboard, live.dashboard);
    assert_eq!(replayed.active_views, live.active_views);
}

#[test]
fn state_survives_a_json_snapshot() {
    let mut state = MaterializedState::default();
    for event in session_log() {
        state.apply_event(&event);
    }

    let json = serde_json::to_string(&state).unwrap();
    let restored: MaterializedState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.actions, state.actions);
    assert_eq!(restored.analyses, state.analyses);
    assert_eq!(restored.dashboard.synced_seq, 1);
    assert_eq!(restored.metrics.revenue, state.metrics.revenue);
}
