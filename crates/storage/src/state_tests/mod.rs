// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod actions;
mod analyses;
mod dashboard;
mod idempotency;
mod replay;

use super::*;
pub(super) use soa_core::test_support::{
    approved_event, progressed_event, seed_event, seeded_actions, tracking_event,
};
use soa_core::{ActionStatus, AnalysisStatus, PortfolioMetrics, TrackError, TrackPhase};

// ── Basic lifecycle ────────────────────────────────────────────────────────

#[test]
fn default_state_has_initial_metrics() {
    let state = MaterializedState::default();
    assert_eq!(state.metrics, PortfolioMetrics::default());
    assert!(state.actions.is_empty());
    assert!(state.active_views.is_empty());
}

#[test]
fn seed_keeps_insertion_order() {
    let mut state = MaterializedState::default();
    state.apply_event(&seed_event());
    let ids: Vec<&str> = state.actions.keys().map(|k| k.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn board_groups_seeded_items() {
    let mut state = MaterializedState::default();
    state.apply_event(&seed_event());
    let board = state.action_board(&ActionFilter::default());
    assert_eq!(board.column(ActionStatus::Proposed).len(), 2);
    assert_eq!(board.column(ActionStatus::Approved).len(), 1);
    assert_eq!(board.column(ActionStatus::Live).len(), 2);
    assert_eq!(board.column(ActionStatus::Measuring).len(), 1);
}

#[test]
fn commands_leave_state_untouched() {
    let mut state = MaterializedState::default();
    state.apply_event(&seed_event());
    let before = state.clone();

    for event in [
        Event::ActionApprove { id: ActionId::new("1"), uplift: 1450.0 },
        Event::ActionDeploy { id: ActionId::new("3") },
        Event::ActionReject { id: ActionId::new("2") },
        Event::ActionArchive { id: ActionId::new("6") },
        Event::AnalysisStart { id: AnalysisId::new("an-1") },
        Event::DashboardRefresh { silent: false },
        Event::Shutdown,
    ] {
        state.apply_event(&event);
    }

    assert_eq!(state.actions, before.actions);
    assert_eq!(state.metrics, before.metrics);
    assert!(state.analyses.is_empty());
}
