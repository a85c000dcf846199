// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use soa_core::RemovalReason;

fn seeded() -> MaterializedState {
    let mut state = MaterializedState::default();
    state.apply_event(&seed_event());
    state
}

#[test]
fn approval_moves_item_and_metrics_together() {
    let mut state = seeded();
    state.apply_event(&approved_event("1", 1450.0));

    let item = state.action("1").unwrap();
    assert_eq!(item.status, ActionStatus::Approved);
    assert_eq!(item.timestamp_ms, 2_000_000);
    assert_eq!(state.metrics.revenue, 143_950.0);
    assert_eq!(state.metrics.active_agents, 19);
    assert_eq!(state.metrics.critical_alerts, 3);
}

#[test]
fn approval_of_non_proposed_item_is_ignored() {
    let mut state = seeded();
    // "3" is already Approved
    state.apply_event(&approved_event("3", 400.0));
    assert_eq!(state.metrics, PortfolioMetrics::default());
    // unknown id
    state.apply_event(&approved_event("nope", 400.0));
    assert_eq!(state.metrics, PortfolioMetrics::default());
}

#[test]
fn deploy_sets_zero_progress_then_completion_sets_full() {
    let mut state = seeded();
    state.apply_event(&Event::ActionDeployed { id: ActionId::new("3"), at_ms: 5 });
    let item = state.action("3").unwrap();
    assert_eq!(item.status, ActionStatus::Live);
    assert_eq!(item.progress, Some(0));
    assert!(!item.is_deployed());

    state.apply_event(&Event::ActionDeployCompleted { id: ActionId::new("3"), at_ms: 9 });
    let item = state.action("3").unwrap();
    assert_eq!(item.progress, Some(100));
    assert_eq!(item.timestamp_ms, 9);
    assert!(item.is_deployed());
}

#[test]
fn deploy_of_proposed_item_is_ignored() {
    let mut state = seeded();
    state.apply_event(&Event::ActionDeployed { id: ActionId::new("1"), at_ms: 5 });
    assert_eq!(state.action("1").unwrap().status, ActionStatus::Proposed);
    assert_eq!(state.action("1").unwrap().progress, None);
}

#[test]
fn completion_without_deploy_is_ignored() {
    let mut state = seeded();
    state.apply_event(&Event::ActionDeployCompleted { id: ActionId::new("3"), at_ms: 9 });
    assert_eq!(state.action("3").unwrap().status, ActionStatus::Approved);
    assert_eq!(state.action("3").unwrap().progress, None);
}

#[yare::parameterized(
    rejected = { "2", RemovalReason::Rejected },
    archived = { "6", RemovalReason::Archived },
)]
fn removal_drops_item_and_keeps_order(id: &str, reason: RemovalReason) {
    let mut state = seeded();
    state.apply_event(&Event::ActionRemoved { id: ActionId::new(id), reason });
    assert!(state.action(id).is_none());
    assert_eq!(state.actions.len(), 5);
    let ids: Vec<&str> = state.actions.keys().map(|k| k.as_str()).collect();
    let mut expected: Vec<&str> = vec!["1", "2", "3", "4", "5", "6"];
    expected.retain(|i| *i != id);
    assert_eq!(ids, expected);
}

#[test]
fn proposal_does_not_overwrite_existing_items() {
    let mut state = seeded();
    state.apply_event(&approved_event("1", 1450.0));

    let mut items = seeded_actions();
    items[0].title = "Replaced".to_string();
    state.apply_event(&Event::ActionProposed { items });

    let item = state.action("1").unwrap();
    assert_eq!(item.status, ActionStatus::Approved);
    assert_eq!(item.title, "Increase Weekend Rate for Executive Suites");
    assert_eq!(state.actions.len(), 6);
}

#[test]
fn drift_and_approval_both_land() {
    let mut state = seeded();
    state.apply_event(&Event::MetricsDrifted { seq: 1, revenue_delta: 100.0, occupancy_delta: 0.1 });
    state.apply_event(&approved_event("1", 1450.0));
    state.apply_event(&Event::MetricsDrifted { seq: 2, revenue_delta: -40.0, occupancy_delta: -0.05 });

    assert_eq!(state.metrics.revenue, 142_500.0 + 100.0 + 1450.0 - 40.0);
    assert_eq!(state.metrics.active_agents, 19);
}
