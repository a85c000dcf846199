// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Applying a fact twice must leave the same state as applying it once.

use super::*;
use proptest::prelude::*;
use soa_core::View;

fn apply_twice(state: &mut MaterializedState, event: &Event) {
    state.apply_event(event);
    state.apply_event(event);
}

#[test]
fn approval_applied_twice_counts_once() {
    let mut state = MaterializedState::default();
    state.apply_event(&seed_event());
    apply_twice(&mut state, &approved_event("1", 1450.0));
    assert_eq!(state.metrics.revenue, 143_950.0);
    assert_eq!(state.metrics.active_agents, 19);
}

#[test]
fn drift_applied_twice_counts_once() {
    let mut state = MaterializedState::default();
    let event = Event::MetricsDrifted { seq: 1, revenue_delta: 120.0, occupancy_delta: 0.1 };
    apply_twice(&mut state, &event);
    assert_eq!(state.metrics.revenue, 142_620.0);
    assert_eq!(state.drift_seq, 1);
}

#[test]
fn tracker_facts_applied_twice() {
    let mut once = MaterializedState::default();
    let mut twice = MaterializedState::default();
    let events = vec![
        tracking_event("an-1", 1),
        Event::AnalysisPollSent { id: AnalysisId::new("an-1"), attempt: 1 },
        progressed_event("an-1", 1, AnalysisStatus::Processing, 35.0),
        Event::AnalysisElapsed { id: AnalysisId::new("an-1"), attempt: 1, secs: 3 },
        Event::AnalysisCompleted { id: AnalysisId::new("an-1"), attempt: 1 },
        Event::AnalysisHandedOff { id: AnalysisId::new("an-1"), attempt: 1 },
    ];
    for event in &events {
        once.apply_event(event);
        apply_twice(&mut twice, event);
    }
    assert_eq!(once.analyses, twice.analyses);
}

#[test]
fn view_toggles_applied_twice() {
    let mut state = MaterializedState::default();
    apply_twice(&mut state, &Event::ViewActivated { view: View::Metrics });
    assert!(state.is_view_active(View::Metrics));
    apply_twice(&mut state, &Event::ViewDeactivated { view: View::Metrics });
    assert!(!state.is_view_active(View::Metrics));
}

proptest! {
    /// Any interleaving of approvals and drift ticks keeps occupancy in
    /// bounds and counts every approval exactly once.
    #[test]
    fn interleaved_writers_lose_no_update(
        ops in proptest::collection::vec(
            prop_oneof![
                (0usize..6).prop_map(Some),
                Just(None),
            ],
            0..40,
        ),
        deltas in proptest::collection::vec((-50.0f64..150.0, prop_oneof![Just(0.1), Just(-0.05)]), 40),
    ) {
        let mut state = MaterializedState::default();
        state.apply_event(&seed_event());
        let mut expected_revenue = state.metrics.revenue;
        let mut seq = 0;

        for (i, op) in ops.into_iter().enumerate() {
            match op {
                Some(index) => {
                    let item = seeded_actions()[index].clone();
                    let proposed = state.action(item.id.as_str()).map(|i| i.status) == Some(ActionStatus::Proposed);
                    state.apply_event(&approved_event(item.id.as_str(), item.uplift_value));
                    if proposed {
                        expected_revenue += item.uplift_value;
                    }
                }
                None => {
                    seq += 1;
                    let (revenue_delta, occupancy_delta) = deltas[i];
                    state.apply_event(&Event::MetricsDrifted { seq, revenue_delta, occupancy_delta });
                    expected_revenue += revenue_delta;
                }
            }
            prop_assert!((0.0..=100.0).contains(&state.metrics.occupancy));
        }
        prop_assert!((state.metrics.revenue - expected_revenue).abs() < 1e-6);
    }
}
