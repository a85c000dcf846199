// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Metrics drift handler. Approvals are applied alongside the item
//! transition in `actions`.

use soa_core::{Event, MetricsChange};

use super::MaterializedState;

pub(crate) fn apply(state: &mut MaterializedState, event: &Event) {
    if let Event::MetricsDrifted { seq, revenue_delta, occupancy_delta } = event {
        if *seq <= state.drift_seq {
            return;
        }
        state.drift_seq = *seq;
        state.metrics = state.metrics.reduce(&MetricsChange::Drift {
            revenue_delta: *revenue_delta,
            occupancy_delta: *occupancy_delta,
        });
    }
}
