// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action item lifecycle handlers.

use soa_core::{ActionStatus, Event, MetricsChange};

use super::MaterializedState;

pub(crate) fn apply(state: &mut MaterializedState, event: &Event) {
    match event {
        Event::ActionProposed { items } => {
            for item in items {
                // Idempotency: an id already on the board keeps its state
                if !state.actions.contains_key(&item.id) {
                    state.actions.insert(item.id.clone(), item.clone());
                }
            }
        }

        Event::ActionApproved { id, uplift, at_ms } => {
            let Some(item) = state.actions.get_mut(id) else { return };
            if item.status != ActionStatus::Proposed {
                return;
            }
            item.status = ActionStatus::Approved;
            item.timestamp_ms = *at_ms;
            // Same reducer step as the status change, so the two never diverge
            state.metrics = state.metrics.reduce(&MetricsChange::Approval { amount: *uplift });
        }

        Event::ActionDeployed { id, at_ms } => {
            let Some(item) = state.actions.get_mut(id) else { return };
            if item.status == ActionStatus::Approved {
                item.status = ActionStatus::Live;
                item.progress = Some(0);
                item.timestamp_ms = *at_ms;
            }
        }

        Event::ActionDeployCompleted { id, at_ms } => {
            let Some(item) = state.actions.get_mut(id) else { return };
            if item.status == ActionStatus::Live && item.progress == Some(0) {
                item.progress = Some(100);
                item.timestamp_ms = *at_ms;
            }
        }

        Event::ActionRemoved { id, .. } => {
            state.actions.shift_remove(id);
        }

        _ => {}
    }
}
