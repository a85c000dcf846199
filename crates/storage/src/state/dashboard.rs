// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! View mount and dashboard sync handlers.

use soa_core::{Event, SyncStatus, View};

use super::MaterializedState;

pub(crate) fn apply(state: &mut MaterializedState, event: &Event) {
    match event {
        Event::ViewActivated { view } => {
            state.active_views.insert(*view);
            if *view == View::Dashboard && !state.dashboard.has_data() {
                state.dashboard.status = SyncStatus::Loading;
            }
        }

        Event::ViewDeactivated { view } => {
            state.active_views.remove(view);
        }

        Event::DashboardFetchSent { seq, .. } => {
            state.dashboard.requested_seq = state.dashboard.requested_seq.max(*seq);
        }

        Event::DashboardSynced { seq, metrics, listing, at_ms } => {
            if !state.is_view_active(View::Dashboard) {
                tracing::debug!("dashboard unmounted, discarding sync result");
                return;
            }
            if *seq <= state.dashboard.synced_seq {
                tracing::debug!(
                    seq,
                    synced_seq = state.dashboard.synced_seq,
                    "discarding stale sync"
                );
                return;
            }
            state.dashboard.synced_seq = *seq;
            // Both slices in one step
            state.dashboard.metrics = Some(metrics.clone());
            state.dashboard.listing = Some(listing.clone());
            state.dashboard.status = SyncStatus::Live;
            state.dashboard.last_synced_ms = Some(*at_ms);
            state.dashboard.error = None;
        }

        Event::DashboardSyncFailed { seq, silent, error } => {
            if *silent
                || *seq < state.dashboard.synced_seq
                || !state.is_view_active(View::Dashboard)
            {
                return;
            }
            state.dashboard.status = SyncStatus::ConnectionError;
            state.dashboard.error = Some(error.clone());
        }

        _ => {}
    }
}
