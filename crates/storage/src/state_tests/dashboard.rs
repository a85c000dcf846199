// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use soa_core::test_support::{dashboard_metrics, portfolio_listing};
use soa_core::{PortfolioListing, SyncStatus, View};

fn synced(seq: u64, at_ms: u64) -> Event {
    Event::DashboardSynced { seq, metrics: dashboard_metrics(), listing: portfolio_listing(), at_ms }
}

fn failed(seq: u64, silent: bool, error: &str) -> Event {
    Event::DashboardSyncFailed { seq, silent, error: error.into() }
}

fn mounted() -> MaterializedState {
    let mut state = MaterializedState::default();
    state.apply_event(&Event::ViewActivated { view: View::Dashboard });
    state
}

#[test]
fn activation_without_data_is_loading() {
    let state = mounted();
    assert!(state.is_view_active(View::Dashboard));
    assert_eq!(state.dashboard.status, SyncStatus::Loading);
}

#[test]
fn sync_replaces_both_slices() {
    let mut state = mounted();
    state.apply_event(&synced(1, 10));
    assert_eq!(state.dashboard.status, SyncStatus::Live);
    assert_eq!(state.dashboard.metrics, Some(dashboard_metrics()));
    assert_eq!(state.dashboard.listing.as_ref().map(|l| l.properties.len()), Some(2));
    assert_eq!(state.dashboard.last_synced_ms, Some(10));
}

#[test]
fn foreground_failure_surfaces_connection_error() {
    let mut state = mounted();
    state.apply_event(&failed(1, false, "refused"));
    assert_eq!(state.dashboard.status, SyncStatus::ConnectionError);
    assert_eq!(state.dashboard.error.as_deref(), Some("refused"));
}

#[test]
fn silent_failure_keeps_previous_data() {
    let mut state = mounted();
    state.apply_event(&synced(1, 10));
    let before = state.dashboard.clone();

    state.apply_event(&failed(2, true, "timeout"));
    assert_eq!(state.dashboard, before);
}

#[test]
fn results_after_unmount_are_discarded() {
    let mut state = mounted();
    state.apply_event(&Event::ViewDeactivated { view: View::Dashboard });
    state.apply_event(&synced(1, 10));
    state.apply_event(&failed(2, false, "x"));

    assert!(state.dashboard.metrics.is_none());
    assert_ne!(state.dashboard.status, SyncStatus::ConnectionError);
}

#[test]
fn remount_with_data_stays_live() {
    let mut state = mounted();
    state.apply_event(&synced(1, 10));
    state.apply_event(&Event::ViewDeactivated { view: View::Dashboard });
    state.apply_event(&Event::ViewActivated { view: View::Dashboard });
    assert_eq!(state.dashboard.status, SyncStatus::Live);
}

#[test]
fn empty_listing_still_counts_as_synced() {
    let mut state = mounted();
    state.apply_event(&Event::DashboardSynced {
        seq: 1,
        metrics: dashboard_metrics(),
        listing: PortfolioListing::default(),
        at_ms: 3,
    });
    assert!(state.dashboard.has_data());
    assert_eq!(state.dashboard.status, SyncStatus::Live);
}

#[test]
fn fetch_sent_tracks_highest_seq() {
    let mut state = mounted();
    state.apply_event(&Event::DashboardFetchSent { seq: 2, silent: true });
    state.apply_event(&Event::DashboardFetchSent { seq: 1, silent: false });
    assert_eq!(state.dashboard.requested_seq, 2);
}

#[test]
fn older_sync_landing_late_is_discarded() {
    let mut state = mounted();
    state.apply_event(&synced(3, 30_000));
    state.apply_event(&synced(2, 20_000));
    assert_eq!(state.dashboard.last_synced_ms, Some(30_000));
    assert_eq!(state.dashboard.synced_seq, 3);
}

#[yare::parameterized(
    older_failure = { 1, false },
    newer_failure = { 3, true },
)]
fn foreground_failure_against_newer_sync(seq: u64, surfaces: bool) {
    let mut state = mounted();
    state.apply_event(&synced(2, 10));
    state.apply_event(&failed(seq, false, "refused"));
    assert_eq!(state.dashboard.status == SyncStatus::ConnectionError, surfaces);
    assert!(state.dashboard.has_data());
}
