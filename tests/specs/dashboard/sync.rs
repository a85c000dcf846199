// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard sync specs
//!
//! One foreground load on mount, then silent refreshes every 30s while
//! mounted. Metrics and portfolio land together or not at all.

use crate::prelude::*;
use similar_asserts::assert_eq;

fn scripted_api() -> FakeApi {
    let api = FakeApi::new();
    api.push_metrics(Ok(dashboard_metrics())).push_portfolio(Ok(portfolio_listing()));
    api
}

#[tokio::test(start_paused = true)]
async fn mount_loads_both_slices() {
    let harness = Harness::start(scripted_api());

    harness.handle.activate(View::Dashboard).await.unwrap();
    harness.until("first sync", |s| s.dashboard.status == SyncStatus::Live).await;

    let dashboard = harness.handle.dashboard();
    assert_eq!(dashboard.metrics, Some(dashboard_metrics()));
    assert_eq!(dashboard.listing, Some(portfolio_listing()));
    assert!(dashboard.error.is_none());

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn silent_refresh_failure_keeps_both_slices() {
    let api = FakeApi::new();
    let mut fresher = dashboard_metrics();
    fresher.avg_occupancy = 70.0;
    api.push_metrics(Ok(dashboard_metrics()))
        .push_metrics(Err(ApiError::Transport("timed out".into())))
        .push_metrics(Ok(fresher.clone()));
    api.push_portfolio(Ok(portfolio_listing()));
    let harness = Harness::start(api.clone());

    harness.handle.activate(View::Dashboard).await.unwrap();
    harness.until("first sync", |s| s.dashboard.status == SyncStatus::Live).await;
    let first = harness.handle.dashboard();

    // Refresh at 30s: metrics fail, portfolio succeeds
    harness.pass(Duration::from_secs(31)).await;
    assert_eq!(api.metrics_calls(), 2);
    assert_eq!(api.portfolio_calls(), 2);
    assert_eq!(harness.handle.dashboard(), first);

    // Refresh at 60s succeeds again
    harness.pass(Duration::from_secs(30)).await;
    let dashboard = harness.handle.dashboard();
    assert_eq!(dashboard.metrics, Some(fresher));
    assert_eq!(dashboard.status, SyncStatus::Live);

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn foreground_failure_reports_connection_error() {
    let api = FakeApi::new();
    api.push_metrics(Err(ApiError::Status { status: 500, body: "boom".into() }))
        .push_portfolio(Ok(portfolio_listing()));
    let harness = Harness::start(api);

    harness.handle.activate(View::Dashboard).await.unwrap();
    harness
        .until("connection error", |s| s.dashboard.status == SyncStatus::ConnectionError)
        .await;

    let dashboard = harness.handle.dashboard();
    assert!(dashboard.metrics.is_none());
    assert!(dashboard.listing.is_none());
    assert!(dashboard.error.is_some_and(|e| e.contains("500")));

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn manual_refresh_recovers_from_connection_error() {
    let api = FakeApi::new();
    api.push_metrics(Err(ApiError::Transport("refused".into())))
        .push_metrics(Ok(dashboard_metrics()))
        .push_portfolio(Ok(portfolio_listing()));
    let harness = Harness::start(api);

    harness.handle.activate(View::Dashboard).await.unwrap();
    harness
        .until("connection error", |s| s.dashboard.status == SyncStatus::ConnectionError)
        .await;

    harness.handle.refresh().await.unwrap();
    harness.until("recovery", |s| s.dashboard.status == SyncStatus::Live).await;
    assert!(harness.handle.dashboard().error.is_none());

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn unmount_stops_refreshing() {
    let api = scripted_api();
    let harness = Harness::start(api.clone());

    harness.handle.activate(View::Dashboard).await.unwrap();
    harness.until("first sync", |s| s.dashboard.status == SyncStatus::Live).await;
    harness.handle.deactivate(View::Dashboard).await.unwrap();

    harness.pass(Duration::from_secs(120)).await;
    assert_eq!(api.metrics_calls(), 1);

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn remount_refreshes_without_reentering_loading() {
    let api = scripted_api();
    let harness = Harness::start(api.clone());

    harness.handle.activate(View::Dashboard).await.unwrap();
    harness.until("first sync", |s| s.dashboard.status == SyncStatus::Live).await;
    harness.handle.deactivate(View::Dashboard).await.unwrap();
    harness.handle.activate(View::Dashboard).await.unwrap();
    harness.pass(Duration::from_millis(10)).await;

    assert_eq!(harness.handle.dashboard().status, SyncStatus::Live);
    assert_eq!(api.metrics_calls(), 2);

    harness.stop().await;
}
