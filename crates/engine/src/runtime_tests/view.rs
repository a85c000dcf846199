// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Metrics drift and dashboard sync tests

use super::*;
use soa_core::test_support::{dashboard_metrics, portfolio_listing};
use soa_core::{PortfolioMetrics, SyncStatus};

fn script_dashboard(ctx: &TestContext) {
    ctx.api.push_metrics(Ok(dashboard_metrics())).push_portfolio(Ok(portfolio_listing()));
}

// =============================================================================
// Metrics drift
// =============================================================================

#[tokio::test]
async fn drift_ticks_while_metrics_view_is_mounted() {
    let mut ctx = setup();
    ctx.process(Event::ViewActivated { view: View::Metrics }).await;

    ctx.advance(Duration::from_millis(3499)).await;
    assert_eq!(ctx.state(|s| s.drift_seq), 0);

    ctx.advance(Duration::from_millis(1)).await;
    let (seq, metrics) = ctx.state(|s| (s.drift_seq, s.metrics));
    let base = PortfolioMetrics::default();
    assert_eq!(seq, 1);
    assert_eq!(metrics.revenue, base.revenue + 100.0);
    assert!((metrics.occupancy - (base.occupancy + 0.1)).abs() < 1e-9);

    ctx.advance(Duration::from_millis(3500 * 3)).await;
    // One tick per advance: the re-armed timer is due 3.5s after it fired
    assert_eq!(ctx.state(|s| s.drift_seq), 2);
}

#[tokio::test]
async fn unmounting_metrics_stops_drift() {
    let mut ctx = setup();
    ctx.process(Event::ViewActivated { view: View::Metrics }).await;
    ctx.advance(Duration::from_millis(3500)).await;
    ctx.process(Event::ViewDeactivated { view: View::Metrics }).await;

    ctx.advance(Duration::from_secs(20)).await;
    assert_eq!(ctx.state(|s| s.drift_seq), 1);
    assert!(!ctx.has_timer("metrics-drift"));
}

#[tokio::test]
async fn replayed_drift_tick_is_ignored() {
    let mut ctx = setup();
    ctx.process(Event::ViewActivated { view: View::Metrics }).await;
    ctx.advance(Duration::from_millis(3500)).await;
    let revenue = ctx.state(|s| s.metrics.revenue);

    ctx.process(Event::MetricsDrifted { seq: 1, revenue_delta: 5000.0, occupancy_delta: 0.0 })
        .await;
    assert_eq!(ctx.state(|s| s.metrics.revenue), revenue);
}

// =============================================================================
// Dashboard sync
// =============================================================================

#[tokio::test]
async fn mount_loads_dashboard_in_foreground() {
    let mut ctx = setup();
    script_dashboard(&ctx);

    ctx.process(Event::ViewActivated { view: View::Dashboard }).await;
    assert_eq!(ctx.state(|s| s.dashboard.status), SyncStatus::Loading);

    ctx.process_background_events().await;
    let dashboard = ctx.state(|s| s.dashboard.clone());
    assert_eq!(dashboard.status, SyncStatus::Live);
    assert_eq!(dashboard.metrics, Some(dashboard_metrics()));
    assert_eq!(dashboard.listing.map(|l| l.properties.len()), Some(2));
    assert_eq!(dashboard.last_synced_ms, Some(1_000_000));
}

#[tokio::test]
async fn foreground_failure_shows_connection_error() {
    let mut ctx = setup();
    ctx.api.push_metrics(Ok(dashboard_metrics()));
    ctx.api.push_portfolio(Err(ApiError::Status { status: 502, body: "bad gateway".into() }));

    ctx.process(Event::ViewActivated { view: View::Dashboard }).await;
    ctx.process_background_events().await;

    let dashboard = ctx.state(|s| s.dashboard.clone());
    assert_eq!(dashboard.status, SyncStatus::ConnectionError);
    assert!(dashboard.metrics.is_none());
    assert!(dashboard.error.is_some());
}

#[tokio::test]
async fn silent_refresh_failure_keeps_last_good_data() {
    let mut ctx = setup();
    ctx.api
        .push_metrics(Ok(dashboard_metrics()))
        .push_metrics(Err(ApiError::Transport("timed out".into())));
    ctx.api.push_portfolio(Ok(portfolio_listing()));

    ctx.process(Event::ViewActivated { view: View::Dashboard }).await;
    ctx.process_background_events().await;

    ctx.advance(Duration::from_secs(30)).await;
    assert_eq!(ctx.api.metrics_calls(), 2);

    let dashboard = ctx.state(|s| s.dashboard.clone());
    assert_eq!(dashboard.status, SyncStatus::Live);
    assert_eq!(dashboard.metrics, Some(dashboard_metrics()));
    assert_eq!(dashboard.last_synced_ms, Some(1_000_000));
}

#[tokio::test]
async fn refresh_repeats_on_interval() {
    let mut ctx = setup();
    script_dashboard(&ctx);

    ctx.process(Event::ViewActivated { view: View::Dashboard }).await;
    ctx.process_background_events().await;
    for _ in 0..3 {
        ctx.advance(Duration::from_secs(30)).await;
    }

    assert_eq!(ctx.api.metrics_calls(), 4);
    assert_eq!(ctx.api.portfolio_calls(), 4);
    assert_eq!(ctx.state(|s| s.dashboard.last_synced_ms), Some(1_090_000));
}

#[tokio::test]
async fn unmount_discards_inflight_result_and_stops_refresh() {
    let mut ctx = setup();
    script_dashboard(&ctx);

    ctx.process(Event::ViewActivated { view: View::Dashboard }).await;
    ctx.process(Event::ViewDeactivated { view: View::Dashboard }).await;
    ctx.process_background_events().await;

    assert!(ctx.state(|s| s.dashboard.metrics.is_none()));
    assert!(!ctx.has_timer("dashboard-refresh"));

    ctx.advance(Duration::from_secs(60)).await;
    assert_eq!(ctx.api.metrics_calls(), 1);
}

#[tokio::test]
async fn manual_refresh_while_mounted() {
    let mut ctx = setup();
    script_dashboard(&ctx);

    ctx.process(Event::ViewActivated { view: View::Dashboard }).await;
    ctx.process_background_events().await;
    ctx.process(Event::DashboardRefresh { silent: false }).await;
    ctx.process_background_events().await;

    assert_eq!(ctx.api.metrics_calls(), 2);
    assert_eq!(ctx.state(|s| s.dashboard.status), SyncStatus::Live);
}

#[tokio::test]
async fn overlapping_fetches_get_distinct_seqs_and_older_result_loses() {
    let mut ctx = setup();
    script_dashboard(&ctx);

    // Mount fetch and a manual refresh both in flight
    ctx.process(Event::ViewActivated { view: View::Dashboard }).await;
    ctx.process(Event::DashboardRefresh { silent: false }).await;
    assert_eq!(ctx.state(|s| s.dashboard.requested_seq), 2);

    let synced = |seq, at_ms| Event::DashboardSynced {
        seq,
        metrics: dashboard_metrics(),
        listing: portfolio_listing(),
        at_ms,
    };
    ctx.process(synced(2, 7_000)).await;
    ctx.process(synced(1, 5_000)).await;
    ctx.process_background_events().await;

    assert_eq!(ctx.state(|s| s.dashboard.last_synced_ms), Some(7_000));
    assert_eq!(ctx.state(|s| s.dashboard.synced_seq), 2);
}
