// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action lifecycle tests

use super::*;
use soa_core::{ActionStatus, PortfolioMetrics};

#[tokio::test]
async fn approve_moves_item_and_adds_uplift() {
    let mut ctx = setup_seeded().await;
    ctx.process(action_event("approve", "1")).await;

    let (status, revenue) = ctx.state(|s| (s.action("1").map(|i| i.status), s.metrics.revenue));
    assert_eq!(status, Some(ActionStatus::Approved));
    assert_eq!(revenue, PortfolioMetrics::default().revenue + 1450.0);
}

#[tokio::test]
async fn approving_twice_counts_uplift_once() {
    let mut ctx = setup_seeded().await;
    ctx.process(action_event("approve", "1")).await;
    ctx.process(action_event("approve", "1")).await;

    assert_eq!(ctx.state(|s| s.metrics.revenue), PortfolioMetrics::default().revenue + 1450.0);
}

#[yare::parameterized(
    approve_approved  = { "approve", "3", ActionStatus::Approved },
    approve_live      = { "approve", "4", ActionStatus::Live },
    deploy_proposed   = { "deploy", "1", ActionStatus::Proposed },
    deploy_measuring  = { "deploy", "6", ActionStatus::Measuring },
    reject_approved   = { "reject", "3", ActionStatus::Approved },
    archive_live      = { "archive", "5", ActionStatus::Live },
)]
fn invalid_transition_is_noop(command: &str, id: &str, expected: ActionStatus) {
    block_on(async {
        let mut ctx = setup_seeded().await;
        let before = ctx.state(|s| s.metrics);
        ctx.process(action_event(command, id)).await;

        assert_eq!(ctx.state(|s| s.action(id).map(|i| i.status)), Some(expected));
        assert_eq!(ctx.state(|s| s.metrics), before);
        assert!(ctx.pending_timer_ids().is_empty());
    });
}

#[tokio::test]
async fn unknown_action_is_ignored() {
    let mut ctx = setup_seeded().await;
    ctx.process(action_event("approve", "nope")).await;
    assert_eq!(ctx.state(|s| s.actions.len()), 6);
}

#[tokio::test]
async fn deploy_goes_live_then_completes_after_delay() {
    let mut ctx = setup_seeded().await;
    ctx.process(action_event("deploy", "3")).await;

    let item = ctx.state(|s| s.action("3").cloned()).unwrap();
    assert_eq!(item.status, ActionStatus::Live);
    assert_eq!(item.progress, Some(0));
    assert!(ctx.has_timer("deploy:3"));

    ctx.advance(Duration::from_millis(1999)).await;
    assert_eq!(ctx.state(|s| s.action("3").and_then(|i| i.progress)), Some(0));

    ctx.advance(Duration::from_millis(1)).await;
    let item = ctx.state(|s| s.action("3").cloned()).unwrap();
    assert!(item.is_deployed());
    assert_eq!(item.timestamp_ms, 1_002_000);
}

#[tokio::test]
async fn deploying_twice_keeps_one_timer() {
    let mut ctx = setup_seeded().await;
    ctx.process(action_event("deploy", "3")).await;
    ctx.advance(Duration::from_secs(1)).await;
    // Second deploy is invalid from Live and must not re-arm the timer
    ctx.process(action_event("deploy", "3")).await;

    ctx.advance(Duration::from_secs(1)).await;
    assert!(ctx.state(|s| s.action("3").is_some_and(|i| i.is_deployed())));
    assert!(ctx.pending_timer_ids().is_empty());
}

#[tokio::test]
async fn approve_then_deploy_full_lifecycle() {
    let mut ctx = setup_seeded().await;
    ctx.process(action_event("approve", "2")).await;
    ctx.process(action_event("deploy", "2")).await;
    ctx.advance(Duration::from_secs(2)).await;

    let item = ctx.state(|s| s.action("2").cloned()).unwrap();
    assert!(item.is_deployed());
}

#[yare::parameterized(
    reject_proposed   = { "reject", "2" },
    archive_measuring = { "archive", "6" },
)]
fn removal_drops_item(command: &str, id: &str) {
    block_on(async {
        let mut ctx = setup_seeded().await;
        ctx.process(action_event(command, id)).await;
        assert!(ctx.state(|s| s.action(id).is_none()));
        assert_eq!(ctx.state(|s| s.actions.len()), 5);
    });
}

#[tokio::test]
async fn commands_after_removal_are_ignored() {
    let mut ctx = setup_seeded().await;
    ctx.process(action_event("reject", "1")).await;
    ctx.process(action_event("approve", "1")).await;

    assert!(ctx.state(|s| s.action("1").is_none()));
    assert_eq!(ctx.state(|s| s.metrics.revenue), PortfolioMetrics::default().revenue);
}
