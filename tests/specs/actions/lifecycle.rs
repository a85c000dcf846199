// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action lifecycle specs
//!
//! Proposed → Approved → Live, with removal by reject or archive. Anything
//! else is a no-op.

use crate::prelude::*;
use similar_asserts::assert_eq;

fn status(harness: &Harness, id: &str) -> Option<ActionStatus> {
    harness.handle.action(id).map(|i| i.status)
}

#[tokio::test(start_paused = true)]
async fn approval_raises_revenue_by_exact_uplift() {
    let harness = Harness::seeded().await;
    let before = harness.handle.metrics();

    harness.handle.approve(ActionId::new("2"), 120.0).await.unwrap();
    harness
        .until("approval", |s| s.action("2").is_some_and(|i| i.status == ActionStatus::Approved))
        .await;

    let after = harness.handle.metrics();
    assert_eq!(after.revenue, before.revenue + 120.0);
    assert!(after.occupancy >= before.occupancy && after.occupancy <= 100.0);
    assert_eq!(after.active_agents, before.active_agents + 1);

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn deploy_completes_after_two_seconds() {
    let harness = Harness::seeded().await;

    harness.handle.deploy(ActionId::new("3")).await.unwrap();
    harness.pass(Duration::from_millis(100)).await;
    let item = harness.handle.action("3").unwrap();
    assert_eq!(item.status, ActionStatus::Live);
    assert_eq!(item.progress, Some(0));

    harness.pass(Duration::from_millis(1800)).await;
    assert_eq!(harness.handle.action("3").and_then(|i| i.progress), Some(0));

    harness.pass(Duration::from_millis(200)).await;
    assert_eq!(harness.handle.action("3").and_then(|i| i.progress), Some(100));

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn double_deploy_completes_once() {
    let harness = Harness::seeded().await;

    harness.handle.deploy(ActionId::new("3")).await.unwrap();
    harness.pass(Duration::from_millis(1000)).await;
    harness.handle.deploy(ActionId::new("3")).await.unwrap();
    harness.pass(Duration::from_millis(1100)).await;

    assert!(harness.handle.action("3").is_some_and(|i| i.is_deployed()));

    harness.pass(Duration::from_secs(5)).await;
    let item = harness.handle.action("3").unwrap();
    assert_eq!((item.status, item.progress), (ActionStatus::Live, Some(100)));

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn invalid_commands_leave_board_untouched() {
    let harness = Harness::seeded().await;
    let before = harness.handle.with_state(|s| (s.actions.clone(), s.metrics));

    harness.handle.approve(ActionId::new("4"), 900.0).await.unwrap();
    harness.handle.deploy(ActionId::new("1")).await.unwrap();
    harness.handle.reject(ActionId::new("3")).await.unwrap();
    harness.handle.archive(ActionId::new("5")).await.unwrap();
    harness.handle.approve(ActionId::new("missing"), 1.0).await.unwrap();
    harness.pass(Duration::from_secs(3)).await;

    assert_eq!(harness.handle.with_state(|s| (s.actions.clone(), s.metrics)), before);

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn reject_and_archive_remove_items() {
    let harness = Harness::seeded().await;

    harness.handle.reject(ActionId::new("2")).await.unwrap();
    harness.handle.archive(ActionId::new("6")).await.unwrap();
    harness.until("removals", |s| s.actions.len() == 4).await;

    assert_eq!(status(&harness, "2"), None);
    assert_eq!(status(&harness, "6"), None);
    assert_eq!(status(&harness, "1"), Some(ActionStatus::Proposed));

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn full_walk_from_proposal_to_live() {
    let harness = Harness::seeded().await;
    let id = ActionId::new("1");

    harness.handle.approve(id.clone(), 1450.0).await.unwrap();
    harness.handle.deploy(id.clone()).await.unwrap();
    harness.until("deploy", |s| s.action("1").is_some_and(|i| i.is_deployed())).await;

    assert_eq!(status(&harness, "1"), Some(ActionStatus::Live));
    assert_eq!(harness.handle.metrics().revenue, PortfolioMetrics::default().revenue + 1450.0);

    harness.stop().await;
}
