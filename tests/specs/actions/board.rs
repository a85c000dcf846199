// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Board filtering specs

use crate::prelude::*;
use similar_asserts::assert_eq;

#[tokio::test(start_paused = true)]
async fn search_matches_title_or_type() {
    let harness = Harness::seeded().await;

    let board = harness.handle.board(&ActionFilter::new(TypeFilter::All, "pricing"));
    let mut ids: Vec<String> = board.iter().map(|i| i.id.to_string()).collect();
    ids.sort();
    assert_eq!(ids, vec!["1", "4", "6"]);

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn type_filter_and_search_combine() {
    let harness = Harness::seeded().await;
    let marketing = TypeFilter::parse("marketing").unwrap();

    let all_marketing = harness.handle.board(&ActionFilter::new(marketing, ""));
    assert_eq!(all_marketing.len(), 3);

    let board = harness.handle.board(&ActionFilter::new(marketing, "LOYALTY"));
    assert_eq!(board.len(), 2);
    assert!(board.proposed.is_empty());
    assert_eq!(board.live.len(), 2);

    harness.stop().await;
}

#[tokio::test(start_paused = true)]
async fn board_groups_by_status_and_never_mutates_items() {
    let harness = Harness::seeded().await;
    let before = harness.handle.with_state(|s| s.actions.clone());

    let board = harness.handle.board(&ActionFilter::default());
    assert_eq!(
        [board.proposed.len(), board.approved.len(), board.live.len(), board.measuring.len()],
        [2, 1, 2, 1]
    );
    let _ = harness.handle.board(&ActionFilter::new(TypeFilter::All, "nothing matches"));
    assert_eq!(harness.handle.with_state(|s| s.actions.clone()), before);

    harness.stop().await;
}
