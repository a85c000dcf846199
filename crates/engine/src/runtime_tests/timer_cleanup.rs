// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer lifecycle cleanup tests.
//!
//! Verifies that poll, elapsed, hand-off, deploy, and view timers are
//! cancelled when the thing that owns them ends.

use super::*;

#[yare::parameterized(
    completed = { analysis_job(ANALYSIS, AnalysisStatus::Completed, 100.0) },
    failed    = { failed_job(ANALYSIS, Some("boom")) },
)]
fn terminal_status_cancels_poll_and_elapsed(job: AnalysisJob) {
    block_on(async {
        let mut ctx = setup();
        ctx.api.push_status(ANALYSIS, Ok(job));
        start_tracking(&mut ctx).await;

        let timer_ids = ctx.pending_timer_ids();
        assert_no_timer_with_prefix(&timer_ids, "analysis-poll:");
        assert_no_timer_with_prefix(&timer_ids, "analysis-elapsed:");
    });
}

#[tokio::test]
async fn network_error_cancels_poll_and_elapsed() {
    let mut ctx = setup();
    ctx.api.push_status(ANALYSIS, Err(ApiError::Transport("refused".into())));
    start_tracking(&mut ctx).await;

    let timer_ids = ctx.pending_timer_ids();
    assert_no_timer_with_prefix(&timer_ids, "analysis-");
}

#[tokio::test]
async fn stop_during_handoff_cancels_handoff() {
    let mut ctx = setup();
    ctx.api.push_status(ANALYSIS, completed());
    start_tracking(&mut ctx).await;
    assert!(ctx.has_timer("analysis-handoff:an-1"));

    ctx.process(Event::AnalysisStop { id: AnalysisId::new(ANALYSIS) }).await;
    let timer_ids = ctx.pending_timer_ids();
    assert_no_timer_with_prefix(&timer_ids, "analysis-");
}

#[tokio::test]
async fn restart_replaces_timers_instead_of_stacking() {
    let mut ctx = setup();
    ctx.api.push_status(ANALYSIS, processing(35.0));
    start_tracking(&mut ctx).await;
    start_tracking(&mut ctx).await;

    let timer_ids = ctx.pending_timer_ids();
    assert_eq!(timer_ids, vec!["analysis-elapsed:an-1", "analysis-poll:an-1"]);
}

#[tokio::test]
async fn analyses_own_separate_timers() {
    let mut ctx = setup();
    ctx.api.push_status(ANALYSIS, processing(35.0));
    ctx.api.push_status("an-2", Ok(analysis_job("an-2", AnalysisStatus::Processing, 10.0)));
    start_tracking(&mut ctx).await;
    ctx.process(start_event("an-2")).await;
    ctx.process_background_events().await;

    ctx.process(Event::AnalysisStop { id: AnalysisId::new("an-2") }).await;
    assert!(ctx.has_timer("analysis-poll:an-1"));
    assert!(!ctx.has_timer("analysis-poll:an-2"));
}

#[tokio::test]
async fn view_timers_end_with_their_view() {
    let mut ctx = setup();
    ctx.process(Event::ViewActivated { view: View::Metrics }).await;
    ctx.process(Event::ViewActivated { view: View::Dashboard }).await;
    ctx.process_background_events().await;
    ctx.process(Event::ViewDeactivated { view: View::Metrics }).await;
    ctx.process(Event::ViewDeactivated { view: View::Dashboard }).await;

    assert!(ctx.pending_timer_ids().is_empty());
}

#[tokio::test]
async fn completed_deploy_leaves_no_timer() {
    let mut ctx = setup_seeded().await;
    ctx.process(Event::ActionDeploy { id: ActionId::new("3") }).await;
    ctx.advance(Duration::from_secs(2)).await;

    assert!(ctx.pending_timer_ids().is_empty());
}
