// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Analysis tracker tests: polling, terminal states, restart, hand-off.

use super::*;
use soa_core::test_support::status_received_event;
use soa_core::{TrackError, TrackPhase};

#[tokio::test]
async fn polls_until_completion_then_hands_off_report() {
    let mut ctx = setup();
    ctx.api
        .push_status(ANALYSIS, processing(35.0))
        .push_status(ANALYSIS, processing(72.0))
        .push_status(ANALYSIS, completed())
        .push_result(ANALYSIS, Ok(sample_report(ANALYSIS)));

    start_tracking(&mut ctx).await;
    assert_eq!(ctx.state(|s| s.analysis(ANALYSIS).map(|t| t.stage_index)), Some(1));

    ctx.tick(1).await;
    assert_eq!(ctx.state(|s| s.analysis(ANALYSIS).map(|t| t.stage_index)), Some(3));

    ctx.tick(1).await;
    let track = ctx.state(|s| s.analysis(ANALYSIS).cloned()).unwrap();
    assert_eq!(track.phase, TrackPhase::Completing);
    assert_eq!(track.stage_index, 4);
    assert_eq!(ctx.api.status_calls(ANALYSIS), 3);
    assert_eq!(ctx.api.result_calls(ANALYSIS), 0);

    ctx.advance(Duration::from_secs(2)).await;
    let track = ctx.state(|s| s.analysis(ANALYSIS).cloned()).unwrap();
    assert_eq!(track.phase, TrackPhase::Completed);
    assert!(track.report.is_some());
    assert_eq!(ctx.api.result_calls(ANALYSIS), 1);

    // Recommended actions landed on the board
    let ids: Vec<String> = ctx.state(|s| s.actions.keys().map(|k| k.to_string()).collect());
    assert_eq!(ids, vec!["rate-1", "ota-2", "promo-3"]);
}

#[tokio::test]
async fn handoff_waits_for_the_full_delay() {
    let mut ctx = setup();
    ctx.api.push_status(ANALYSIS, completed()).push_result(ANALYSIS, Ok(sample_report(ANALYSIS)));

    start_tracking(&mut ctx).await;
    ctx.advance(Duration::from_millis(1999)).await;
    assert_eq!(
        ctx.state(|s| s.analysis(ANALYSIS).map(|t| t.phase)),
        Some(TrackPhase::Completing)
    );
    assert_eq!(ctx.api.result_calls(ANALYSIS), 0);

    ctx.advance(Duration::from_millis(1)).await;
    assert_eq!(ctx.state(|s| s.analysis(ANALYSIS).map(|t| t.phase)), Some(TrackPhase::Completed));
}

#[tokio::test]
async fn job_failure_stops_polling() {
    let mut ctx = setup();
    ctx.api.push_status(ANALYSIS, Ok(failed_job(ANALYSIS, Some("Model crashed"))));

    start_tracking(&mut ctx).await;
    let track = ctx.state(|s| s.analysis(ANALYSIS).cloned()).unwrap();
    assert_eq!(track.phase, TrackPhase::Failed);
    assert_eq!(track.error, Some(TrackError::JobFailed("Model crashed".to_string())));

    ctx.tick(5).await;
    assert_eq!(ctx.api.status_calls(ANALYSIS), 1);
}

#[tokio::test]
async fn job_failure_without_message_uses_default() {
    let mut ctx = setup();
    ctx.api.push_status(ANALYSIS, Ok(failed_job(ANALYSIS, None)));

    start_tracking(&mut ctx).await;
    assert_eq!(
        ctx.state(|s| s.analysis(ANALYSIS).and_then(|t| t.error.clone())),
        Some(TrackError::JobFailed("Analysis failed".to_string()))
    );
}

#[tokio::test]
async fn network_error_is_terminal_without_retry() {
    let mut ctx = setup();
    ctx.api
        .push_status(ANALYSIS, processing(20.0))
        .push_status(ANALYSIS, Err(ApiError::Transport("connection refused".into())))
        .push_status(ANALYSIS, processing(50.0));

    start_tracking(&mut ctx).await;
    ctx.tick(1).await;

    let track = ctx.state(|s| s.analysis(ANALYSIS).cloned()).unwrap();
    assert_eq!(track.phase, TrackPhase::NetworkError);
    assert!(matches!(track.error, Some(TrackError::Network(ref msg)) if msg.contains("connection refused")));
    // Progress from before the failure is kept
    assert_eq!(track.progress(), 20.0);

    ctx.tick(3).await;
    assert_eq!(ctx.api.status_calls(ANALYSIS), 2);
}

#[tokio::test]
async fn tick_during_inflight_request_skips_fetch() {
    let mut ctx = setup();
    ctx.api.push_status(ANALYSIS, processing(20.0));

    ctx.process(start_event(ANALYSIS)).await;
    // First response still queued when the next tick lands
    ctx.fire_due_timers(Duration::from_secs(1)).await;
    ctx.process_background_events().await;
    assert_eq!(ctx.api.status_calls(ANALYSIS), 1);
    assert!(ctx.has_timer("analysis-poll:an-1"));

    ctx.tick(1).await;
    assert_eq!(ctx.api.status_calls(ANALYSIS), 2);
}

#[tokio::test]
async fn restart_discards_responses_for_previous_attempt() {
    let mut ctx = setup();
    ctx.api.push_status(ANALYSIS, processing(35.0));

    start_tracking(&mut ctx).await;
    ctx.tick(3).await;
    ctx.process(start_event(ANALYSIS)).await;

    let track = ctx.state(|s| s.analysis(ANALYSIS).cloned()).unwrap();
    assert_eq!(track.attempt, 2);
    assert_eq!(track.elapsed_secs, 0);

    // A late completion for attempt 1 must not end attempt 2
    ctx.process(status_received_event(ANALYSIS, 1, AnalysisStatus::Completed, 100.0)).await;
    ctx.process_background_events().await;

    let track = ctx.state(|s| s.analysis(ANALYSIS).cloned()).unwrap();
    assert_eq!(track.phase, TrackPhase::Polling);
    assert_eq!(track.attempt, 2);
    assert!(!ctx.has_timer("analysis-handoff:an-1"));
}

#[tokio::test]
async fn restart_after_failure_resumes_polling() {
    let mut ctx = setup();
    ctx.api
        .push_status(ANALYSIS, Err(ApiError::Transport("connection reset".into())))
        .push_status(ANALYSIS, processing(45.0));

    start_tracking(&mut ctx).await;
    assert_eq!(
        ctx.state(|s| s.analysis(ANALYSIS).map(|t| t.phase)),
        Some(TrackPhase::NetworkError)
    );

    start_tracking(&mut ctx).await;
    let track = ctx.state(|s| s.analysis(ANALYSIS).cloned()).unwrap();
    assert_eq!(track.phase, TrackPhase::Polling);
    assert_eq!(track.error, None);
    assert_eq!(track.progress(), 45.0);
}

#[tokio::test]
async fn stop_ends_polling_and_counter() {
    let mut ctx = setup();
    ctx.api.push_status(ANALYSIS, processing(35.0));

    start_tracking(&mut ctx).await;
    ctx.tick(2).await;
    ctx.process(Event::AnalysisStop { id: AnalysisId::new(ANALYSIS) }).await;

    let calls = ctx.api.status_calls(ANALYSIS);
    ctx.tick(4).await;

    let track = ctx.state(|s| s.analysis(ANALYSIS).cloned()).unwrap();
    assert_eq!(track.phase, TrackPhase::Stopped);
    assert_eq!(track.elapsed_secs, 2);
    assert_eq!(ctx.api.status_calls(ANALYSIS), calls);
}

#[tokio::test]
async fn elapsed_counter_ticks_once_per_second() {
    let mut ctx = setup();
    ctx.api.push_status(ANALYSIS, processing(35.0));

    start_tracking(&mut ctx).await;
    ctx.tick(65).await;

    let display = ctx.state(|s| s.analysis(ANALYSIS).map(|t| t.elapsed_display()));
    assert_eq!(display.as_deref(), Some("1:05"));
}

#[tokio::test]
async fn report_fetch_failure_is_recorded_on_track() {
    let mut ctx = setup();
    ctx.api.push_status(ANALYSIS, completed());

    start_tracking(&mut ctx).await;
    ctx.advance(Duration::from_secs(2)).await;

    let track = ctx.state(|s| s.analysis(ANALYSIS).cloned()).unwrap();
    assert_eq!(track.phase, TrackPhase::Completed);
    assert!(track.report.is_none());
    assert!(track.report_error.is_some());
}

#[tokio::test]
async fn report_proposals_leave_existing_items_alone() {
    let mut ctx = setup_seeded().await;
    let mut report = sample_report(ANALYSIS);
    // Same id as a seeded item that is already live
    report.actions.recommended_actions[0].action_id = ActionId::new("4");
    ctx.api.push_status(ANALYSIS, completed()).push_result(ANALYSIS, Ok(report));

    start_tracking(&mut ctx).await;
    ctx.advance(Duration::from_secs(2)).await;

    let (count, status) = ctx.state(|s| (s.actions.len(), s.action("4").map(|i| i.status)));
    assert_eq!(count, 8);
    assert_eq!(status, Some(soa_core::ActionStatus::Live));
}
