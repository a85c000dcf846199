// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use soa_core::test_support::sample_report;

fn tracking(id: &str) -> MaterializedState {
    let mut state = MaterializedState::default();
    state.apply_event(&tracking_event(id, 1));
    state
}

#[test]
fn tracking_starts_a_fresh_polling_track() {
    let state = tracking("an-1");
    let track = state.analysis("an-1").unwrap();
    assert_eq!(track.phase, TrackPhase::Polling);
    assert_eq!(track.attempt, 1);
    assert_eq!(track.stage_index, 0);
    assert_eq!(track.elapsed_display(), "0:00");
    assert!(track.job.is_none());
}

#[test]
fn progress_sequence_walks_stage_indices() {
    let mut state = tracking("an-1");
    let mut seen = Vec::new();
    for progress in [10.0, 35.0, 72.0, 100.0] {
        state.apply_event(&progressed_event("an-1", 1, AnalysisStatus::Processing, progress));
        seen.push(state.analysis("an-1").unwrap().stage_index);
    }
    assert_eq!(seen, vec![0, 1, 3, 4]);
    assert_eq!(state.analysis("an-1").unwrap().stage().id, "finalization");
}

#[test]
fn progress_never_decreases() {
    let mut state = tracking("an-1");
    state.apply_event(&progressed_event("an-1", 1, AnalysisStatus::Processing, 72.0));
    state.apply_event(&progressed_event("an-1", 1, AnalysisStatus::Processing, 35.0));
    let track = state.analysis("an-1").unwrap();
    assert_eq!(track.progress(), 72.0);
    assert_eq!(track.stage_index, 3);
}

#[test]
fn stale_attempt_is_discarded() {
    let mut state = tracking("an-1");
    state.apply_event(&tracking_event("an-1", 2));
    state.apply_event(&progressed_event("an-1", 1, AnalysisStatus::Processing, 90.0));
    let track = state.analysis("an-1").unwrap();
    assert_eq!(track.attempt, 2);
    assert!(track.job.is_none());
}

#[test]
fn older_tracking_event_does_not_reset_newer_run() {
    let mut state = tracking("an-1");
    state.apply_event(&tracking_event("an-1", 3));
    state.apply_event(&Event::AnalysisElapsed { id: AnalysisId::new("an-1"), attempt: 3, secs: 5 });
    state.apply_event(&tracking_event("an-1", 2));
    let track = state.analysis("an-1").unwrap();
    assert_eq!(track.attempt, 3);
    assert_eq!(track.elapsed_secs, 5);
}

#[test]
fn responses_after_terminal_state_are_discarded() {
    let mut state = tracking("an-1");
    state.apply_event(&Event::AnalysisFailed {
        id: AnalysisId::new("an-1"),
        attempt: 1,
        error: TrackError::JobFailed("Analysis failed".into()),
    });
    state.apply_event(&progressed_event("an-1", 1, AnalysisStatus::Processing, 50.0));

    let track = state.analysis("an-1").unwrap();
    assert_eq!(track.phase, TrackPhase::Failed);
    assert!(track.job.is_none());
}

#[yare::parameterized(
    network    = { TrackError::Network("connection refused".into()), TrackPhase::NetworkError },
    job_failed = { TrackError::JobFailed("Model timeout".into()), TrackPhase::Failed },
)]
fn failure_channel_selects_phase(error: TrackError, phase: TrackPhase) {
    let mut state = tracking("an-1");
    state.apply_event(&Event::AnalysisPollSent { id: AnalysisId::new("an-1"), attempt: 1 });
    state.apply_event(&Event::AnalysisFailed {
        id: AnalysisId::new("an-1"),
        attempt: 1,
        error: error.clone(),
    });
    let track = state.analysis("an-1").unwrap();
    assert_eq!(track.phase, phase);
    assert_eq!(track.error, Some(error));
    assert!(!track.poll_in_flight);
}

#[test]
fn completion_then_hand_off() {
    let mut state = tracking("an-1");
    let id = AnalysisId::new("an-1");
    state.apply_event(&progressed_event("an-1", 1, AnalysisStatus::Completed, 100.0));
    state.apply_event(&Event::AnalysisCompleted { id: id.clone(), attempt: 1 });
    assert_eq!(state.analysis("an-1").unwrap().phase, TrackPhase::Completing);

    state.apply_event(&Event::AnalysisHandedOff { id: id.clone(), attempt: 1 });
    assert_eq!(state.analysis("an-1").unwrap().phase, TrackPhase::Completed);

    state.apply_event(&Event::AnalysisReportLoaded {
        id: id.clone(),
        attempt: 1,
        report: sample_report("an-1"),
    });
    assert!(state.analysis("an-1").unwrap().report.is_some());
}

#[test]
fn hand_off_requires_completing_phase() {
    let mut state = tracking("an-1");
    state.apply_event(&Event::AnalysisHandedOff { id: AnalysisId::new("an-1"), attempt: 1 });
    assert_eq!(state.analysis("an-1").unwrap().phase, TrackPhase::Polling);
}

#[yare::parameterized(
    while_polling    = { false, TrackPhase::Stopped },
    while_completing = { true, TrackPhase::Stopped },
)]
fn stop_halts_active_track(completing: bool, expected: TrackPhase) {
    let mut state = tracking("an-1");
    if completing {
        state.apply_event(&Event::AnalysisCompleted { id: AnalysisId::new("an-1"), attempt: 1 });
    }
    state.apply_event(&Event::AnalysisStopped { id: AnalysisId::new("an-1") });
    assert_eq!(state.analysis("an-1").unwrap().phase, expected);
}

#[test]
fn stop_does_not_rewrite_terminal_phase() {
    let mut state = tracking("an-1");
    state.apply_event(&Event::AnalysisFailed {
        id: AnalysisId::new("an-1"),
        attempt: 1,
        error: TrackError::Network("503".into()),
    });
    state.apply_event(&Event::AnalysisStopped { id: AnalysisId::new("an-1") });
    assert_eq!(state.analysis("an-1").unwrap().phase, TrackPhase::NetworkError);
}

#[test]
fn elapsed_is_assigned_and_formatted() {
    let mut state = tracking("an-1");
    state.apply_event(&Event::AnalysisElapsed { id: AnalysisId::new("an-1"), attempt: 1, secs: 65 });
    assert_eq!(state.analysis("an-1").unwrap().elapsed_display(), "1:05");
}

#[test]
fn report_failure_is_recorded_without_touching_phase() {
    let mut state = tracking("an-1");
    let id = AnalysisId::new("an-1");
    state.apply_event(&Event::AnalysisCompleted { id: id.clone(), attempt: 1 });
    state.apply_event(&Event::AnalysisHandedOff { id: id.clone(), attempt: 1 });
    state.apply_event(&Event::AnalysisReportFailed {
        id,
        attempt: 1,
        error: "status 500".into(),
    });
    let track = state.analysis("an-1").unwrap();
    assert_eq!(track.phase, TrackPhase::Completed);
    assert_eq!(track.report_error.as_deref(), Some("status 500"));
}
