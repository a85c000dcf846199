// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Analysis tracker handlers.
//!
//! Every fact except `analysis:tracking` and `analysis:stopped` carries the
//! run it belongs to and is dropped when that run is no longer current.

use soa_core::{stage_index, Event, TrackError, TrackPhase};

use super::{AnalysisTrack, MaterializedState};

pub(crate) fn apply(state: &mut MaterializedState, event: &Event) {
    match event {
        Event::AnalysisTracking { id, attempt } => {
            let fresh = state.analyses.get(id).map(|t| t.attempt < *attempt).unwrap_or(true);
            if fresh {
                state.analyses.insert(id.clone(), AnalysisTrack::new(id.clone(), *attempt));
            }
        }

        Event::AnalysisPollSent { id, attempt } => {
            if let Some(track) = polling_track(state, id, *attempt) {
                track.poll_in_flight = true;
            }
        }

        Event::AnalysisProgressed { id, attempt, job } => {
            let Some(track) = polling_track(state, id, *attempt) else { return };
            let mut job = job.clone();
            // Progress never moves backwards within a run
            job.progress = job.progress.clamp(0.0, 100.0).max(track.progress());
            track.stage_index = stage_index(job.progress);
            track.job = Some(job);
            track.poll_in_flight = false;
        }

        Event::AnalysisCompleted { id, attempt } => {
            if let Some(track) = polling_track(state, id, *attempt) {
                track.phase = TrackPhase::Completing;
                track.poll_in_flight = false;
            }
        }

        Event::AnalysisFailed { id, attempt, error } => {
            let Some(track) = polling_track(state, id, *attempt) else { return };
            track.phase = match error {
                TrackError::Network(_) => TrackPhase::NetworkError,
                TrackError::JobFailed(_) => TrackPhase::Failed,
            };
            track.error = Some(error.clone());
            track.poll_in_flight = false;
        }

        Event::AnalysisElapsed { id, attempt, secs } => {
            if let Some(track) = polling_track(state, id, *attempt) {
                track.elapsed_secs = *secs;
            }
        }

        Event::AnalysisStopped { id } => {
            let Some(track) = state.analyses.get_mut(id) else { return };
            if matches!(track.phase, TrackPhase::Polling | TrackPhase::Completing) {
                track.phase = TrackPhase::Stopped;
                track.poll_in_flight = false;
            }
        }

        Event::AnalysisHandedOff { id, attempt } => {
            let Some(track) = current_track(state, id, *attempt) else { return };
            if track.phase == TrackPhase::Completing {
                track.phase = TrackPhase::Completed;
            }
        }

        Event::AnalysisReportLoaded { id, attempt, report } => {
            if let Some(track) = current_track(state, id, *attempt) {
                track.report = Some(report.clone());
                track.report_error = None;
            }
        }

        Event::AnalysisReportFailed { id, attempt, error } => {
            if let Some(track) = current_track(state, id, *attempt) {
                track.report_error = Some(error.clone());
            }
        }

        _ => {}
    }
}

fn current_track<'a>(
    state: &'a mut MaterializedState,
    id: &str,
    attempt: u32,
) -> Option<&'a mut AnalysisTrack> {
    let track = state.analyses.get_mut(id)?;
    if !track.is_current(attempt) {
        tracing::debug!(analysis_id = id, attempt, current = track.attempt, "stale analysis event");
        return None;
    }
    Some(track)
}

fn polling_track<'a>(
    state: &'a mut MaterializedState,
    id: &str,
    attempt: u32,
) -> Option<&'a mut AnalysisTrack> {
    current_track(state, id, attempt).filter(|t| t.phase.is_polling())
}
