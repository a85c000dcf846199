// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Analysis tracker handling
//!
//! A tracked analysis owns three timers: the status poll, the elapsed
//! counter, and the completion hand-off. Each handler that ends a phase
//! cancels the timers that phase owned.

use super::super::Runtime;
use crate::config::ELAPSED_TICK;
use crate::error::RuntimeError;
use soa_adapters::DashboardApi;
use soa_core::{
    AnalysisId, AnalysisJob, AnalysisReport, AnalysisStatus, Clock, Effect, Event, TimerId,
    TrackError, TrackPhase,
};

/// Cancel the poll and elapsed timers.
fn stop_polling(id: &AnalysisId) -> [Effect; 2] {
    [
        Effect::CancelTimer { id: TimerId::analysis_poll(id) },
        Effect::CancelTimer { id: TimerId::analysis_elapsed(id) },
    ]
}

impl<A: DashboardApi, C: Clock> Runtime<A, C> {
    /// Start (or restart) tracking. A restart bumps the attempt so that
    /// responses still in flight for the previous run are discarded.
    pub(crate) async fn handle_analysis_start(
        &self,
        id: &AnalysisId,
    ) -> Result<Vec<Event>, RuntimeError> {
        let attempt =
            self.lock_state(|s| s.analysis(id).map(|t| t.attempt.saturating_add(1)).unwrap_or(1));
        tracing::info!(analysis_id = %id, attempt, "tracking analysis");

        let mut effects = stop_polling(id).to_vec();
        effects.extend([
            Effect::CancelTimer { id: TimerId::analysis_handoff(id) },
            Effect::Emit { event: Event::AnalysisTracking { id: id.clone(), attempt } },
            // First poll goes out immediately
            Effect::Emit { event: Event::AnalysisPollSent { id: id.clone(), attempt } },
            Effect::FetchAnalysisStatus { analysis_id: id.clone(), attempt },
            Effect::SetTimer { id: TimerId::analysis_poll(id), duration: self.config.poll_interval },
            Effect::SetTimer { id: TimerId::analysis_elapsed(id), duration: ELAPSED_TICK },
        ]);
        Ok(self.executor.execute_all(effects).await?)
    }

    pub(crate) async fn handle_analysis_stop(
        &self,
        id: &AnalysisId,
    ) -> Result<Vec<Event>, RuntimeError> {
        let mut effects = stop_polling(id).to_vec();
        effects.push(Effect::CancelTimer { id: TimerId::analysis_handoff(id) });
        effects.push(Effect::Emit { event: Event::AnalysisStopped { id: id.clone() } });
        Ok(self.executor.execute_all(effects).await?)
    }

    /// Whether `attempt` is the current run of `id` and still polling.
    fn is_polling(&self, id: &AnalysisId, attempt: u32) -> bool {
        self.lock_state(|s| {
            s.analysis(id).is_some_and(|t| t.is_current(attempt) && t.phase.is_polling())
        })
    }

    pub(crate) async fn handle_status_received(
        &self,
        id: &AnalysisId,
        attempt: u32,
        job: &AnalysisJob,
    ) -> Result<Vec<Event>, RuntimeError> {
        if !self.is_polling(id, attempt) {
            tracing::debug!(analysis_id = %id, attempt, "discarding status for inactive run");
            return Ok(vec![]);
        }

        let mut effects = vec![Effect::Emit {
            event: Event::AnalysisProgressed { id: id.clone(), attempt, job: job.clone() },
        }];
        match job.status {
            AnalysisStatus::Completed => {
                tracing::info!(analysis_id = %id, "analysis completed");
                effects.push(Effect::Emit {
                    event: Event::AnalysisCompleted { id: id.clone(), attempt },
                });
                effects.extend(stop_polling(id));
                effects.push(Effect::SetTimer {
                    id: TimerId::analysis_handoff(id),
                    duration: self.config.handoff_delay,
                });
            }
            AnalysisStatus::Failed => {
                let message = job.failure_message();
                tracing::warn!(analysis_id = %id, error = %message, "analysis failed");
                effects.push(Effect::Emit {
                    event: Event::AnalysisFailed {
                        id: id.clone(),
                        attempt,
                        error: TrackError::JobFailed(message),
                    },
                });
                effects.extend(stop_polling(id));
            }
            AnalysisStatus::Queued | AnalysisStatus::Processing => {}
        }
        Ok(self.executor.execute_all(effects).await?)
    }

    /// A failed status fetch ends the run. There is no automatic retry.
    pub(crate) async fn handle_status_failed(
        &self,
        id: &AnalysisId,
        attempt: u32,
        error: &str,
    ) -> Result<Vec<Event>, RuntimeError> {
        if !self.is_polling(id, attempt) {
            return Ok(vec![]);
        }
        tracing::warn!(analysis_id = %id, attempt, error, "status fetch failed");

        let mut effects = vec![Effect::Emit {
            event: Event::AnalysisFailed {
                id: id.clone(),
                attempt,
                error: TrackError::Network(error.to_string()),
            },
        }];
        effects.extend(stop_polling(id));
        Ok(self.executor.execute_all(effects).await?)
    }

    /// Poll tick. A tick that lands while the previous request is still out
    /// only re-arms the interval.
    pub(crate) async fn handle_poll_timer(
        &self,
        id: &AnalysisId,
    ) -> Result<Vec<Event>, RuntimeError> {
        let Some((attempt, in_flight)) = self.lock_state(|s| {
            s.analysis(id).filter(|t| t.phase.is_polling()).map(|t| (t.attempt, t.poll_in_flight))
        }) else {
            return Ok(vec![]);
        };

        let mut effects = Vec::with_capacity(3);
        if in_flight {
            tracing::debug!(analysis_id = %id, attempt, "status request in flight, skipping tick");
        } else {
            effects.push(Effect::Emit { event: Event::AnalysisPollSent { id: id.clone(), attempt } });
            effects.push(Effect::FetchAnalysisStatus { analysis_id: id.clone(), attempt });
        }
        effects.push(Effect::SetTimer {
            id: TimerId::analysis_poll(id),
            duration: self.config.poll_interval,
        });
        Ok(self.executor.execute_all(effects).await?)
    }

    pub(crate) async fn handle_elapsed_timer(
        &self,
        id: &AnalysisId,
    ) -> Result<Vec<Event>, RuntimeError> {
        let Some((attempt, secs)) = self.lock_state(|s| {
            s.analysis(id).filter(|t| t.phase.is_polling()).map(|t| (t.attempt, t.elapsed_secs))
        }) else {
            return Ok(vec![]);
        };

        let effects = vec![
            Effect::Emit {
                event: Event::AnalysisElapsed { id: id.clone(), attempt, secs: secs + 1 },
            },
            Effect::SetTimer { id: TimerId::analysis_elapsed(id), duration: ELAPSED_TICK },
        ];
        Ok(self.executor.execute_all(effects).await?)
    }

    /// Completion hand-off: fetch the report for the downstream view.
    pub(crate) async fn handle_handoff_timer(
        &self,
        id: &AnalysisId,
    ) -> Result<Vec<Event>, RuntimeError> {
        let Some(attempt) = self.lock_state(|s| {
            s.analysis(id)
                .filter(|t| t.phase == TrackPhase::Completing)
                .map(|t| t.attempt)
        }) else {
            return Ok(vec![]);
        };

        tracing::info!(analysis_id = %id, attempt, "handing off completed analysis");
        let effects = vec![
            Effect::Emit { event: Event::AnalysisHandedOff { id: id.clone(), attempt } },
            Effect::FetchAnalysisResult { analysis_id: id.clone(), attempt },
        ];
        Ok(self.executor.execute_all(effects).await?)
    }

    /// Propose the report's recommended actions on the board.
    pub(crate) async fn handle_report_loaded(
        &self,
        id: &AnalysisId,
        attempt: u32,
        report: &AnalysisReport,
    ) -> Result<Vec<Event>, RuntimeError> {
        let current = self.lock_state(|s| s.analysis(id).is_some_and(|t| t.is_current(attempt)));
        if !current {
            return Ok(vec![]);
        }

        let items = report.proposals(self.executor.clock().epoch_ms());
        if items.is_empty() {
            return Ok(vec![]);
        }
        tracing::info!(analysis_id = %id, count = items.len(), "proposing recommended actions");
        let effects = vec![Effect::Emit { event: Event::ActionProposed { items } }];
        Ok(self.executor.execute_all(effects).await?)
    }
}
