// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effect executor

use crate::{scheduler::Scheduler, RuntimeDeps};
use soa_adapters::DashboardApi;
use soa_core::{Clock, Effect, Event};
use soa_storage::MaterializedState;
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during effect execution
#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error("event channel closed, cannot deliver {0} result")]
    ChannelClosed(&'static str),
}

/// Executes effects using the configured adapters
pub struct Executor<A, C: Clock> {
    pub(crate) api: A,
    state: Arc<Mutex<MaterializedState>>,
    scheduler: Arc<Mutex<Scheduler>>,
    clock: C,
    /// Channel that fetch tasks post their results on
    event_tx: mpsc::Sender<Event>,
}

impl<A, C> Executor<A, C>
where
    A: DashboardApi,
    C: Clock,
{
    /// Create a new executor
    pub fn new(
        deps: RuntimeDeps<A>,
        scheduler: Arc<Mutex<Scheduler>>,
        clock: C,
        event_tx: mpsc::Sender<Event>,
    ) -> Self {
        Self { api: deps.api, state: deps.state, scheduler, clock, event_tx }
    }

    /// Get a reference to the clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Execute a single effect with tracing
    ///
    /// Returns an optional event that should be fed back into the event loop.
    pub async fn execute(&self, effect: Effect) -> Result<Option<Event>, ExecuteError> {
        // Format the fields as `key=val`
        let info = effect
            .fields()
            .into_iter()
            .map(|(key, val)| format!("{key}={val}"))
            .collect::<Vec<_>>()
            .join(" ");

        let op = effect.name();
        let verbose = effect.verbose();
        if verbose {
            tracing::info!("executing effect={} {}", op, info);
        }

        let start = std::time::Instant::now();
        let result = self.execute_inner(effect).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        if verbose {
            match &result {
                Ok(event) => tracing::info!(event = event.is_some(), elapsed_ms, "completed"),
                Err(e) => tracing::error!(error = %e, elapsed_ms, "failed"),
            }
        } else {
            match &result {
                Ok(event) => tracing::debug!(
                    event = event.is_some(),
                    elapsed_ms,
                    "executed effect={} {}",
                    op,
                    info
                ),
                Err(e) => tracing::error!(error = %e, elapsed_ms, "error effect={} {}", op, info),
            }
        }

        result
    }

    /// Inner execution logic for a single effect
    async fn execute_inner(&self, effect: Effect) -> Result<Option<Event>, ExecuteError> {
        match effect {
            // === Event emission ===
            Effect::Emit { event } => {
                // Apply state change immediately so the next handler sees it
                self.state.lock().apply_event(&event);
                Ok(Some(event))
            }

            // === Timer effects ===
            Effect::SetTimer { id, duration } => {
                let now = self.clock.now();
                self.scheduler.lock().set_timer(id.to_string(), duration, now);
                Ok(None)
            }
            Effect::CancelTimer { id } => {
                self.scheduler.lock().cancel_timer(id.as_str());
                Ok(None)
            }

            // === Fetch effects ===
            Effect::FetchAnalysisStatus { analysis_id, attempt } => {
                let event_tx = self.live_sender("status")?;
                let api = self.api.clone();
                tokio::spawn(async move {
                    let event = match api.analysis_status(&analysis_id).await {
                        Ok(job) => Event::AnalysisStatusReceived { id: analysis_id, attempt, job },
                        Err(e) => Event::AnalysisStatusFailed {
                            id: analysis_id,
                            attempt,
                            error: e.to_string(),
                        },
                    };
                    deliver(&event_tx, event).await;
                });
                Ok(None)
            }

            Effect::FetchAnalysisResult { analysis_id, attempt } => {
                let event_tx = self.live_sender("result")?;
                let api = self.api.clone();
                tokio::spawn(async move {
                    let event = match api.analysis_result(&analysis_id).await {
                        Ok(report) => Event::AnalysisReportLoaded { id: analysis_id, attempt, report },
                        Err(e) => {
                            tracing::warn!(%analysis_id, error = %e, "analysis result fetch failed");
                            Event::AnalysisReportFailed {
                                id: analysis_id,
                                attempt,
                                error: e.to_string(),
                            }
                        }
                    };
                    deliver(&event_tx, event).await;
                });
                Ok(None)
            }

            Effect::FetchDashboard { seq, silent } => {
                let event_tx = self.live_sender("dashboard")?;
                let api = self.api.clone();
                let clock = self.clock.clone();
                tokio::spawn(async move {
                    // Both slices or neither
                    let (metrics, listing) = tokio::join!(api.dashboard_metrics(), api.portfolio());
                    let event = match (metrics, listing) {
                        (Ok(metrics), Ok(listing)) => {
                            Event::DashboardSynced { seq, metrics, listing, at_ms: clock.epoch_ms() }
                        }
                        (Err(e), _) | (_, Err(e)) => {
                            if silent {
                                tracing::debug!(error = %e, "silent dashboard refresh failed");
                            } else {
                                tracing::warn!(error = %e, "dashboard fetch failed");
                            }
                            Event::DashboardSyncFailed { seq, silent, error: e.to_string() }
                        }
                    };
                    deliver(&event_tx, event).await;
                });
                Ok(None)
            }
        }
    }

    /// Execute multiple effects in order
    ///
    /// Returns any events that were produced by effects (to be fed back into the event loop).
    pub async fn execute_all(&self, effects: Vec<Effect>) -> Result<Vec<Event>, ExecuteError> {
        let mut result_events = Vec::new();
        for effect in effects {
            if let Some(event) = self.execute(effect).await? {
                result_events.push(event);
            }
        }
        Ok(result_events)
    }

    /// Get a reference to the state
    pub fn state(&self) -> Arc<Mutex<MaterializedState>> {
        Arc::clone(&self.state)
    }

    /// Get a reference to the scheduler
    pub fn scheduler(&self) -> Arc<Mutex<Scheduler>> {
        Arc::clone(&self.scheduler)
    }

    fn live_sender(&self, what: &'static str) -> Result<mpsc::Sender<Event>, ExecuteError> {
        if self.event_tx.is_closed() {
            return Err(ExecuteError::ChannelClosed(what));
        }
        Ok(self.event_tx.clone())
    }
}

async fn deliver(event_tx: &mpsc::Sender<Event>, event: Event) {
    let name = event.name();
    if event_tx.send(event).await.is_err() {
        // Engine already stopped
        tracing::debug!(event = name, "dropping fetch result");
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
