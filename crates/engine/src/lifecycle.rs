// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine event loop and the command surface handed to callers.
//!
//! All events go through one loop, one at a time. Fetches run as
//! background tasks and post their results back onto the same channel, so
//! the only suspension points are at fetch boundaries.

use crate::config::EngineConfig;
use crate::drift::{DriftSource, RandomDrift};
use crate::error::EngineError;
use crate::runtime::{Runtime, RuntimeDeps};
use soa_adapters::{DashboardApi, PropertyInsight};
use soa_core::{
    ActionBoard, ActionFilter, ActionId, ActionItem, AnalysisId, AnalysisReport, Clock, Event,
    PortfolioMetrics, PropertyId, StartAnalysisRequest, View,
};
use soa_storage::{AnalysisTrack, DashboardSnapshot, MaterializedState};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc;

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// The event loop. Drive it with [`Engine::run`].
pub struct Engine<A, C: Clock> {
    runtime: Runtime<A, C>,
    event_rx: mpsc::Receiver<Event>,
}

impl<A: DashboardApi, C: Clock> Engine<A, C> {
    /// Create an engine with random metrics drift.
    pub fn new(api: A, clock: C, config: EngineConfig) -> (Self, EngineHandle<A>) {
        Self::with_drift(api, clock, config, Box::new(RandomDrift::new()))
    }

    pub fn with_drift(
        api: A,
        clock: C,
        config: EngineConfig,
        drift: Box<dyn DriftSource>,
    ) -> (Self, EngineHandle<A>) {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let state = Arc::new(Mutex::new(MaterializedState::default()));
        let runtime = Runtime::new(
            RuntimeDeps { api: api.clone(), state: Arc::clone(&state) },
            clock,
            config,
            drift,
            event_tx.clone(),
        );
        let handle = EngineHandle { event_tx, state, api };
        (Self { runtime, event_rx }, handle)
    }

    /// Process events and fire timers until a shutdown event arrives.
    pub async fn run(mut self) {
        tracing::info!("engine started");
        loop {
            let deadline = self.runtime.executor.scheduler().lock().next_deadline();
            let timer = async {
                match deadline {
                    Some(at) => tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await,
                    None => std::future::pending().await,
                }
            };

            let events = tokio::select! {
                event = self.event_rx.recv() => match event {
                    Some(Event::Shutdown) | None => break,
                    Some(event) => vec![event],
                },
                () = timer => {
                    let now = self.runtime.executor.clock().now();
                    self.runtime.executor.scheduler().lock().fired_timers(now)
                }
            };

            for event in events {
                let name = event.name();
                tracing::debug!(event = %event.log_summary(), "processing");
                // A failure in one handler must not stop the loop
                if let Err(e) = self.runtime.process_event(event).await {
                    tracing::error!(event = name, error = %e, "event handling failed");
                }
            }
        }
        tracing::info!("engine stopped");
    }
}

/// Cloneable command and query surface for a running [`Engine`].
#[derive(Clone)]
pub struct EngineHandle<A> {
    event_tx: mpsc::Sender<Event>,
    state: Arc<Mutex<MaterializedState>>,
    api: A,
}

impl<A: DashboardApi> EngineHandle<A> {
    async fn send(&self, event: Event) -> Result<(), EngineError> {
        self.event_tx.send(event).await.map_err(|_| EngineError::Stopped)
    }

    // -- analysis tracker --

    /// Ask the backend to start an analysis, then track it. A failed
    /// request is returned to the caller and nothing is tracked.
    pub async fn submit(
        &self,
        property_id: PropertyId,
        lookback_days: u32,
    ) -> Result<AnalysisId, EngineError> {
        let request = StartAnalysisRequest { property_id, lookback_days };
        let response = self.api.start_analysis(&request).await?;
        tracing::info!(
            analysis_id = %response.analysis_id,
            property_id = %request.property_id,
            "analysis submitted"
        );
        self.start(response.analysis_id.clone()).await?;
        Ok(response.analysis_id)
    }

    pub async fn start(&self, id: AnalysisId) -> Result<(), EngineError> {
        self.send(Event::AnalysisStart { id }).await
    }

    pub async fn stop(&self, id: AnalysisId) -> Result<(), EngineError> {
        self.send(Event::AnalysisStop { id }).await
    }

    // -- action lifecycle --

    /// Put items on the board. Ids already present are left alone.
    pub async fn seed(&self, items: Vec<ActionItem>) -> Result<(), EngineError> {
        self.send(Event::ActionProposed { items }).await
    }

    pub async fn approve(&self, id: ActionId, uplift: f64) -> Result<(), EngineError> {
        self.send(Event::ActionApprove { id, uplift }).await
    }

    pub async fn deploy(&self, id: ActionId) -> Result<(), EngineError> {
        self.send(Event::ActionDeploy { id }).await
    }

    pub async fn reject(&self, id: ActionId) -> Result<(), EngineError> {
        self.send(Event::ActionReject { id }).await
    }

    pub async fn archive(&self, id: ActionId) -> Result<(), EngineError> {
        self.send(Event::ActionArchive { id }).await
    }

    // -- views --

    pub async fn activate(&self, view: View) -> Result<(), EngineError> {
        self.send(Event::ViewActivated { view }).await
    }

    pub async fn deactivate(&self, view: View) -> Result<(), EngineError> {
        self.send(Event::ViewDeactivated { view }).await
    }

    /// Foreground dashboard refresh.
    pub async fn refresh(&self) -> Result<(), EngineError> {
        self.send(Event::DashboardRefresh { silent: false }).await
    }

    pub async fn shutdown(&self) -> Result<(), EngineError> {
        self.send(Event::Shutdown).await
    }

    /// Property detail dataset, passed straight through from the API.
    pub async fn property_insight(
        &self,
        property: &PropertyId,
        insight: PropertyInsight,
    ) -> Result<serde_json::Value, EngineError> {
        Ok(self.api.property_insight(property, insight).await?)
    }

    /// Fetch a finished analysis' report without tracking it.
    pub async fn fetch_report(&self, id: &AnalysisId) -> Result<AnalysisReport, EngineError> {
        Ok(self.api.analysis_result(id).await?)
    }

    // -- queries --

    pub fn with_state<T>(&self, f: impl FnOnce(&MaterializedState) -> T) -> T {
        f(&self.state.lock())
    }

    pub fn board(&self, filter: &ActionFilter) -> ActionBoard {
        self.with_state(|s| s.action_board(filter))
    }

    pub fn action(&self, id: &str) -> Option<ActionItem> {
        self.with_state(|s| s.action(id).cloned())
    }

    pub fn metrics(&self) -> PortfolioMetrics {
        self.with_state(|s| s.metrics)
    }

    pub fn track(&self, id: &str) -> Option<AnalysisTrack> {
        self.with_state(|s| s.analysis(id).cloned())
    }

    pub fn dashboard(&self) -> DashboardSnapshot {
        self.with_state(|s| s.dashboard.clone())
    }

    /// Wait until `predicate` holds on state, checking after every
    /// `interval` of tokio time.
    pub async fn wait_for(
        &self,
        interval: Duration,
        predicate: impl Fn(&MaterializedState) -> bool,
    ) {
        while !self.with_state(&predicate) {
            tokio::time::sleep(interval).await;
        }
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
