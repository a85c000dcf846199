// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared harness for engine specs.

#![allow(dead_code, unused_imports)]

pub use soa_adapters::{ApiError, FakeApi};
pub use soa_core::test_support::*;
pub use soa_core::{
    ActionFilter, ActionId, ActionStatus, AnalysisId, AnalysisStatus, PortfolioMetrics,
    PropertyId, StartAnalysisResponse, SyncStatus, SystemClock, TrackPhase, TypeFilter, View,
};
pub use soa_engine::{Engine, EngineConfig, EngineHandle, ScriptedDrift};
pub use soa_storage::MaterializedState;
pub use std::time::Duration;

use tokio::task::JoinHandle;

/// Longest any spec waits on a condition, in paused time.
const SPEC_TIMEOUT: Duration = Duration::from_secs(600);

/// A running engine on the paused tokio clock, backed by a [`FakeApi`].
pub struct Harness {
    pub handle: EngineHandle<FakeApi>,
    pub api: FakeApi,
    engine: JoinHandle<()>,
}

impl Harness {
    pub fn start(api: FakeApi) -> Self {
        Self::with_drift(api, ScriptedDrift::new([(100.0, 0.1)]))
    }

    pub fn with_drift(api: FakeApi, drift: ScriptedDrift) -> Self {
        let (engine, handle) =
            Engine::with_drift(api.clone(), SystemClock, EngineConfig::default(), Box::new(drift));
        Self { handle, api, engine: tokio::spawn(engine.run()) }
    }

    /// Harness with the six demo items already on the board.
    pub async fn seeded() -> Self {
        let harness = Self::start(FakeApi::new());
        harness.handle.seed(seeded_actions()).await.unwrap();
        harness.until("seed applied", |s| s.actions.len() == 6).await;
        harness
    }

    /// Wait (in paused time) for `predicate`, failing the spec with `what`
    /// if it never holds.
    pub async fn until(&self, what: &str, predicate: impl Fn(&MaterializedState) -> bool) {
        let waited = tokio::time::timeout(
            SPEC_TIMEOUT,
            self.handle.wait_for(Duration::from_millis(10), predicate),
        )
        .await;
        assert!(waited.is_ok(), "timed out waiting for {what}");
    }

    /// Let the engine settle: process everything queued, then let `d` pass.
    pub async fn pass(&self, d: Duration) {
        tokio::time::sleep(d).await;
    }

    pub fn phase(&self, id: &str) -> Option<TrackPhase> {
        self.handle.track(id).map(|t| t.phase)
    }

    pub async fn stop(self) {
        self.handle.shutdown().await.unwrap();
        self.engine.await.unwrap();
    }
}

pub fn processing(id: &str, progress: f64) -> Result<soa_core::AnalysisJob, ApiError> {
    Ok(analysis_job(id, AnalysisStatus::Processing, progress))
}

pub fn completed(id: &str) -> Result<soa_core::AnalysisJob, ApiError> {
    Ok(analysis_job(id, AnalysisStatus::Completed, 100.0))
}
