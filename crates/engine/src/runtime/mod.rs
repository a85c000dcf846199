// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime for the SOA orchestration engine

mod handlers;

use crate::config::EngineConfig;
use crate::drift::DriftSource;
use crate::error::RuntimeError;
use crate::executor::Executor;
use crate::scheduler::Scheduler;
use soa_adapters::DashboardApi;
use soa_core::{Clock, Event};
use soa_storage::MaterializedState;
use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;

/// Runtime adapter dependencies
pub struct RuntimeDeps<A> {
    pub api: A,
    pub state: Arc<Mutex<MaterializedState>>,
}

/// Runtime that coordinates the system
pub struct Runtime<A, C: Clock> {
    pub executor: Executor<A, C>,
    pub(crate) config: EngineConfig,
    pub(crate) drift: Mutex<Box<dyn DriftSource>>,
}

impl<A, C> Runtime<A, C>
where
    A: DashboardApi,
    C: Clock,
{
    /// Create a new runtime
    pub fn new(
        deps: RuntimeDeps<A>,
        clock: C,
        config: EngineConfig,
        drift: Box<dyn DriftSource>,
        event_tx: mpsc::Sender<Event>,
    ) -> Self {
        Self {
            executor: Executor::new(deps, Arc::new(Mutex::new(Scheduler::new())), clock, event_tx),
            config,
            drift: Mutex::new(drift),
        }
    }

    /// Apply `event` to state, then handle it and every event its handling
    /// emits.
    pub async fn process_event(&self, event: Event) -> Result<(), RuntimeError> {
        self.lock_state_mut(|state| state.apply_event(&event));

        let mut queue: VecDeque<Event> = self.handle_event(event).await?.into();
        while let Some(next) = queue.pop_front() {
            // Emitted events were applied by the executor already
            queue.extend(self.handle_event(next).await?);
        }
        Ok(())
    }

    /// Helper to lock state
    pub(crate) fn lock_state<T>(&self, f: impl FnOnce(&MaterializedState) -> T) -> T {
        let state = self.executor.state();
        let guard = state.lock();
        f(&guard)
    }

    /// Helper to lock state mutably
    pub(crate) fn lock_state_mut<T>(&self, f: impl FnOnce(&mut MaterializedState) -> T) -> T {
        let state = self.executor.state();
        let mut guard = state.lock();
        f(&mut guard)
    }
}
