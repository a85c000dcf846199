// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for the engine crate.

use crate::{EngineConfig, Runtime, RuntimeDeps, ScriptedDrift};
use soa_adapters::FakeApi;
use soa_core::test_support::seed_event;
use soa_core::{Clock, Event, FakeClock};
use soa_storage::MaterializedState;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc;

/// Convenience alias for the fully-typed test runtime.
pub(crate) type TestRuntime = Runtime<FakeApi, FakeClock>;

/// Test context holding the runtime and its fakes.
pub(crate) struct TestContext {
    pub runtime: TestRuntime,
    pub clock: FakeClock,
    pub event_rx: mpsc::Receiver<Event>,
    pub api: FakeApi,
}

/// Create a test runtime with default timings and a fixed drift of
/// `+100` revenue, `+0.1` occupancy.
pub(crate) fn setup() -> TestContext {
    let api = FakeApi::new();
    let clock = FakeClock::new();
    let (event_tx, event_rx) = mpsc::channel(100);
    let runtime = Runtime::new(
        RuntimeDeps { api: api.clone(), state: Arc::new(Mutex::new(MaterializedState::default())) },
        clock.clone(),
        EngineConfig::default(),
        Box::new(ScriptedDrift::new([(100.0, 0.1)])),
        event_tx,
    );
    TestContext { runtime, clock, event_rx, api }
}

/// `setup()` with the six seeded board items already applied.
pub(crate) async fn setup_seeded() -> TestContext {
    let ctx = setup();
    ctx.runtime.process_event(seed_event()).await.unwrap();
    ctx
}

impl TestContext {
    /// Apply and handle one event, as the engine loop does.
    pub(crate) async fn process(&mut self, event: Event) {
        self.runtime.process_event(event).await.unwrap();
    }

    /// Drain fetch results posted by background tasks and process them.
    ///
    /// Loops until a yield produces no new events, since processing a
    /// result can start another fetch.
    pub(crate) async fn process_background_events(&mut self) {
        for _ in 0..16 {
            // Yield to let tokio::spawn tasks complete (FakeApi answers immediately)
            for _ in 0..4 {
                tokio::task::yield_now().await;
            }

            let mut events = Vec::new();
            while let Ok(event) = self.event_rx.try_recv() {
                events.push(event);
            }
            if events.is_empty() {
                return;
            }
            for event in events {
                let _ = self.runtime.process_event(event).await;
            }
        }
    }

    /// Advance the clock and process every timer that came due, leaving
    /// fetch results queued on the channel.
    pub(crate) async fn fire_due_timers(&mut self, duration: Duration) {
        self.clock.advance(duration);
        let fired = self.runtime.executor.scheduler().lock().fired_timers(self.clock.now());
        for event in fired {
            self.process(event).await;
        }
    }

    /// Advance the clock, fire every due timer, then settle background work.
    pub(crate) async fn advance(&mut self, duration: Duration) {
        self.fire_due_timers(duration).await;
        self.process_background_events().await;
    }

    /// Advance one second at a time, `secs` times.
    pub(crate) async fn tick(&mut self, secs: u64) {
        for _ in 0..secs {
            self.advance(Duration::from_secs(1)).await;
        }
    }

    pub(crate) fn state<T>(&self, f: impl FnOnce(&MaterializedState) -> T) -> T {
        self.runtime.lock_state(f)
    }

    /// Collect all pending timer IDs by advancing the clock and draining fired timers.
    pub(crate) fn pending_timer_ids(&self) -> Vec<String> {
        let scheduler = self.runtime.executor.scheduler();
        let mut sched = scheduler.lock();
        self.clock.advance(Duration::from_secs(7200));
        let fired = sched.fired_timers(self.clock.now());
        fired
            .into_iter()
            .filter_map(|e| match e {
                Event::TimerStart { id } => Some(id.as_str().to_string()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn has_timer(&self, id: &str) -> bool {
        self.runtime.executor.scheduler().lock().has_timer(id)
    }
}

/// Assert that no timer with the given prefix exists.
pub(crate) fn assert_no_timer_with_prefix(timer_ids: &[String], prefix: &str) {
    let matching: Vec<&String> = timer_ids.iter().filter(|id| id.starts_with(prefix)).collect();
    assert!(
        matching.is_empty(),
        "expected no timers starting with '{}', found: {:?}",
        prefix,
        matching
    );
}

/// Run `future` on a current-thread runtime. `process_background_events`
/// needs fetch tasks to run on the test's own thread.
pub(crate) fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(future)
}
