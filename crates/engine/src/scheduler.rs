// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer scheduler
//!
//! One pending deadline per timer id. Setting an id that is already pending
//! replaces its deadline, so a scope can never hold two copies of the same
//! timer.

use soa_core::{Event, TimerId};
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct Scheduler {
    timers: HashMap<String, Instant>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) `id` to fire `duration` after `now`.
    pub fn set_timer(&mut self, id: String, duration: Duration, now: Instant) {
        self.timers.insert(id, now + duration);
    }

    pub fn cancel_timer(&mut self, id: &str) {
        self.timers.remove(id);
    }

    /// Remove and return every timer due at `now`, earliest first.
    pub fn fired_timers(&mut self, now: Instant) -> Vec<Event> {
        let mut due: Vec<(Instant, String)> = self
            .timers
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, id.clone()))
            .collect();
        // Ties break on id so firing order is deterministic
        due.sort();

        due.into_iter()
            .map(|(_, id)| {
                self.timers.remove(&id);
                Event::TimerStart { id: TimerId::new(id) }
            })
            .collect()
    }

    pub fn has_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    pub fn has_timer(&self, id: &str) -> bool {
        self.timers.contains_key(id)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.values().min().copied()
    }

    /// Pending timer ids, sorted.
    pub fn timer_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.timers.keys().cloned().collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
