// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source of synthetic metrics drift.
//!
//! Deltas are drawn when the drift timer fires and carried in the
//! `metrics:drifted` event, so replaying events never re-rolls them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces `(revenue_delta, occupancy_delta)` pairs.
pub trait DriftSource: Send + 'static {
    fn next_delta(&mut self) -> (f64, f64);
}

/// Even odds of a rise or a dip on both metrics.
///
/// Revenue rises by `[0, 150)` or dips by `[0, 50)`; occupancy moves by
/// `+0.1` or `-0.05`.
pub struct RandomDrift {
    rng: StdRng,
}

impl RandomDrift {
    pub fn new() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomDrift {
    fn default() -> Self {
        Self::new()
    }
}

impl DriftSource for RandomDrift {
    fn next_delta(&mut self) -> (f64, f64) {
        let revenue = if self.rng.random_bool(0.5) {
            self.rng.random_range(0.0..150.0)
        } else {
            -self.rng.random_range(0.0..50.0)
        };
        let occupancy = if self.rng.random_bool(0.5) { 0.1 } else { -0.05 };
        (revenue, occupancy)
    }
}

#[cfg(any(test, feature = "test-support"))]
mod scripted {
    use super::DriftSource;
    use std::collections::VecDeque;

    /// Replays a fixed list of deltas, then repeats the last one.
    pub struct ScriptedDrift {
        deltas: VecDeque<(f64, f64)>,
        last: (f64, f64),
    }

    impl ScriptedDrift {
        pub fn new(deltas: impl IntoIterator<Item = (f64, f64)>) -> Self {
            Self { deltas: deltas.into_iter().collect(), last: (0.0, 0.0) }
        }
    }

    impl DriftSource for ScriptedDrift {
        fn next_delta(&mut self) -> (f64, f64) {
            if let Some(delta) = self.deltas.pop_front() {
                self.last = delta;
            }
            self.last
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use scripted::ScriptedDrift;

#[cfg(test)]
#[path = "drift_tests.rs"]
mod tests;
