// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! soa-engine: Orchestration engine for the SOA dashboard

mod config;
mod drift;
mod error;
mod executor;
mod lifecycle;
mod runtime;
mod scheduler;

#[cfg(test)]
mod test_helpers;

pub use config::{ConfigError, EngineConfig, DEFAULT_API_URL, ELAPSED_TICK};
pub use drift::{DriftSource, RandomDrift};
pub use error::{EngineError, RuntimeError};
pub use executor::{ExecuteError, Executor};
pub use lifecycle::{Engine, EngineHandle};
pub use runtime::{Runtime, RuntimeDeps};
pub use scheduler::Scheduler;

#[cfg(any(test, feature = "test-support"))]
pub use drift::ScriptedDrift;

#[cfg(test)]
#[path = "runtime_tests/mod.rs"]
mod runtime_tests;
