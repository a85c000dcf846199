// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! soa-core: Domain types for the SOA dashboard orchestration layer

pub mod macros;

pub mod action;
pub mod analysis;
pub mod board;
pub mod clock;
pub mod effect;
pub mod event;
pub mod id;
pub mod metrics;
pub mod portfolio;
pub mod report;
pub mod time_fmt;
pub mod timer;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use action::{transition, ActionCommand, ActionId, ActionItem, ActionStatus, ActionType, Outcome};
pub use analysis::{
    stage_index, AnalysisId, AnalysisJob, AnalysisStatus, PipelineStage, TrackError, TrackPhase,
    PIPELINE_STAGES,
};
pub use board::{ActionBoard, ActionFilter, TypeFilter};
pub use clock::{Clock, FakeClock, SystemClock};
pub use effect::Effect;
pub use event::{Event, RemovalReason, View};
pub use id::short;
pub use metrics::{MetricsChange, PortfolioMetrics};
pub use portfolio::{DashboardMetrics, PortfolioListing, PropertyId, PropertySummary, SyncStatus};
pub use report::{
    AnalysisReport, ImpactPrediction, Recommendation, RecommendedAction, RootCause,
    StartAnalysisRequest, StartAnalysisResponse,
};
pub use time_fmt::format_elapsed;
pub use timer::{TimerId, TimerKind};
