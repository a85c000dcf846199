// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime tests

mod action;
mod analysis;
mod timer_cleanup;
mod view;

use crate::test_helpers::{
    assert_no_timer_with_prefix, block_on, setup, setup_seeded, TestContext,
};
use soa_adapters::ApiError;
use soa_core::test_support::{analysis_job, failed_job, sample_report};
use soa_core::{ActionId, AnalysisId, AnalysisJob, AnalysisStatus, Event, View};
use std::time::Duration;

const ANALYSIS: &str = "an-1";

fn start_event(id: &str) -> Event {
    Event::AnalysisStart { id: AnalysisId::new(id) }
}

fn processing(progress: f64) -> Result<AnalysisJob, ApiError> {
    Ok(analysis_job(ANALYSIS, AnalysisStatus::Processing, progress))
}

fn completed() -> Result<AnalysisJob, ApiError> {
    Ok(analysis_job(ANALYSIS, AnalysisStatus::Completed, 100.0))
}

/// Start tracking `an-1` and settle the first status response.
async fn start_tracking(ctx: &mut TestContext) {
    ctx.process(start_event(ANALYSIS)).await;
    ctx.process_background_events().await;
}

fn action_event(command: &str, id: &str) -> Event {
    let id = ActionId::new(id);
    match command {
        "approve" => Event::ActionApprove { id, uplift: 1450.0 },
        "deploy" => Event::ActionDeploy { id },
        "reject" => Event::ActionReject { id },
        "archive" => Event::ActionArchive { id },
        other => panic!("unknown command {other}"),
    }
}
