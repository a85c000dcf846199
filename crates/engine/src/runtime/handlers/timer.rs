// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer event handling

use super::super::Runtime;
use crate::error::RuntimeError;
use soa_adapters::DashboardApi;
use soa_core::{Clock, Event, TimerId, TimerKind};

impl<A: DashboardApi, C: Clock> Runtime<A, C> {
    /// Route timer events to the appropriate handler
    pub(crate) async fn handle_timer(&self, id: &TimerId) -> Result<Vec<Event>, RuntimeError> {
        match id.kind() {
            Some(TimerKind::AnalysisPoll(analysis_id)) => self.handle_poll_timer(&analysis_id).await,
            Some(TimerKind::AnalysisElapsed(analysis_id)) => {
                self.handle_elapsed_timer(&analysis_id).await
            }
            Some(TimerKind::AnalysisHandoff(analysis_id)) => {
                self.handle_handoff_timer(&analysis_id).await
            }
            Some(TimerKind::DeployComplete(action_id)) => self.handle_deploy_timer(&action_id).await,
            Some(TimerKind::MetricsDrift) => self.handle_drift_timer().await,
            Some(TimerKind::DashboardRefresh) => self.handle_refresh_timer().await,
            None => {
                tracing::warn!(timer_id = %id, "unrecognized timer");
                Ok(vec![])
            }
        }
    }
}
