// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event handling for the runtime

mod action;
mod analysis;
mod timer;
mod view;

use super::Runtime;
use crate::error::RuntimeError;
use soa_adapters::DashboardApi;
use soa_core::{ActionCommand, Clock, Event};

impl<A: DashboardApi, C: Clock> Runtime<A, C> {
    /// Handle an incoming event and return any produced events
    pub async fn handle_event(&self, event: Event) -> Result<Vec<Event>, RuntimeError> {
        let mut result_events = Vec::new();

        match &event {
            // -- analysis tracker --
            Event::AnalysisStart { id } => {
                result_events.extend(self.handle_analysis_start(id).await?);
            }

            Event::AnalysisStop { id } => {
                result_events.extend(self.handle_analysis_stop(id).await?);
            }

            Event::AnalysisStatusReceived { id, attempt, job } => {
                result_events.extend(self.handle_status_received(id, *attempt, job).await?);
            }

            Event::AnalysisStatusFailed { id, attempt, error } => {
                result_events.extend(self.handle_status_failed(id, *attempt, error).await?);
            }

            Event::AnalysisReportLoaded { id, attempt, report } => {
                result_events.extend(self.handle_report_loaded(id, *attempt, report).await?);
            }

            // -- action lifecycle --
            Event::ActionApprove { id, uplift } => {
                result_events
                    .extend(self.handle_action_command(id, ActionCommand::Approve, *uplift).await?);
            }

            Event::ActionDeploy { id } => {
                result_events
                    .extend(self.handle_action_command(id, ActionCommand::Deploy, 0.0).await?);
            }

            Event::ActionReject { id } => {
                result_events
                    .extend(self.handle_action_command(id, ActionCommand::Reject, 0.0).await?);
            }

            Event::ActionArchive { id } => {
                result_events
                    .extend(self.handle_action_command(id, ActionCommand::Archive, 0.0).await?);
            }

            // -- views --
            Event::ViewActivated { view } => {
                result_events.extend(self.handle_view_activated(*view).await?);
            }

            Event::ViewDeactivated { view } => {
                result_events.extend(self.handle_view_deactivated(*view).await?);
            }

            Event::DashboardRefresh { silent } => {
                result_events.extend(self.handle_dashboard_refresh(*silent).await?);
            }

            Event::TimerStart { id } => {
                result_events.extend(self.handle_timer(id).await?);
            }

            // Facts are reduced in state; nothing further to do
            Event::Shutdown
            | Event::AnalysisTracking { .. }
            | Event::AnalysisPollSent { .. }
            | Event::AnalysisProgressed { .. }
            | Event::AnalysisCompleted { .. }
            | Event::AnalysisFailed { .. }
            | Event::AnalysisElapsed { .. }
            | Event::AnalysisStopped { .. }
            | Event::AnalysisHandedOff { .. }
            | Event::AnalysisReportFailed { .. }
            | Event::ActionProposed { .. }
            | Event::ActionApproved { .. }
            | Event::ActionDeployed { .. }
            | Event::ActionDeployCompleted { .. }
            | Event::ActionRemoved { .. }
            | Event::MetricsDrifted { .. }
            | Event::DashboardFetchSent { .. }
            | Event::DashboardSynced { .. }
            | Event::DashboardSyncFailed { .. } => {}
        }

        Ok(result_events)
    }
}
