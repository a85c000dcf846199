// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event methods: name and log summary

use super::Event;

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Shutdown => "system:shutdown",
            Event::TimerStart { .. } => "timer:start",
            Event::AnalysisStart { .. } => "analysis:start",
            Event::AnalysisStop { .. } => "analysis:stop",
            Event::AnalysisTracking { .. } => "analysis:tracking",
            Event::AnalysisPollSent { .. } => "analysis:poll_sent",
            Event::AnalysisStatusReceived { .. } => "analysis:status_received",
            Event::AnalysisStatusFailed { .. } => "analysis:status_failed",
            Event::AnalysisProgressed { .. } => "analysis:progressed",
            Event::AnalysisCompleted { .. } => "analysis:completed",
            Event::AnalysisFailed { .. } => "analysis:failed",
            Event::AnalysisElapsed { .. } => "analysis:elapsed",
            Event::AnalysisStopped { .. } => "analysis:stopped",
            Event::AnalysisHandedOff { .. } => "analysis:handed_off",
            Event::AnalysisReportLoaded { .. } => "analysis:report_loaded",
            Event::AnalysisReportFailed { .. } => "analysis:report_failed",
            Event::ActionApprove { .. } => "action:approve",
            Event::ActionDeploy { .. } => "action:deploy",
            Event::ActionReject { .. } => "action:reject",
            Event::ActionArchive { .. } => "action:archive",
            Event::ActionProposed { .. } => "action:proposed",
            Event::ActionApproved { .. } => "action:approved",
            Event::ActionDeployed { .. } => "action:deployed",
            Event::ActionDeployCompleted { .. } => "action:deploy_completed",
            Event::ActionRemoved { .. } => "action:removed",
            Event::MetricsDrifted { .. } => "metrics:drifted",
            Event::ViewActivated { .. } => "view:activated",
            Event::ViewDeactivated { .. } => "view:deactivated",
            Event::DashboardRefresh { .. } => "dashboard:refresh",
            Event::DashboardFetchSent { .. } => "dashboard:fetch_sent",
            Event::DashboardSynced { .. } => "dashboard:synced",
            Event::DashboardSyncFailed { .. } => "dashboard:sync_failed",
        }
    }

    pub fn log_summary(&self) -> String {
        let t = self.name();
        match self {
            // -- system / timer --
            Event::Shutdown => t.to_string(),
            Event::TimerStart { id } => format!("{t} id={id}"),

            // -- analysis --
            Event::AnalysisStart { id }
            | Event::AnalysisStop { id }
            | Event::AnalysisStopped { id } => format!("{t} id={id}"),
            Event::AnalysisTracking { id, attempt }
            | Event::AnalysisPollSent { id, attempt }
            | Event::AnalysisCompleted { id, attempt }
            | Event::AnalysisHandedOff { id, attempt } => format!("{t} id={id} attempt={attempt}"),
            Event::AnalysisElapsed { id, attempt, secs } => {
                format!("{t} id={id} attempt={attempt} secs={secs}")
            }
            Event::AnalysisStatusReceived { id, attempt, job }
            | Event::AnalysisProgressed { id, attempt, job } => format!(
                "{t} id={id} attempt={attempt} status={} progress={}",
                job.status, job.progress
            ),
            Event::AnalysisStatusFailed { id, attempt, error }
            | Event::AnalysisReportFailed { id, attempt, error } => {
                format!("{t} id={id} attempt={attempt} error={error}")
            }
            Event::AnalysisFailed { id, attempt, error } => {
                format!("{t} id={id} attempt={attempt} error={error}")
            }
            Event::AnalysisReportLoaded { id, attempt, report } => format!(
                "{t} id={id} attempt={attempt} actions={}",
                report.actions.recommended_actions.len()
            ),

            // -- action --
            Event::ActionApprove { id, uplift } | Event::ActionApproved { id, uplift, .. } => {
                format!("{t} id={id} uplift={uplift}")
            }
            Event::ActionDeploy { id }
            | Event::ActionReject { id }
            | Event::ActionArchive { id }
            | Event::ActionDeployed { id, .. }
            | Event::ActionDeployCompleted { id, .. } => format!("{t} id={id}"),
            Event::ActionProposed { items } => format!("{t} count={}", items.len()),
            Event::ActionRemoved { id, reason } => format!("{t} id={id} reason={reason}"),

            // -- metrics --
            Event::MetricsDrifted { seq, revenue_delta, occupancy_delta } => format!(
                "{t} seq={seq} revenue_delta={revenue_delta:.2} occupancy_delta={occupancy_delta}"
            ),

            // -- views --
            Event::ViewActivated { view } | Event::ViewDeactivated { view } => {
                format!("{t} view={view}")
            }

            // -- dashboard --
            Event::DashboardRefresh { silent } => format!("{t} silent={silent}"),
            Event::DashboardFetchSent { seq, silent } => format!("{t} seq={seq} silent={silent}"),
            Event::DashboardSynced { seq, listing, .. } => {
                format!("{t} seq={seq} properties={}", listing.properties.len())
            }
            Event::DashboardSyncFailed { seq, silent, error } => {
                format!("{t} seq={seq} silent={silent} error={error}")
            }
        }
    }
}
