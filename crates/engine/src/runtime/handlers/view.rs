// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! View mount handling: metrics drift and dashboard refresh

use super::super::Runtime;
use crate::error::RuntimeError;
use soa_adapters::DashboardApi;
use soa_core::{Clock, Effect, Event, TimerId, View};

impl<A: DashboardApi, C: Clock> Runtime<A, C> {
    pub(crate) async fn handle_view_activated(
        &self,
        view: View,
    ) -> Result<Vec<Event>, RuntimeError> {
        let effects = match view {
            View::Metrics => vec![Effect::SetTimer {
                id: TimerId::metrics_drift(),
                duration: self.config.drift_interval,
            }],
            // Eager foreground load, then silent refreshes
            View::Dashboard => {
                let mut effects = self.dashboard_fetch(false);
                effects.push(Effect::SetTimer {
                    id: TimerId::dashboard_refresh(),
                    duration: self.config.refresh_interval,
                });
                effects
            }
        };
        Ok(self.executor.execute_all(effects).await?)
    }

    pub(crate) async fn handle_view_deactivated(
        &self,
        view: View,
    ) -> Result<Vec<Event>, RuntimeError> {
        let id = match view {
            View::Metrics => TimerId::metrics_drift(),
            View::Dashboard => TimerId::dashboard_refresh(),
        };
        Ok(self.executor.execute_all(vec![Effect::CancelTimer { id }]).await?)
    }

    pub(crate) async fn handle_drift_timer(&self) -> Result<Vec<Event>, RuntimeError> {
        let Some(seq) =
            self.lock_state(|s| s.is_view_active(View::Metrics).then_some(s.drift_seq + 1))
        else {
            return Ok(vec![]);
        };

        let (revenue_delta, occupancy_delta) = self.drift.lock().next_delta();
        let effects = vec![
            Effect::Emit { event: Event::MetricsDrifted { seq, revenue_delta, occupancy_delta } },
            Effect::SetTimer { id: TimerId::metrics_drift(), duration: self.config.drift_interval },
        ];
        Ok(self.executor.execute_all(effects).await?)
    }

    pub(crate) async fn handle_refresh_timer(&self) -> Result<Vec<Event>, RuntimeError> {
        if !self.lock_state(|s| s.is_view_active(View::Dashboard)) {
            return Ok(vec![]);
        }
        let mut effects = self.dashboard_fetch(true);
        effects.push(Effect::SetTimer {
            id: TimerId::dashboard_refresh(),
            duration: self.config.refresh_interval,
        });
        Ok(self.executor.execute_all(effects).await?)
    }

    /// Manual refresh. Fetches even while unmounted; the result is dropped
    /// by state if the view is gone by the time it lands.
    pub(crate) async fn handle_dashboard_refresh(
        &self,
        silent: bool,
    ) -> Result<Vec<Event>, RuntimeError> {
        let effects = self.dashboard_fetch(silent);
        Ok(self.executor.execute_all(effects).await?)
    }

    /// Tag the next fetch with a fresh seq.
    fn dashboard_fetch(&self, silent: bool) -> Vec<Effect> {
        let seq = self.lock_state(|s| s.dashboard.requested_seq + 1);
        vec![
            Effect::Emit { event: Event::DashboardFetchSent { seq, silent } },
            Effect::FetchDashboard { seq, silent },
        ]
    }
}
