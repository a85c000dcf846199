// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action lifecycle command handling

use super::super::Runtime;
use crate::error::RuntimeError;
use soa_adapters::DashboardApi;
use soa_core::{
    transition, ActionCommand, ActionId, ActionStatus, Clock, Effect, Event, RemovalReason,
    TimerId,
};

impl<A: DashboardApi, C: Clock> Runtime<A, C> {
    /// Validate `command` against the transition table and emit the fact.
    /// Anything the table rejects is a logged no-op.
    pub(crate) async fn handle_action_command(
        &self,
        id: &ActionId,
        command: ActionCommand,
        uplift: f64,
    ) -> Result<Vec<Event>, RuntimeError> {
        let Some(status) = self.lock_state(|s| s.action(id).map(|item| item.status)) else {
            tracing::warn!(action_id = %id, %command, "unknown action, ignoring");
            return Ok(vec![]);
        };
        if transition(status, command).is_none() {
            tracing::warn!(action_id = %id, %command, %status, "invalid transition, ignoring");
            return Ok(vec![]);
        }

        let at_ms = self.executor.clock().epoch_ms();
        let effects = match command {
            ActionCommand::Approve => {
                vec![Effect::Emit { event: Event::ActionApproved { id: id.clone(), uplift, at_ms } }]
            }
            ActionCommand::Deploy => vec![
                Effect::Emit { event: Event::ActionDeployed { id: id.clone(), at_ms } },
                Effect::SetTimer { id: TimerId::deploy(id), duration: self.config.deploy_delay },
            ],
            ActionCommand::Reject => removal(id, RemovalReason::Rejected),
            ActionCommand::Archive => removal(id, RemovalReason::Archived),
        };
        tracing::info!(action_id = %id, %command, "action transition");
        Ok(self.executor.execute_all(effects).await?)
    }

    /// Deploy completion. Only an item still deploying completes.
    pub(crate) async fn handle_deploy_timer(
        &self,
        id: &ActionId,
    ) -> Result<Vec<Event>, RuntimeError> {
        let deploying = self.lock_state(|s| {
            s.action(id).is_some_and(|i| i.status == ActionStatus::Live && i.progress == Some(0))
        });
        if !deploying {
            return Ok(vec![]);
        }
        let at_ms = self.executor.clock().epoch_ms();
        let effects =
            vec![Effect::Emit { event: Event::ActionDeployCompleted { id: id.clone(), at_ms } }];
        Ok(self.executor.execute_all(effects).await?)
    }
}

/// Removing an item also ends any timer it owns.
fn removal(id: &ActionId, reason: RemovalReason) -> Vec<Effect> {
    vec![
        Effect::CancelTimer { id: TimerId::deploy(id) },
        Effect::Emit { event: Event::ActionRemoved { id: id.clone(), reason } },
    ]
}
