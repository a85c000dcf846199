// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recommended action items and their lifecycle transition table.
//!
//! ```text
//! Proposed --approve--> Approved --deploy--> Live
//! Proposed --reject---> (removed)
//! Measuring --archive-> (removed)
//! ```
//!
//! `Live` and `Measuring` are sibling categories: nothing moves an item
//! from one to the other.

use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Identifier of a recommended action on the board.
    pub struct ActionId;
}

/// Category of a recommended action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionType {
    Pricing,
    Inventory,
    Marketing,
}

impl ActionType {
    pub const ALL: [ActionType; 3] = [ActionType::Pricing, ActionType::Inventory, ActionType::Marketing];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::Pricing => "PRICING",
            ActionType::Inventory => "INVENTORY",
            ActionType::Marketing => "MARKETING",
        }
    }

    /// Infer the category from a free-form `action_type` string.
    pub fn infer(raw: &str) -> Self {
        let raw = raw.to_ascii_lowercase();
        if raw.contains("pric") || raw.contains("rate") {
            ActionType::Pricing
        } else if ["inventory", "channel", "ota"].iter().any(|k| raw.contains(k)) {
            ActionType::Inventory
        } else {
            ActionType::Marketing
        }
    }

    /// Parse the exact upper- or lower-case tag.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str().eq_ignore_ascii_case(tag))
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an action item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionStatus {
    Proposed,
    Approved,
    Live,
    Measuring,
}

impl ActionStatus {
    pub const ALL: [ActionStatus; 4] =
        [ActionStatus::Proposed, ActionStatus::Approved, ActionStatus::Live, ActionStatus::Measuring];
}

crate::simple_display! {
    ActionStatus {
        Proposed => "Proposed",
        Approved => "Approved",
        Live => "Live",
        Measuring => "Measuring",
    }
}

/// User commands on an action item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCommand {
    Approve,
    Deploy,
    Reject,
    Archive,
}

impl ActionCommand {
    pub const ALL: [ActionCommand; 4] =
        [ActionCommand::Approve, ActionCommand::Deploy, ActionCommand::Reject, ActionCommand::Archive];
}

crate::simple_display! {
    ActionCommand {
        Approve => "approve",
        Deploy => "deploy",
        Reject => "reject",
        Archive => "archive",
    }
}

/// Result of a valid transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    MoveTo(ActionStatus),
    Remove,
}

/// The action lifecycle table. `None` means the command is not valid from
/// `status` and must be treated as a no-op.
pub fn transition(status: ActionStatus, command: ActionCommand) -> Option<Outcome> {
    match (status, command) {
        (ActionStatus::Proposed, ActionCommand::Approve) => Some(Outcome::MoveTo(ActionStatus::Approved)),
        (ActionStatus::Approved, ActionCommand::Deploy) => Some(Outcome::MoveTo(ActionStatus::Live)),
        (ActionStatus::Proposed, ActionCommand::Reject) => Some(Outcome::Remove),
        (ActionStatus::Measuring, ActionCommand::Archive) => Some(Outcome::Remove),
        _ => None,
    }
}

/// A recommended action on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub id: ActionId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub status: ActionStatus,
    /// 0-100
    pub confidence: u8,
    pub uplift_value: f64,
    /// Present only while deploying.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    pub timestamp_ms: u64,
}

impl ActionItem {
    /// Whether the deploy completion has already landed.
    pub fn is_deployed(&self) -> bool {
        self.status == ActionStatus::Live && self.progress == Some(100)
    }
}

crate::builder! {
    pub struct ActionItemBuilder => ActionItem {
        into {
            id: ActionId = "act-1",
            title: String = "Increase Weekend Rate for Executive Suites",
        }
        set {
            description: Option<String> = None,
            action_type: ActionType = ActionType::Pricing,
            status: ActionStatus = ActionStatus::Proposed,
            confidence: u8 = 80,
            uplift_value: f64 = 1450.0,
            progress: Option<u8> = None,
            timestamp_ms: u64 = 1_000_000,
        }
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
