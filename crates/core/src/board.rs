// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Derived board view: filtering and grouping of action items.
//!
//! The board is recomputed from the item collection on demand and never
//! writes back to it.

use crate::action::{ActionItem, ActionStatus, ActionType};
use serde::{Deserialize, Serialize};

/// Type filter shown above the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ActionType),
}

impl TypeFilter {
    /// Parse `ALL` or an action type tag, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("all") {
            return Some(TypeFilter::All);
        }
        ActionType::parse(raw).map(TypeFilter::Only)
    }
}

/// Type filter plus free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionFilter {
    pub type_filter: TypeFilter,
    pub search: String,
}

impl ActionFilter {
    pub fn new(type_filter: TypeFilter, search: impl Into<String>) -> Self {
        Self { type_filter, search: search.into() }
    }

    /// Keep iff the type matches and the search is a case-insensitive
    /// substring of the title or the type tag.
    pub fn matches(&self, item: &ActionItem) -> bool {
        let type_ok = match self.type_filter {
            TypeFilter::All => true,
            TypeFilter::Only(t) => item.action_type == t,
        };
        if !type_ok {
            return false;
        }
        let needle = self.search.to_lowercase();
        item.title.to_lowercase().contains(&needle)
            || item.action_type.as_str().to_lowercase().contains(&needle)
    }
}

/// Filtered items partitioned into the four status columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActionBoard {
    pub proposed: Vec<ActionItem>,
    pub approved: Vec<ActionItem>,
    pub live: Vec<ActionItem>,
    pub measuring: Vec<ActionItem>,
}

impl ActionBoard {
    pub fn build<'a>(items: impl IntoIterator<Item = &'a ActionItem>, filter: &ActionFilter) -> Self {
        let mut board = ActionBoard::default();
        for item in items.into_iter().filter(|item| filter.matches(item)) {
            board.column_mut(item.status).push(item.clone());
        }
        board
    }

    pub fn column(&self, status: ActionStatus) -> &[ActionItem] {
        match status {
            ActionStatus::Proposed => &self.proposed,
            ActionStatus::Approved => &self.approved,
            ActionStatus::Live => &self.live,
            ActionStatus::Measuring => &self.measuring,
        }
    }

    fn column_mut(&mut self, status: ActionStatus) -> &mut Vec<ActionItem> {
        match status {
            ActionStatus::Proposed => &mut self.proposed,
            ActionStatus::Approved => &mut self.approved,
            ActionStatus::Live => &mut self.live,
            ActionStatus::Measuring => &mut self.measuring,
        }
    }

    /// Total number of visible items across all columns.
    pub fn len(&self) -> usize {
        ActionStatus::ALL.iter().map(|s| self.column(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionItem> {
        ActionStatus::ALL.into_iter().flat_map(move |s| self.column(s).iter())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
