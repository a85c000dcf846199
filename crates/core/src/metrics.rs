// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Portfolio metrics and their reducer.
//!
//! [`PortfolioMetrics::reduce`] is the only way to derive new metrics: the
//! whole read-modify-write happens inside one call with no suspension
//! point, so an approval and a drift tick can never lose each other's
//! update regardless of the order they are applied in.

use serde::{Deserialize, Serialize};

/// Occupancy bump per unit of approved uplift.
pub const OCCUPANCY_PER_UPLIFT: f64 = 1.0 / 5000.0;

/// Shared aggregate metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    pub revenue: f64,
    /// Percentage, always within [0, 100].
    pub occupancy: f64,
    pub active_agents: u32,
    pub critical_alerts: u32,
}

impl Default for PortfolioMetrics {
    fn default() -> Self {
        Self { revenue: 142_500.0, occupancy: 72.4, active_agents: 18, critical_alerts: 4 }
    }
}

/// A write to the metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetricsChange {
    /// An action was approved with the given uplift.
    Approval { amount: f64 },
    /// Synthetic live-feed fluctuation.
    Drift { revenue_delta: f64, occupancy_delta: f64 },
}

impl PortfolioMetrics {
    /// Apply one change and return the resulting metrics.
    #[must_use]
    pub fn reduce(self, change: &MetricsChange) -> Self {
        match *change {
            MetricsChange::Approval { amount } => Self {
                revenue: self.revenue + amount,
                occupancy: clamp_occupancy(self.occupancy + amount * OCCUPANCY_PER_UPLIFT),
                active_agents: self.active_agents.saturating_add(1),
                critical_alerts: self.critical_alerts.saturating_sub(1),
            },
            MetricsChange::Drift { revenue_delta, occupancy_delta } => Self {
                revenue: self.revenue + revenue_delta,
                occupancy: clamp_occupancy(self.occupancy + occupancy_delta),
                ..self
            },
        }
    }
}

/// Clamp to [0, 100]; NaN collapses to 0.
fn clamp_occupancy(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
