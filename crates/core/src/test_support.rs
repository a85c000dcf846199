// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::action::{ActionId, ActionItem, ActionStatus, ActionType};
use crate::analysis::{AnalysisId, AnalysisJob, AnalysisStatus};
use crate::event::Event;
use crate::portfolio::{DashboardMetrics, PortfolioListing, PropertyId, PropertySummary};
use crate::report::{
    ActionPlan, AnalysisReport, CombinedImpact, ImpactForecast, ImpactPrediction,
    RecommendedAction, RootCause, RootCauseAnalysis,
};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for core state machine types.
pub mod strategies {
    use crate::action::{ActionCommand, ActionStatus};
    use proptest::prelude::*;

    pub fn arb_action_status() -> impl Strategy<Value = ActionStatus> {
        prop::sample::select(ActionStatus::ALL.to_vec())
    }

    pub fn arb_action_command() -> impl Strategy<Value = ActionCommand> {
        prop::sample::select(ActionCommand::ALL.to_vec())
    }
}

// ── Fixtures ────────────────────────────────────────────────────────────

/// The six items the action tracker starts with: two PRICING items plus
/// one MARKETING item with "Pricing" in its title.
pub fn seeded_actions() -> Vec<ActionItem> {
    vec![
        ActionItem::builder()
            .id("1")
            .title("Increase Weekend Rate for Executive Suites")
            .description(Some("Competitor rates are 18% higher for the same dates".to_string()))
            .confidence(98)
            .uplift_value(1450.0)
            .build(),
        ActionItem::builder()
            .id("2")
            .title("Close Standard Twin to OTA Channels")
            .action_type(ActionType::Inventory)
            .confidence(65)
            .uplift_value(120.0)
            .build(),
        ActionItem::builder()
            .id("3")
            .title("Flash Sale: Spa Package")
            .action_type(ActionType::Marketing)
            .status(ActionStatus::Approved)
            .confidence(85)
            .uplift_value(400.0)
            .build(),
        ActionItem::builder()
            .id("4")
            .title("Promote Dynamic Pricing Bundle to Loyalty Members")
            .action_type(ActionType::Marketing)
            .status(ActionStatus::Live)
            .confidence(90)
            .uplift_value(900.0)
            .progress(Some(100))
            .build(),
        ActionItem::builder()
            .id("5")
            .title("Email Campaign: Loyalty Early Access")
            .action_type(ActionType::Marketing)
            .status(ActionStatus::Live)
            .confidence(75)
            .uplift_value(300.0)
            .progress(Some(100))
            .build(),
        ActionItem::builder()
            .id("6")
            .title("Corporate Discount Adjustment")
            .status(ActionStatus::Measuring)
            .confidence(92)
            .uplift_value(500.0)
            .build(),
    ]
}

pub fn analysis_job(id: &str, status: AnalysisStatus, progress: f64) -> AnalysisJob {
    AnalysisJob {
        analysis_id: AnalysisId::new(id),
        property_id: "p-1".to_string(),
        status,
        progress,
        started_at: Some("2026-01-01T00:00:00Z".to_string()),
        completed_at: None,
        error_message: None,
    }
}

pub fn failed_job(id: &str, message: Option<&str>) -> AnalysisJob {
    AnalysisJob {
        error_message: message.map(str::to_string),
        ..analysis_job(id, AnalysisStatus::Failed, 40.0)
    }
}

/// A report with three actions. Predictions are listed out of action order
/// and include one orphan; `promo-3` has no prediction.
pub fn sample_report(id: &str) -> AnalysisReport {
    let action = |action_id: &str, action_type: &str, description: &str, reason: &str| {
        RecommendedAction {
            action_id: ActionId::new(action_id),
            action_type: action_type.to_string(),
            priority: 1,
            description: description.to_string(),
            reason: reason.to_string(),
            budget_estimate: "$0".to_string(),
        }
    };
    let prediction = |action_id: &str, increase: &str, confidence: &str| ImpactPrediction {
        action_id: ActionId::new(action_id),
        predicted_increase: increase.to_string(),
        confidence_level: confidence.to_string(),
        time_to_impact: Some("2 weeks".to_string()),
    };

    AnalysisReport {
        analysis_id: AnalysisId::new(id),
        property_id: "p-1".to_string(),
        property_name: "Grand Harriot Downtown".to_string(),
        current_occupancy: 42.0,
        rca: RootCauseAnalysis {
            primary_causes: vec![RootCause {
                cause: "Competitor undercut".to_string(),
                confidence: 0.82,
                impact_level: "high".to_string(),
                supporting_signals: Default::default(),
            }],
            explanation: "Weekend rates lag the comp set".to_string(),
        },
        actions: ActionPlan {
            recommended_actions: vec![
                action(
                    "rate-1",
                    "pricing_adjustment",
                    "Raise weekend suite rates",
                    "Competitors priced 18% higher",
                ),
                action("ota-2", "OTA restriction", "Close twin rooms on OTAs", "Commission drag"),
                action("promo-3", "email_campaign", "Loyalty early access", "Dormant members"),
            ],
        },
        impact: ImpactForecast {
            current_occupancy: 42.0,
            projected_occupancy: 51.0,
            combined_impact: CombinedImpact {
                most_likely_increase: "9%".to_string(),
                min_increase: "6%".to_string(),
                max_increase: "12%".to_string(),
            },
            individual_predictions: vec![
                prediction("ghost-9", "+99%", "high"),
                prediction("ota-2", "+120 bookings", "65%"),
                prediction("rate-1", "$1,450", "high"),
            ],
        },
    }
}

pub fn dashboard_metrics() -> DashboardMetrics {
    DashboardMetrics {
        avg_occupancy: 68.2,
        occupancy_change: 1.4,
        projected_uplift: 12_500.0,
        active_agents: 18,
        pending_approvals: 3,
    }
}

pub fn portfolio_listing() -> PortfolioListing {
    let property = |id: &str, name: &str, city: &str, status: &str, occupancy: f64| PropertySummary {
        id: PropertyId::new(id),
        name: name.to_string(),
        city: city.to_string(),
        status: status.to_string(),
        occupancy,
        revpar: 185.0,
        recommendations_count: 2,
    };
    PortfolioListing {
        properties: vec![
            property("p-1", "Grand Harriot Downtown", "Seattle, WA", "Critical", 42.0),
            property("p-2", "Harriot Seaside Resort", "San Diego, CA", "Healthy", 88.0),
        ],
        total_properties: 2,
        live_connection_status: "connected".to_string(),
    }
}

// ── Event factory functions ─────────────────────────────────────────────────

pub fn seed_event() -> Event {
    Event::ActionProposed { items: seeded_actions() }
}

pub fn tracking_event(id: &str, attempt: u32) -> Event {
    Event::AnalysisTracking { id: AnalysisId::new(id), attempt }
}

pub fn progressed_event(id: &str, attempt: u32, status: AnalysisStatus, progress: f64) -> Event {
    Event::AnalysisProgressed {
        id: AnalysisId::new(id),
        attempt,
        job: analysis_job(id, status, progress),
    }
}

pub fn status_received_event(id: &str, attempt: u32, status: AnalysisStatus, progress: f64) -> Event {
    Event::AnalysisStatusReceived {
        id: AnalysisId::new(id),
        attempt,
        job: analysis_job(id, status, progress),
    }
}

pub fn approved_event(id: &str, uplift: f64) -> Event {
    Event::ActionApproved { id: ActionId::new(id), uplift, at_ms: 2_000_000 }
}
