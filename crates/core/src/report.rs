// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Analysis report wire types and their conversion into board proposals.
//!
//! Recommended actions are joined to impact predictions by `action_id`.
//! A prediction whose id matches no action is ignored; an action with no
//! prediction is proposed with zero uplift and the default confidence.

use crate::action::{ActionId, ActionItem, ActionStatus, ActionType};
use crate::analysis::AnalysisId;
use crate::portfolio::PropertyId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Confidence used when a prediction is missing or unreadable.
pub const DEFAULT_CONFIDENCE: u8 = 50;

/// Body of `POST /api/analysis/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartAnalysisRequest {
    pub property_id: PropertyId,
    pub lookback_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartAnalysisResponse {
    pub analysis_id: AnalysisId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootCause {
    pub cause: String,
    /// 0.0-1.0
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub impact_level: String,
    #[serde(default)]
    pub supporting_signals: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedAction {
    pub action_id: ActionId,
    #[serde(default)]
    pub action_type: String,
    #[serde(default)]
    pub priority: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub budget_estimate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactPrediction {
    /// Foreign key into the recommended actions.
    pub action_id: ActionId,
    #[serde(default)]
    pub predicted_increase: String,
    #[serde(default)]
    pub confidence_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_impact: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootCauseAnalysis {
    #[serde(default)]
    pub primary_causes: Vec<RootCause>,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlan {
    #[serde(default)]
    pub recommended_actions: Vec<RecommendedAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedImpact {
    #[serde(default)]
    pub most_likely_increase: String,
    #[serde(default)]
    pub min_increase: String,
    #[serde(default)]
    pub max_increase: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactForecast {
    #[serde(default)]
    pub current_occupancy: f64,
    #[serde(default)]
    pub projected_occupancy: f64,
    #[serde(default)]
    pub combined_impact: CombinedImpact,
    #[serde(default)]
    pub individual_predictions: Vec<ImpactPrediction>,
}

/// Body of `GET /api/analysis/{id}/result`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: AnalysisId,
    #[serde(default)]
    pub property_id: String,
    #[serde(default)]
    pub property_name: String,
    #[serde(default)]
    pub current_occupancy: f64,
    #[serde(default)]
    pub rca: RootCauseAnalysis,
    #[serde(default)]
    pub actions: ActionPlan,
    #[serde(default)]
    pub impact: ImpactForecast,
}

/// A recommended action joined with its prediction, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub action: RecommendedAction,
    pub prediction: Option<ImpactPrediction>,
}

impl AnalysisReport {
    /// Join actions to predictions by `action_id`, in action order.
    pub fn recommendations(&self) -> Vec<Recommendation> {
        let mut by_id: HashMap<&str, &ImpactPrediction> = HashMap::new();
        for prediction in &self.impact.individual_predictions {
            // First prediction for an id wins
            by_id.entry(prediction.action_id.as_str()).or_insert(prediction);
        }
        self.actions
            .recommended_actions
            .iter()
            .map(|action| Recommendation {
                action: action.clone(),
                prediction: by_id.get(action.action_id.as_str()).map(|p| (*p).clone()),
            })
            .collect()
    }

    /// Board items proposed by this report.
    pub fn proposals(&self, timestamp_ms: u64) -> Vec<ActionItem> {
        self.recommendations().iter().map(|r| r.to_action_item(timestamp_ms)).collect()
    }
}

impl Recommendation {
    pub fn uplift_value(&self) -> f64 {
        self.prediction.as_ref().map(|p| parse_uplift(&p.predicted_increase)).unwrap_or(0.0)
    }

    pub fn confidence(&self) -> u8 {
        self.prediction
            .as_ref()
            .map(|p| parse_confidence(&p.confidence_level))
            .unwrap_or(DEFAULT_CONFIDENCE)
    }

    pub fn to_action_item(&self, timestamp_ms: u64) -> ActionItem {
        let action = &self.action;
        let title = if action.description.trim().is_empty() {
            action.action_type.replace('_', " ")
        } else {
            action.description.clone()
        };
        ActionItem {
            id: action.action_id.clone(),
            title,
            description: Some(action.reason.clone()).filter(|r| !r.trim().is_empty()),
            action_type: ActionType::infer(&action.action_type),
            status: ActionStatus::Proposed,
            confidence: self.confidence(),
            uplift_value: self.uplift_value(),
            progress: None,
            timestamp_ms,
        }
    }
}

/// First signed decimal number in `raw`, with `,` accepted as a thousands
/// separator between digits. Returns 0 when there is none.
pub fn parse_uplift(raw: &str) -> f64 {
    let chars: Vec<char> = raw.chars().collect();
    let Some(start) = chars.iter().position(|c| c.is_ascii_digit()) else {
        return 0.0;
    };
    let negative = start > 0 && chars[start - 1] == '-';

    let mut number = String::new();
    let mut seen_dot = false;
    let mut i = start;
    while i < chars.len() {
        let c = chars[i];
        let next_is_digit = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
        if c.is_ascii_digit() {
            number.push(c);
        } else if c == '.' && !seen_dot && next_is_digit {
            seen_dot = true;
            number.push(c);
        } else if c == ',' && !seen_dot && next_is_digit {
            // thousands separator
        } else {
            break;
        }
        i += 1;
    }

    let value = number.parse::<f64>().unwrap_or(0.0);
    if negative {
        -value
    } else {
        value
    }
}

/// Numeric percent (`"85%"`, `"0.85"`) or a level word. Unknown input
/// yields [`DEFAULT_CONFIDENCE`].
pub fn parse_confidence(raw: &str) -> u8 {
    let lower = raw.trim().to_ascii_lowercase();
    match lower.as_str() {
        "high" => return 90,
        "medium" => return 70,
        "low" => return 50,
        _ => {}
    }
    if !lower.chars().any(|c| c.is_ascii_digit()) {
        return DEFAULT_CONFIDENCE;
    }
    let mut value = parse_uplift(&lower);
    // "0.85" is a fraction, "85" and "85%" are percents
    if lower.contains('.') && !lower.contains('%') && value <= 1.0 {
        value *= 100.0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
