// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text rendering of engine read models. Color is applied by the
//! commands, not here.

use clap::ValueEnum;
use serde::Serialize;
use soa_core::{ActionBoard, ActionItem, AnalysisReport, PIPELINE_STAGES};
use soa_storage::{AnalysisTrack, DashboardSnapshot};
use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Whole dollars with thousands separators: `$142,500`, `-$80`.
pub fn format_money(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// `[0:35] 2/5 Root Cause Analysis  35%`
pub fn format_progress(track: &AnalysisTrack) -> String {
    let stage = track.stage();
    format!(
        "[{}] {}/{} {}  {:.0}%",
        track.elapsed_display(),
        track.stage_index + 1,
        PIPELINE_STAGES.len(),
        stage.name,
        track.progress()
    )
}

fn format_item(out: &mut String, item: &ActionItem) {
    let _ = write!(
        out,
        "  [{}] {}  {} {}% +{}",
        item.id,
        item.title,
        item.action_type,
        item.confidence,
        format_money(item.uplift_value)
    );
    match item.progress {
        Some(100) => out.push_str("  deployed"),
        Some(_) => out.push_str("  deploying"),
        None => {}
    }
    out.push('\n');
}

/// The four board columns, each headed by its name and count. Empty
/// columns are listed with a `-` placeholder.
pub fn format_board(board: &ActionBoard) -> String {
    let mut out = String::new();
    let columns = [
        ("Proposed", &board.proposed),
        ("Approved", &board.approved),
        ("Live", &board.live),
        ("Measuring", &board.measuring),
    ];
    for (name, items) in columns {
        let _ = writeln!(out, "{} ({})", name, items.len());
        if items.is_empty() {
            out.push_str("  -\n");
        }
        for item in items {
            format_item(&mut out, item);
        }
    }
    out
}

pub fn format_dashboard(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Status: {}", snapshot.status);
    if let Some(error) = &snapshot.error {
        let _ = writeln!(out, "Error: {error}");
    }
    if let Some(metrics) = &snapshot.metrics {
        let _ = writeln!(
            out,
            "Occupancy {:.1}% ({:+.1})  Uplift {}  Agents {}  Pending {}",
            metrics.avg_occupancy,
            metrics.occupancy_change,
            format_money(metrics.projected_uplift),
            metrics.active_agents,
            metrics.pending_approvals
        );
    }
    if let Some(listing) = &snapshot.listing {
        let _ = writeln!(out, "Properties ({})", listing.total_properties);
        for p in &listing.properties {
            let _ = writeln!(
                out,
                "  {:<28} {:<18} {:<9} {:>5.1}%  RevPAR {}  recs {}",
                p.name,
                p.city,
                p.status,
                p.occupancy,
                format_money(p.revpar),
                p.recommendations_count
            );
        }
    }
    out
}

pub fn format_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: occupancy {:.1}% -> {:.1}% (likely {})",
        report.property_name,
        report.impact.current_occupancy,
        report.impact.projected_occupancy,
        report.impact.combined_impact.most_likely_increase
    );
    for cause in &report.rca.primary_causes {
        let _ = writeln!(
            out,
            "  cause: {} ({:.0}%, {})",
            cause.cause,
            cause.confidence * 100.0,
            cause.impact_level
        );
    }
    for rec in report.recommendations() {
        let increase =
            rec.prediction.as_ref().map(|p| p.predicted_increase.as_str()).unwrap_or("-");
        let _ = writeln!(out, "  action [{}] {}  {}", rec.action.action_id, rec.action.description, increase);
    }
    out
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
