// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `soa board`: recommended actions of a finished analysis, grouped by
//! status.

use super::{Session, REFRESH};
use crate::color;
use crate::exit_error::ExitError;
use crate::output::{format_board, format_money, print_json, OutputFormat};
use clap::Args;
use soa_core::{ActionFilter, AnalysisId, Clock, SystemClock, TypeFilter};

#[derive(Args)]
pub struct BoardArgs {
    /// Completed analysis whose recommendations fill the board
    pub analysis_id: String,

    /// Only show one action type (ALL, PRICING, INVENTORY, MARKETING)
    #[arg(long = "type", value_parser = parse_type_filter, default_value = "ALL")]
    pub type_filter: TypeFilter,

    /// Case-insensitive search over title and type
    #[arg(long, default_value = "")]
    pub search: String,
}

fn parse_type_filter(raw: &str) -> Result<TypeFilter, String> {
    TypeFilter::parse(raw).ok_or_else(|| format!("unknown action type '{raw}'"))
}

pub async fn board(session: &Session, args: BoardArgs, format: OutputFormat) -> anyhow::Result<()> {
    let handle = &session.handle;
    let id = AnalysisId::new(args.analysis_id);
    let report = handle.fetch_report(&id).await.map_err(|e| {
        ExitError::new(1, color::bad(&format!("no report for {id}: {e}")))
    })?;

    let items = report.proposals(SystemClock.epoch_ms());
    let ids: Vec<_> = items.iter().map(|item| item.id.clone()).collect();
    handle.seed(items).await?;
    handle.wait_for(REFRESH, |s| ids.iter().all(|id| s.action(id.as_str()).is_some())).await;

    let board = handle.board(&ActionFilter::new(args.type_filter, args.search));
    match format {
        OutputFormat::Json => print_json(&board)?,
        OutputFormat::Text => {
            print!("{}", format_board(&board));
            println!("{} {}", color::context("Revenue"), format_money(handle.metrics().revenue));
        }
    }
    Ok(())
}
