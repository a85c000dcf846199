// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `soa dashboard`

use super::{until_interrupted, Session, REFRESH};
use crate::color;
use crate::exit_error::ExitError;
use crate::output::{format_dashboard, print_json, OutputFormat};
use clap::Args;
use soa_core::{SyncStatus, View};

#[derive(Args)]
pub struct DashboardArgs {
    /// Keep the dashboard mounted and print every refresh
    #[arg(long)]
    pub watch: bool,
}

pub async fn dashboard(
    session: &Session,
    args: DashboardArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    session.handle.activate(View::Dashboard).await?;
    let result = until_interrupted(show(session, args.watch, format)).await;
    session.handle.deactivate(View::Dashboard).await?;
    result
}

async fn show(session: &Session, watch: bool, format: OutputFormat) -> anyhow::Result<()> {
    let handle = &session.handle;
    handle
        .wait_for(REFRESH, |s| {
            matches!(s.dashboard.status, SyncStatus::Live | SyncStatus::ConnectionError)
        })
        .await;

    let mut last_synced = None;
    loop {
        let snapshot = handle.dashboard();
        if snapshot.status == SyncStatus::ConnectionError {
            let error = snapshot.error.unwrap_or_default();
            return Err(ExitError::new(1, color::bad(&format!("connection error: {error}"))).into());
        }
        if snapshot.last_synced_ms != last_synced {
            last_synced = snapshot.last_synced_ms;
            match format {
                OutputFormat::Json => print_json(&snapshot)?,
                OutputFormat::Text => print!("{}", format_dashboard(&snapshot)),
            }
        }
        if !watch {
            return Ok(());
        }
        tokio::time::sleep(REFRESH).await;
    }
}
