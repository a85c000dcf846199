// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `soa track` and `soa analyze`

use super::{until_interrupted, Session, REFRESH};
use crate::color;
use crate::exit_error::ExitError;
use crate::output::{format_progress, format_report, print_json, OutputFormat};
use clap::Args;
use soa_core::{AnalysisId, PropertyId, TrackPhase};

#[derive(Args)]
pub struct TrackArgs {
    /// Analysis job id
    pub id: String,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Property to analyze
    pub property_id: String,

    /// Days of history the analysis looks back over
    #[arg(long, default_value_t = 30)]
    pub lookback_days: u32,
}

pub async fn track(session: &Session, args: TrackArgs, format: OutputFormat) -> anyhow::Result<()> {
    let id = AnalysisId::new(args.id);
    session.handle.start(id.clone()).await?;
    follow(session, &id, format).await
}

pub async fn analyze(
    session: &Session,
    args: AnalyzeArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let id = session.handle.submit(PropertyId::new(args.property_id), args.lookback_days).await?;
    if format == OutputFormat::Text {
        println!("Started analysis {}", color::header(id.as_str()));
    }
    follow(session, &id, format).await
}

/// Print progress until the run ends. A stop on Ctrl-C is forwarded to the
/// engine before returning.
async fn follow(session: &Session, id: &AnalysisId, format: OutputFormat) -> anyhow::Result<()> {
    let result = until_interrupted(watch(session, id, format)).await;
    if result.is_err() {
        session.handle.stop(id.clone()).await?;
    }
    result
}

async fn watch(session: &Session, id: &AnalysisId, format: OutputFormat) -> anyhow::Result<()> {
    let mut last_line = String::new();
    loop {
        tokio::time::sleep(REFRESH).await;
        let Some(track) = session.handle.track(id.as_str()) else { continue };

        match track.phase {
            TrackPhase::Polling | TrackPhase::Completing => {
                if format == OutputFormat::Text {
                    let line = format_progress(&track);
                    if line != last_line {
                        println!("{line}");
                        last_line = line;
                    }
                }
            }
            TrackPhase::Completed => {
                // Wait for the hand-off fetch to land either way
                if track.report.is_none() && track.report_error.is_none() {
                    continue;
                }
                match format {
                    OutputFormat::Json => print_json(&track)?,
                    OutputFormat::Text => {
                        println!("{}", color::good("Analysis complete"));
                        match (&track.report, &track.report_error) {
                            (Some(report), _) => print!("{}", format_report(report)),
                            (None, Some(error)) => {
                                println!("{}", color::muted(&format!("report unavailable: {error}")))
                            }
                            (None, None) => {}
                        }
                    }
                }
                return Ok(());
            }
            TrackPhase::Failed | TrackPhase::NetworkError => {
                if format == OutputFormat::Json {
                    print_json(&track)?;
                }
                let message = track.error.map(|e| e.to_string()).unwrap_or_default();
                return Err(ExitError::new(1, color::bad(&message)).into());
            }
            TrackPhase::Stopped => return Ok(()),
        }
    }
}
