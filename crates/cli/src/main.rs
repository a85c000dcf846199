// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! `soa`: drive the orchestration engine against a live dashboard API.

mod color;
mod commands;
mod exit_error;
mod output;

use clap::{Parser, Subcommand};
use commands::Session;
use exit_error::ExitError;
use output::OutputFormat;
use soa_engine::EngineConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "soa", version, about = "SOA dashboard orchestration", styles = color::styles())]
struct Cli {
    /// API base URL [env: SOA_API_URL]
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Follow an analysis job until it finishes
    Track(commands::track::TrackArgs),
    /// Start an analysis for a property and follow it
    Analyze(commands::track::AnalyzeArgs),
    /// Show the portfolio dashboard
    Dashboard(commands::dashboard::DashboardArgs),
    /// Show the action board for a finished analysis
    Board(commands::board::BoardArgs),
    /// Fetch a property detail dataset as JSON
    Insight(commands::insight::InsightArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SOA_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn main() {
    init_tracing();
    let code = match run(Cli::parse()) {
        Ok(()) => 0,
        Err(e) => match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("{}", exit.message);
                }
                exit.code
            }
            None => {
                eprintln!("error: {e:#}");
                1
            }
        },
    };
    std::process::exit(code);
}

#[tokio::main]
async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = EngineConfig::from_env()?;
    if let Some(url) = cli.api_url {
        config = config.api_url(url);
    }

    let session = Session::start(config)?;
    let format = cli.output;
    let result = match cli.command {
        Commands::Track(args) => commands::track::track(&session, args, format).await,
        Commands::Analyze(args) => commands::track::analyze(&session, args, format).await,
        Commands::Dashboard(args) => commands::dashboard::dashboard(&session, args, format).await,
        Commands::Board(args) => commands::board::board(&session, args, format).await,
        Commands::Insight(args) => commands::insight::insight(&session, args).await,
    };
    session.finish().await?;
    result
}
