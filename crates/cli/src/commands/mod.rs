// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod board;
pub mod dashboard;
pub mod insight;
pub mod track;

use crate::exit_error::ExitError;
use soa_adapters::HttpApi;
use soa_core::SystemClock;
use soa_engine::{Engine, EngineConfig, EngineHandle};
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// How often commands re-read engine state for display.
const REFRESH: Duration = Duration::from_millis(200);

/// A running engine and the handle commands drive it through.
pub struct Session {
    pub handle: EngineHandle<HttpApi>,
    engine: JoinHandle<()>,
}

impl Session {
    pub fn start(config: EngineConfig) -> anyhow::Result<Self> {
        let api = HttpApi::new(&config.api_url, config.request_timeout)?;
        tracing::debug!(api_url = %api.base_url(), "starting engine");
        let (engine, handle) = Engine::new(api, SystemClock, config);
        Ok(Self { handle, engine: tokio::spawn(engine.run()) })
    }

    /// Stop the engine and wait for its loop to exit.
    pub async fn finish(self) -> anyhow::Result<()> {
        self.handle.shutdown().await?;
        self.engine.await?;
        Ok(())
    }
}

/// Run `work` until it finishes or the user hits Ctrl-C.
pub async fn until_interrupted<T>(
    work: impl Future<Output = anyhow::Result<T>>,
) -> anyhow::Result<T> {
    tokio::select! {
        result = work => result,
        _ = tokio::signal::ctrl_c() => Err(ExitError::interrupted().into()),
    }
}
