// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine error types

use crate::executor::ExecuteError;
use soa_adapters::ApiError;
use thiserror::Error;

/// Errors from handling an event
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("execute error: {0}")]
    Execute(#[from] ExecuteError),
}

/// Errors surfaced to callers of [`crate::EngineHandle`]
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine is not running")]
    Stopped,
    #[error(transparent)]
    Api(#[from] ApiError),
}
