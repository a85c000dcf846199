// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error that carries a process exit code.
//!
//! Commands return `ExitError` for outcomes that are not bugs (a failed
//! analysis, an unreachable dashboard) so `main()` can pick the code.

use std::fmt;

/// Exit code for an interrupted command, as a shell reports SIGINT.
pub const INTERRUPTED: i32 = 130;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn interrupted() -> Self {
        Self::new(INTERRUPTED, "")
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}
