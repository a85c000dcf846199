// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine configuration

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Tick of the display-only elapsed counter. Not configurable.
pub const ELAPSED_TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a whole number of milliseconds")]
    InvalidMillis { var: &'static str, value: String },
    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
}

/// API endpoint, request timeout, and the interval of every timer the
/// engine arms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub api_url: String,
    pub request_timeout: Duration,
    /// Analysis status poll interval.
    pub poll_interval: Duration,
    /// Delay between an analysis completing and its result hand-off.
    pub handoff_delay: Duration,
    /// Delay between deploying an action and its completion.
    pub deploy_delay: Duration,
    /// Synthetic metrics drift interval while the metrics view is mounted.
    pub drift_interval: Duration,
    /// Silent dashboard refresh interval while the dashboard is mounted.
    pub refresh_interval: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            poll_interval: Duration::from_secs(1),
            handoff_delay: Duration::from_secs(2),
            deploy_delay: Duration::from_secs(2),
            drift_interval: Duration::from_millis(3500),
            refresh_interval: Duration::from_secs(30),
        }
    }
}

impl EngineConfig {
    soa_core::setters! {
        into { api_url: String }
        set {
            request_timeout: Duration,
            poll_interval: Duration,
            handoff_delay: Duration,
            deploy_delay: Duration,
            drift_interval: Duration,
            refresh_interval: Duration,
        }
    }

    /// Defaults overridden by `SOA_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `SOA_*` name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = lookup("SOA_API_URL").filter(|u| !u.trim().is_empty()) {
            config.api_url = url.trim().to_string();
        }

        let millis = |var: &'static str, slot: &mut Duration| -> Result<(), ConfigError> {
            let Some(raw) = lookup(var) else { return Ok(()) };
            let ms: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidMillis { var, value: raw.clone() })?;
            if ms == 0 {
                return Err(ConfigError::Zero { var });
            }
            *slot = Duration::from_millis(ms);
            Ok(())
        };
        millis("SOA_REQUEST_TIMEOUT_MS", &mut config.request_timeout)?;
        millis("SOA_POLL_INTERVAL_MS", &mut config.poll_interval)?;
        millis("SOA_HANDOFF_DELAY_MS", &mut config.handoff_delay)?;
        millis("SOA_DEPLOY_DELAY_MS", &mut config.deploy_delay)?;
        millis("SOA_DRIFT_INTERVAL_MS", &mut config.drift_interval)?;
        millis("SOA_REFRESH_INTERVAL_MS", &mut config.refresh_interval)?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
