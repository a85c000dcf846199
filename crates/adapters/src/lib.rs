// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! soa-adapters: Adapters for the dashboard backend API

pub mod api;

pub use api::{ApiError, DashboardApi, HttpApi, PropertyInsight};

#[cfg(any(test, feature = "test-support"))]
pub use api::{ApiCall, FakeApi};
