// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `soa insight`

use super::Session;
use crate::output::print_json;
use clap::Args;
use soa_adapters::PropertyInsight;
use soa_core::PropertyId;

#[derive(Args)]
pub struct InsightArgs {
    pub property_id: String,

    /// competitor-pricing, reviews, amenities, or booking-trends
    #[arg(value_parser = parse_insight)]
    pub kind: PropertyInsight,
}

fn parse_insight(raw: &str) -> Result<PropertyInsight, String> {
    PropertyInsight::parse(raw).ok_or_else(|| {
        let known: Vec<String> = PropertyInsight::ALL.iter().map(|i| i.to_string()).collect();
        format!("expected one of: {}", known.join(", "))
    })
}

pub async fn insight(session: &Session, args: InsightArgs) -> anyhow::Result<()> {
    let value =
        session.handle.property_insight(&PropertyId::new(args.property_id), args.kind).await?;
    print_json(&value)
}
