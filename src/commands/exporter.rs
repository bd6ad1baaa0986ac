// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use serde_json::json;

use super::reports::category_rows;
use super::required_scope;
use crate::config::Settings;
use crate::store::Ledger;
use crate::utils::month_name;

pub fn handle(ledger: &Ledger, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("categories", sub)) = m.subcommand() {
        export_categories(ledger, settings, sub)?;
    }
    Ok(())
}

fn export_categories(ledger: &Ledger, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .context("--format is required")?
        .to_lowercase();
    let out = sub.get_one::<String>("out").context("--out is required")?;
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let scope = required_scope(sub)?;
    let rows = category_rows(ledger, settings, sub)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr =
                csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
            wtr.write_record(["category", "icon", "total_cost", "percentage"])?;
            for r in &rows {
                let total = r.total_cost.to_string();
                let pct = format!("{:.1}", r.percentage);
                wtr.write_record([&r.category, &r.icon, &total, &pct])?;
            }
            wtr.flush()?;
        }
        _ => {
            let doc = json!({
                "year": scope.year,
                "month": scope.month.map(month_name),
                "currency": settings.currency,
                "categories": rows,
            });
            std::fs::write(out, serde_json::to_string_pretty(&doc)?)
                .with_context(|| format!("Write {}", out))?;
        }
    }
    tracing::info!(path = %out, rows = rows.len(), format = %fmt, "exported category report");
    println!("Exported {} categories to {}", rows.len(), out);
    Ok(())
}
