// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;

use crate::config::{IconRule, Settings};
use crate::utils::{parse_decimal, pretty_table};

pub fn handle(dir: &Path, settings: &mut Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => show(dir, settings),
        Some(("set", sub)) => {
            apply(settings, sub)?;
            settings.save(dir)?;
            println!("Saved {}", Settings::path(dir).display());
        }
        _ => {}
    }
    Ok(())
}

/// Applies `settings set` flags in memory; saving is the caller's job.
pub fn apply(settings: &mut Settings, sub: &clap::ArgMatches) -> Result<()> {
    if let Some(ccy) = sub.get_one::<String>("currency") {
        settings.currency = ccy.trim().to_uppercase();
    }
    if let Some(rate) = sub.get_one::<String>("tax-rate") {
        settings.tax_fallback_rate = Some(parse_decimal(rate)?);
    }
    if sub.get_flag("no-tax-fallback") {
        settings.tax_fallback_rate = None;
    }
    if let Some(values) = sub.get_many::<String>("icon") {
        let values: Vec<&String> = values.collect();
        for pair in values.chunks(2) {
            if let [category, icon] = pair {
                settings.icons.push(IconRule {
                    category: category.to_string(),
                    icon: icon.to_string(),
                });
            }
        }
    }
    settings.validate()?;
    Ok(())
}

fn show(dir: &Path, settings: &Settings) {
    let rate = settings
        .tax_fallback_rate
        .map(|r| format!("{}%", r))
        .unwrap_or_else(|| "off".into());
    let mut rows = vec![
        vec!["settings file".into(), Settings::path(dir).display().to_string()],
        vec!["currency".into(), settings.currency.clone()],
        vec!["tax fallback".into(), rate],
    ];
    for rule in &settings.icons {
        rows.push(vec![format!("icon: {}", rule.category), rule.icon.clone()]);
    }
    println!("{}", pretty_table(&["Setting", "Value"], rows));
}
