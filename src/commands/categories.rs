// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::config::Settings;
use crate::store::Ledger;
use crate::utils::{maybe_print_json, pretty_table};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryIcon {
    pub category: String,
    pub icon: String,
}

pub fn handle(ledger: &Ledger, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let data = list_with_icons(ledger, settings);
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let rows = data
                    .into_iter()
                    .map(|c| vec![c.category, c.icon])
                    .collect();
                println!("{}", pretty_table(&["Category", "Icon"], rows));
            }
        }
        Some(("icon", sub)) => {
            let name = sub.get_one::<String>("name").map(String::as_str).unwrap_or("");
            println!("{}", settings.icon_resolver().resolve(name));
        }
        _ => {}
    }
    Ok(())
}

pub fn list_with_icons(ledger: &Ledger, settings: &Settings) -> Vec<CategoryIcon> {
    let resolver = settings.icon_resolver();
    ledger
        .category_names()
        .into_iter()
        .map(|category| CategoryIcon {
            icon: resolver.resolve(&category).to_string(),
            category,
        })
        .collect()
}
