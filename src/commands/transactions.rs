// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::{kind_from, scope_from};
use crate::config::Settings;
use crate::models::{RecordKind, Transaction};
use crate::sort::sort_reverse_chronological;
use crate::store::Ledger;
use crate::utils::{fmt_money, maybe_print_json, month_name, pretty_table};

pub fn handle(ledger: &Ledger, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        list(ledger, settings, sub)?;
    }
    Ok(())
}

fn list(ledger: &Ledger, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(ledger, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|t| {
            let period = match (t.month, t.year) {
                (Some(m), Some(y)) => format!("{} {}", month_name(m), y),
                _ => "-".into(),
            };
            vec![
                t.id.clone().unwrap_or_default(),
                t.kind.to_string(),
                period,
                t.category.clone().unwrap_or_default(),
                fmt_money(&t.amount, &settings.currency),
                if t.tax_applicable {
                    fmt_money(&t.tax_amount, &settings.currency)
                } else {
                    String::new()
                },
                t.description.clone().unwrap_or_default(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Kind", "Period", "Category", "Amount", "Tax", "Description"],
            rows,
        )
    );
    Ok(())
}

/// Normalized transactions matching `--kind/--year/--month/--category`, newest first.
pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let kinds = match kind_from(sub)? {
        Some(k) => vec![k],
        None => vec![RecordKind::Income, RecordKind::Expense, RecordKind::Savings],
    };
    let scope = scope_from(sub)?;
    let category = sub.get_one::<String>("category");

    let mut data: Vec<Transaction> = kinds
        .into_iter()
        .flat_map(|k| ledger.of_kind(k).iter())
        .filter(|t| scope.as_ref().is_none_or(|s| t.matches(s)))
        .filter(|t| category.is_none_or(|c| t.category.as_ref() == Some(c)))
        .cloned()
        .collect();
    sort_reverse_chronological(&mut data);
    if let Some(&limit) = sub.get_one::<usize>("limit") {
        data.truncate(limit);
    }
    Ok(data)
}
