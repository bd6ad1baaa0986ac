// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{kind_from, required_scope, sort_mode_from};
use crate::config::Settings;
use crate::engine::{
    TaxPolicy, YearSource, available_years, group_by_category_scoped, group_by_month_with,
    period_totals, tax_summary,
};
use crate::models::{MonthlyBucket, PeriodTotals, RecordKind, TaxReport};
use crate::store::Ledger;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(ledger: &Ledger, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("monthly", sub)) => monthly(ledger, settings, sub)?,
        Some(("categories", sub)) => categories(ledger, settings, sub)?,
        Some(("tax", sub)) => tax(ledger, settings, sub)?,
        Some(("summary", sub)) => summary(ledger, settings, sub)?,
        Some(("years", sub)) => years(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn monthly_buckets(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<MonthlyBucket>> {
    let years_from = match sub.get_one::<String>("year-source").map(String::as_str) {
        Some("income") => YearSource::Income,
        _ => YearSource::All,
    };
    let mut buckets =
        group_by_month_with(&ledger.income, &ledger.expenses, &ledger.savings, years_from);
    if let Some(&n) = sub.get_one::<usize>("months") {
        buckets.truncate(n);
    }
    Ok(buckets)
}

fn monthly(ledger: &Ledger, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let buckets = monthly_buckets(ledger, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &buckets)? {
        return Ok(());
    }
    let ccy = &settings.currency;
    let rows = buckets
        .iter()
        .map(|b| {
            vec![
                format!("{} {}", b.month_name(), b.year),
                fmt_money(&b.income, ccy),
                fmt_money(&b.expenses, ccy),
                fmt_money(&b.savings, ccy),
                fmt_money(&b.balance, ccy),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Month", "Income", "Expenses", "Savings", "Balance"], rows)
    );
    Ok(())
}

/// One line of the category report as it is shown and exported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub icon: String,
    pub total_cost: Decimal,
    pub percentage: Decimal,
}

pub fn category_rows(
    ledger: &Ledger,
    settings: &Settings,
    sub: &clap::ArgMatches,
) -> Result<Vec<CategoryRow>> {
    let scope = required_scope(sub)?;
    let kind = kind_from(sub)?.unwrap_or(RecordKind::Expense);
    let mode = sort_mode_from(sub)?;
    let resolver = settings.icon_resolver();

    let buckets = mode.apply(group_by_category_scoped(ledger.of_kind(kind), &scope));
    Ok(buckets
        .into_iter()
        .map(|b| CategoryRow {
            icon: resolver.resolve(&b.category).to_string(),
            category: b.category,
            total_cost: b.total_cost,
            percentage: b.percentage,
        })
        .collect())
}

fn categories(ledger: &Ledger, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let rows = category_rows(ledger, settings, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        return Ok(());
    }
    let data = rows
        .iter()
        .map(|r| {
            vec![
                r.category.clone(),
                r.icon.clone(),
                fmt_money(&r.total_cost, &settings.currency),
                format!("{:.1}%", r.percentage),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Icon", "Total", "Share"], data)
    );
    Ok(())
}

pub fn tax_report(ledger: &Ledger, settings: &Settings, sub: &clap::ArgMatches) -> Result<TaxReport> {
    let scope = required_scope(sub)?;
    let policy = if sub.get_flag("no-fallback") {
        TaxPolicy::recorded_only()
    } else {
        settings.tax_policy()
    };
    Ok(tax_summary(&ledger.expenses, &scope, &policy))
}

fn tax(ledger: &Ledger, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let report = tax_report(ledger, settings, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }
    let ccy = &settings.currency;
    let mut data: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|r| {
            vec![
                r.category.clone(),
                r.records.to_string(),
                fmt_money(&r.taxable_amount, ccy),
                fmt_money(&r.tax, ccy),
            ]
        })
        .collect();
    data.push(vec![
        "TOTAL".into(),
        String::new(),
        fmt_money(&report.total_taxable, ccy),
        fmt_money(&report.total_tax, ccy),
    ]);
    println!(
        "{}",
        pretty_table(&["Category", "Records", "Taxable", "Tax"], data)
    );
    Ok(())
}

pub fn summary_totals(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<PeriodTotals> {
    let scope = required_scope(sub)?;
    Ok(period_totals(
        &ledger.income,
        &ledger.expenses,
        &ledger.savings,
        &scope,
    ))
}

fn summary(ledger: &Ledger, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let totals = summary_totals(ledger, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)? {
        return Ok(());
    }
    let ccy = &settings.currency;
    let data = vec![
        vec!["Income".to_string(), fmt_money(&totals.income, ccy)],
        vec!["Expenses".to_string(), fmt_money(&totals.expenses, ccy)],
        vec!["Savings".to_string(), fmt_money(&totals.savings, ccy)],
        vec!["Balance".to_string(), fmt_money(&totals.balance, ccy)],
    ];
    println!("{}", pretty_table(&["", "Amount"], data));
    Ok(())
}

fn years(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let years = available_years(&ledger.income, &ledger.expenses, &ledger.savings);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &years)? {
        let data = years.iter().map(|y| vec![y.to_string()]).collect();
        println!("{}", pretty_table(&["Year"], data));
    }
    Ok(())
}
